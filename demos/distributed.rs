use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use podflake::{decompose, Settings, Snowflake};

fn main() {
    let epoch = Utc::now();
    let mut handles = vec![];

    // Each thread plays a pod with its own generator
    for pod in 0..4 {
        handles.push(thread::spawn(move || {
            let identity = format!("origin-vod-pod-{pod}");
            let generator = Snowflake::new(Settings::new(epoch, identity)).unwrap();
            let mut ids = Vec::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.next_id().unwrap();
                let parts = decompose(id).unwrap();

                println!(
                    "Pod {} generated ID {} (time={}, machine={}, seq={})",
                    pod, i, parts.time, parts.machine_id, parts.sequence
                );
                ids.push(id);

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }
    println!("\nTotal unique IDs generated across pods: {}", all_ids.len());

    // A single generator shared between threads
    let shared = Arc::new(Snowflake::new(Settings::new(epoch, "origin-vod-shared")).unwrap());
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                (0..2000)
                    .map(|_| shared.next_id().unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<i64> = workers
        .into_iter()
        .flat_map(|w| w.join().unwrap())
        .collect();
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(ids[i] > ids[i - 1], "IDs not unique!");
    }
    println!("All {} shared-generator IDs are unique!", ids.len());
}
