use podflake::{decompose, Settings, Snowflake, DEFAULT_EPOCH};

fn main() {
    // Create a generator for this pod
    let settings = Settings::builder()
        .identity("origin-vod-abc123-xy789")
        .build();
    let generator = Snowflake::new(settings).unwrap();

    // Generate some IDs
    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!(
        "Generated IDs for machine {} (guaranteed to increase):",
        generator.machine_id()
    );
    print_id(id1);
    print_id(id2);
    print_id(id3);

    // Or extract components individually
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Ticks: {} since epoch", podflake::time_part(id2));
    println!("  Machine ID: {}", podflake::machine_id(id2));
    println!("  Sequence: {}", podflake::sequence_number(id2));
}

fn print_id(id: i64) {
    let parts = decompose(id).unwrap();
    let datetime = parts.generated_at(*DEFAULT_EPOCH).unwrap();

    println!(
        "  ID: {id}, Elapsed: {:?}, Human date: {datetime}, Machine ID: {}, Sequence: {}",
        parts.elapsed(),
        parts.machine_id,
        parts.sequence
    );
}
