//! # podflake
//!
//! A Snowflake ID generator for fleets of pods that have names but no
//! coordinator handing out machine IDs.
//!
//! Generates 63-bit identifiers that are:
//! - 📈 Time-sorted (41 bits of ~1.05 ms ticks since a configured epoch)
//! - 🔄 Strictly increasing per generator, even under concurrent callers
//! - 🏷️ Tagged with a 12-bit machine ID hashed from a pod or host name
//! - ➕ Always positive as a signed 64-bit integer
//!
//! ```
//! use podflake::{decompose, Settings, Snowflake};
//!
//! let settings = Settings::builder().identity("origin-vod-abc123-xy789").build();
//! let generator = Snowflake::new(settings)?;
//!
//! let id = generator.next_id()?;
//! let parts = decompose(id)?;
//! assert_eq!(parts.machine_id, generator.machine_id() as i64);
//! # Ok::<(), podflake::SnowflakeError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
mod hash;


// Re-export main types
pub use config::{Settings, SettingsBuilder, SettingsError};
pub use config::{DEFAULT_EPOCH, TICK, TICK_NANOS};
pub use config::{ID_BITS, MACHINE_ID_BITS, SEQUENCE_BITS, TIME_BITS};
pub use config::{MACHINE_ID_MASK, SEQUENCE_MASK, TIME_MASK};
pub use error::SnowflakeError;
pub use extractor::{compose, decompose, elapsed_time, Decomposition};
pub use extractor::{machine_id, sequence_number, time_part};
pub use generator::{Clock, Snowflake, SystemClock};
pub use hash::hash;
