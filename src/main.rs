//! Command-line front end: mint IDs for this pod or inspect existing ones.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use podflake::{decompose, Clock, Decomposition, Settings, Snowflake, DEFAULT_EPOCH};
use serde::ser::{SerializeSeq, Serializer};

/// Snowflake ID generator keyed by pod name.
#[derive(Parser)]
#[command(name = "podflake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new IDs
    Generate {
        /// Identity hashed into the machine ID (defaults to the pod's hostname)
        #[arg(short, long, env = "PODFLAKE_IDENTITY")]
        identity: Option<String>,
        /// Epoch as RFC 3339 (defaults to 2024-01-01T00:00:00Z)
        #[arg(short, long, env = "PODFLAKE_EPOCH")]
        epoch: Option<DateTime<Utc>>,
        /// Number of IDs to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Split an ID into its parts
    Decompose {
        id: i64,
        /// Epoch the ID was generated with, to print the generation time
        #[arg(short, long, env = "PODFLAKE_EPOCH")]
        epoch: Option<DateTime<Utc>>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            identity,
            epoch,
            count,
        } => generate(identity, epoch, count, cli.output),
        Commands::Decompose { id, epoch } => inspect(id, epoch, cli.output),
    }
}

fn generate(
    identity: Option<String>,
    epoch: Option<DateTime<Utc>>,
    count: usize,
    output: OutputFormat,
) -> Result<()> {
    let identity = match identity {
        Some(identity) => identity,
        None => std::env::var("HOSTNAME")
            .context("no identity given and HOSTNAME is not set")?,
    };
    let settings = Settings::new(epoch.unwrap_or(*DEFAULT_EPOCH), identity);
    let generator = Snowflake::new(settings).context("failed to create generator")?;
    tracing::info!(machine_id = generator.machine_id(), count, "generating IDs");

    let mut out = BufWriter::new(io::stdout().lock());
    write_ids(&generator, count, output, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Stream `count` fresh IDs to `out`, one per line or as a JSON array.
fn write_ids<C: Clock, W: Write>(
    generator: &Snowflake<C>,
    count: usize,
    output: OutputFormat,
    mut out: W,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for _ in 0..count {
                let id = generator.next_id().context("failed to generate ID")?;
                writeln!(out, "{id}")?;
            }
        }
        OutputFormat::Json => {
            let mut serializer = serde_json::Serializer::new(&mut out);
            let mut seq = (&mut serializer).serialize_seq(None)?;
            for _ in 0..count {
                let id = generator.next_id().context("failed to generate ID")?;
                seq.serialize_element(&id)?;
            }
            seq.end()?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Generation time of `parts` when an epoch is known
fn generation_time(
    parts: &Decomposition,
    epoch: Option<DateTime<Utc>>,
) -> Result<Option<DateTime<Utc>>> {
    epoch
        .map(|epoch| {
            parts.generated_at(epoch).with_context(|| {
                format!("generation time of {} is out of range for epoch {epoch}", parts.id)
            })
        })
        .transpose()
}

fn inspect(id: i64, epoch: Option<DateTime<Utc>>, output: OutputFormat) -> Result<()> {
    let parts = decompose(id).with_context(|| format!("cannot decompose {id}"))?;
    let generated_at = generation_time(&parts, epoch)?;

    match output {
        OutputFormat::Text => {
            println!("id:         {}", parts.id);
            println!("time:       {} ({:?})", parts.time, parts.elapsed());
            println!("machine-id: {}", parts.machine_id);
            println!("sequence:   {}", parts.sequence);
            if let Some(at) = generated_at {
                println!("generated:  {}", at.to_rfc3339());
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(parts)?;
            if let (Some(at), Some(object)) = (generated_at, value.as_object_mut()) {
                object.insert("generated-at".to_string(), at.to_rfc3339().into());
            }
            println!("{value}");
        }
    }
    Ok(())
}
