use anyhow::{Context, Result};
use beefy_codec::{decode_from_hex, encode_to_hex, Compact, CompactMode, Encode};
use beefy_types::{Commitment, SignedCommitment};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Inspect BEEFY commitments in their wire and JSON forms.
#[derive(Parser, Debug)]
#[command(name = "beefy-inspect", version)]
struct Args {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode 0x-prefixed hex into pretty JSON.
    Decode { kind: Kind, hex: String },
    /// Encode JSON into 0x-prefixed hex.
    Encode { kind: Kind, json: String },
    /// Show the compact encoding of an unsigned integer.
    Compact { value: u128 },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Commitment,
    SignedCommitment,
}

fn decode(kind: Kind, hex: &str) -> Result<String> {
    let json = match kind {
        Kind::Commitment => {
            let c: Commitment = decode_from_hex(hex).context("decode commitment")?;
            serde_json::to_string_pretty(&c)?
        }
        Kind::SignedCommitment => {
            let s: SignedCommitment =
                decode_from_hex(hex).context("decode signed commitment")?;
            tracing::debug!(
                slots = s.signatures.len(),
                signed = s.signature_count(),
                "decoded signed commitment"
            );
            serde_json::to_string_pretty(&s)?
        }
    };
    Ok(json)
}

fn encode(kind: Kind, json: &str) -> Result<String> {
    let hex = match kind {
        Kind::Commitment => {
            let c: Commitment = serde_json::from_str(json).context("parse commitment JSON")?;
            encode_to_hex(&c)
        }
        Kind::SignedCommitment => {
            let s: SignedCommitment =
                serde_json::from_str(json).context("parse signed commitment JSON")?;
            encode_to_hex(&s)
        }
    };
    Ok(hex)
}

fn describe_compact(value: u128) -> String {
    let bytes = Compact(value).encode();
    let mode = match CompactMode::of(value) {
        CompactMode::SingleByte => "single-byte",
        CompactMode::TwoByte => "two-byte",
        CompactMode::FourByte => "four-byte",
        CompactMode::BigInteger => "big-integer",
    };
    format!(
        "{} ({mode}, {} bytes)",
        beefy_codec::to_hex(&bytes),
        bytes.len()
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let out = match args.command {
        Command::Decode { kind, hex } => decode(kind, &hex)?,
        Command::Encode { kind, json } => encode(kind, &json)?,
        Command::Compact { value } => describe_compact(value),
    };
    println!("{out}");
    Ok(())
}
