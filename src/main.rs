//! BlueRand CLI
//!
//! Generates random bytes from a pair of images of the same scene.

use bluerand::{
    analysis::{HashAlgorithm, QualityReport, QualityThresholds},
    generator::{FileConfig, Generator},
    input::Channel,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "bluerand", version, about)]
struct Cli {
    /// First input image.
    first: PathBuf,

    /// Second input image, same dimensions as the first.
    second: PathBuf,

    /// TOML configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Derive bits from the two least significant bits of each channel value.
    #[arg(long)]
    two_lsb: bool,

    /// Channel to sample: red, green or blue.
    #[arg(long, value_parser = parse_channel)]
    channel: Option<Channel>,

    /// Write the raw bytes to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append to the output file instead of truncating it.
    #[arg(long)]
    append: bool,

    /// Render the bytes into this image file.
    #[arg(long)]
    output_image: Option<PathBuf>,

    /// Delete both input images after generating.
    #[arg(long)]
    delete_inputs: bool,

    /// Seed for the sample spacing (reproducible runs).
    #[arg(long)]
    seed: Option<u64>,

    /// Quality limits: default, conservative or permissive.
    /// Overrides the `[quality]` table of the config file.
    #[arg(long, value_parser = parse_quality)]
    quality: Option<QualityThresholds>,

    /// Digest used to fingerprint the output: blake3 or sha256.
    #[arg(long, default_value = "blake3")]
    digest: HashAlgorithm,

    /// Print the generated bytes as hex on stdout.
    #[arg(long)]
    hex: bool,
}

fn parse_channel(s: &str) -> Result<Channel, String> {
    match s.to_ascii_lowercase().as_str() {
        "red" | "r" => Ok(Channel::Red),
        "green" | "g" => Ok(Channel::Green),
        "blue" | "b" => Ok(Channel::Blue),
        other => Err(format!("unknown channel: {other}")),
    }
}

fn parse_quality(s: &str) -> Result<QualityThresholds, String> {
    QualityThresholds::preset(s).ok_or_else(|| format!("unknown quality preset: {s}"))
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    info!("BlueRand v{}", bluerand::VERSION);

    let file_config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let thresholds = cli.quality.unwrap_or(file_config.quality);
    let mut config = file_config.generator;
    config.consider_two_lsb |= cli.two_lsb;
    config.delete_input_files |= cli.delete_inputs;
    if cli.append {
        config.overwrite_output_file = false;
    }
    if let Some(channel) = cli.channel {
        config.channel = channel;
    }
    if cli.output.is_some() {
        config.output_file = cli.output;
    }
    if cli.output_image.is_some() {
        config.output_image = cli.output_image;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let generator = Generator::with_config(cli.first, cli.second, config);
    let bytes = match generator.generate_random() {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Generation failed ({}): {}", e.kind(), e);
            std::process::exit(1);
        }
    };

    let report = QualityReport::assess(&bytes, &thresholds, cli.digest);
    info!(
        bytes = bytes.len(),
        fingerprint = %report.fingerprint,
        "Generated random bytes"
    );
    info!(
        "Bit bias {:.4}, serial correlation {:.4}, longest run {}",
        report.stats.bit_bias, report.stats.serial_correlation, report.stats.longest_run
    );
    if let Some(ref violation) = report.violation {
        warn!("Output quality check failed: {}", violation);
    }

    if cli.hex {
        println!(
            "{}",
            bytes
                .data()
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<String>()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "bluerand",
            "a.png",
            "b.png",
            "--two-lsb",
            "--channel",
            "green",
            "--append",
            "-o",
            "out.bin",
            "--digest",
            "sha256",
        ])
        .unwrap();

        assert!(cli.two_lsb);
        assert!(cli.append);
        assert_eq!(cli.channel, Some(Channel::Green));
        assert_eq!(cli.output, Some(PathBuf::from("out.bin")));
        assert_eq!(cli.digest, HashAlgorithm::Sha256);
    }

    #[test]
    fn test_cli_selects_quality_preset() {
        let cli =
            Cli::try_parse_from(["bluerand", "a.png", "b.png", "--quality", "conservative"]).unwrap();
        assert_eq!(cli.quality, Some(QualityThresholds::conservative()));

        let cli = Cli::try_parse_from(["bluerand", "a.png", "b.png"]).unwrap();
        assert!(cli.quality.is_none());

        assert!(Cli::try_parse_from(["bluerand", "a.png", "b.png", "--quality", "strict"]).is_err());
    }

    #[test]
    fn test_cli_requires_two_images() {
        assert!(Cli::try_parse_from(["bluerand", "a.png"]).is_err());
    }
}
