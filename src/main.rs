use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monodither::pipeline::{self, PipelineConfig, DEFAULT_OUTPUT};
use monodither::DitherAlgorithm;

#[derive(Parser)]
#[command(name = "monodither")]
#[command(about = "Dither a PNG image to black and white with error diffusion")]
#[command(version)]
struct Cli {
    /// Input PNG file
    input: PathBuf,

    /// Output PNG file
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Error diffusion algorithm: "atkinson" or "floyd-steinberg"
    #[arg(short, long, default_value_t = DitherAlgorithm::Atkinson)]
    algorithm: DitherAlgorithm,

    /// Log progress to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let config = PipelineConfig::new(cli.input)
        .output(cli.output)
        .algorithm(cli.algorithm);

    let summary = pipeline::run(&config).map_err(|e| {
        let kind = e.kind();
        anyhow::Error::new(e)
            .context(format!("{kind}: could not dither {}", config.input.display()))
    })?;

    println!(
        "Dithered {} -> {} ({}x{}, {})",
        config.input.display(),
        config.output.display(),
        summary.width,
        summary.height,
        summary.algorithm
    );
    Ok(())
}

/// Parse arguments; usage errors exit with status 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "monodither=warn",
        1 => "monodither=info",
        _ => "monodither=debug",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
