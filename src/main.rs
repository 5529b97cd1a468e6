use std::io::stdout;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use powerlift_subset::cli::Cli;
use powerlift_subset::SubsetExtractor;

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout only carries the progress lines.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("powerlift_subset=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse_args();

    let extractor = SubsetExtractor::new(cli.input, cli.output).with_delimiter(cli.delimiter);
    match extractor.run(&mut stdout().lock()) {
        Ok(summary) => {
            tracing::debug!(rows = summary.rows, columns = summary.columns, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
