use clap::Parser;
use std::path::PathBuf;

use crate::extract::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "powerlift-subset")]
#[command(author, version, about = "Extract the analysis columns from the OpenPowerlifting CSV export")]
pub struct Cli {
    /// Path to the full OpenPowerlifting CSV export
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path the column subset is written to (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// CSV delimiter, used for both input and output
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_fixed_paths() {
        let cli = Cli::try_parse_from(["powerlift-subset"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("openpowerlifting-dataset.csv"));
        assert_eq!(cli.output, PathBuf::from("openpowerlifting_subset.csv"));
        assert_eq!(cli.delimiter, b',');
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "powerlift-subset",
            "-i",
            "data/full.csv",
            "--output",
            "out.csv",
            "-d",
            ";",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("data/full.csv"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert_eq!(cli.delimiter, b';');
    }

    #[test]
    fn test_rejects_multi_char_delimiter() {
        assert!(Cli::try_parse_from(["powerlift-subset", "-d", "::"]).is_err());
        assert!(Cli::try_parse_from(["powerlift-subset", "-d", "é"]).is_err());
    }
}
