use std::path::PathBuf;

use clap::{Parser, Subcommand};
use giongo_config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "giongo",
    version,
    about = "Generate example-sentence Anki decks for Japanese onomatopoeia and sort them by frequency"
)]
pub struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an example sentence card for every line of a word list
    Generate {
        /// Line number from which to start iterating through the input file
        #[arg(long, alias = "start_line")]
        start_line: Option<usize>,
        /// File containing the word list, one item per line
        #[arg(long = "input-filename", alias = "input_filename")]
        input: Option<PathBuf>,
        /// File to save the generated deck to
        #[arg(long = "output-filename", alias = "output_filename")]
        output: Option<PathBuf>,
        /// File to save items that could not be generated to
        #[arg(long = "failed-filename", alias = "failed_filename")]
        failed: Option<PathBuf>,
    },
    /// Drop rare words from a generated deck and sort it by frequency
    Sort {
        /// Frequency corpus, a JSON array of [word, _, rank] entries
        #[arg(long = "frequency-data-filename", alias = "frequency_data_filename")]
        frequency_data: Option<PathBuf>,
        /// Ignore words ranked after this
        #[arg(long, alias = "frequency_threshold")]
        frequency_threshold: Option<u32>,
        /// Generated deck to sort
        #[arg(long = "input-filename", alias = "input_filename")]
        input: Option<PathBuf>,
        /// File to save the sorted deck to
        #[arg(long = "output-filename", alias = "output_filename")]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Override config values with the flags that were given
    pub fn apply(&self, config: &mut Config) {
        match self {
            Commands::Generate {
                start_line,
                input,
                output,
                failed,
            } => {
                let generate = &mut config.generate;
                if let Some(start_line) = start_line {
                    generate.start_line = *start_line;
                }
                if let Some(input) = input {
                    generate.input_path = input.clone();
                }
                if let Some(output) = output {
                    generate.output_path = output.clone();
                }
                if let Some(failed) = failed {
                    generate.failed_path = failed.clone();
                }
            }
            Commands::Sort {
                frequency_data,
                frequency_threshold,
                input,
                output,
            } => {
                let sort = &mut config.sort;
                if let Some(frequency_data) = frequency_data {
                    sort.frequency_data_path = frequency_data.clone();
                }
                if let Some(threshold) = frequency_threshold {
                    sort.frequency_threshold = *threshold;
                }
                if let Some(input) = input {
                    sort.input_path = input.clone();
                }
                if let Some(output) = output {
                    sort.output_path = output.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "giongo",
            "sort",
            "--frequency_threshold",
            "10000",
            "--input-filename",
            "deck.txt",
        ])
        .unwrap();
        let mut config = Config::default();

        cli.command.apply(&mut config);

        assert_eq!(config.sort.frequency_threshold, 10_000);
        assert_eq!(config.sort.input_path, PathBuf::from("deck.txt"));
        assert_eq!(config.sort.output_path, PathBuf::from("sorted_anki_deck.txt"));
    }

    #[test]
    fn test_generate_defaults_are_kept() {
        let cli = Cli::try_parse_from(["giongo", "generate", "--start-line", "5"]).unwrap();
        let mut config = Config::default();

        cli.command.apply(&mut config);

        assert_eq!(config.generate.start_line, 5);
        assert_eq!(config.generate.input_path, PathBuf::from("giongo-test.txt"));
    }
}
