//! CLI options.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// JSON lines with `predicted` and `actual` fields, reads the standard input if omitted
    #[arg(short, long, env = "LOG_RMSE_INPUT")]
    pub input: Option<PathBuf>,

    /// Print the statistics as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_ok() {
        Opts::command().debug_assert();
    }

    #[test]
    fn parse_ok() {
        let opts = Opts::parse_from(["log-rmse", "-i", "predictions.jsonl", "--json"]);
        assert_eq!(opts.input, Some(PathBuf::from("predictions.jsonl")));
        assert!(opts.json);
    }
}
