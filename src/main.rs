use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::time::Instant;

use clap::Parser;

use log_rmse::evaluation::{ClassKind, Evaluation};
use log_rmse::helpers::tracing::{format_elapsed, init as init_tracing};
use log_rmse::input::read_records;
use log_rmse::metrics;
use log_rmse::prelude::*;

mod opts;

fn main() -> Result {
    let opts = opts::Opts::parse();
    init_tracing()?;

    let reader: Box<dyn BufRead> = match &opts.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
        )),
        None => Box::new(stdin().lock()),
    };

    let start_instant = Instant::now();
    let mut evaluation = Evaluation::new(ClassKind::Numeric, metrics::standard());
    for record in read_records(reader) {
        let record = record?;
        evaluation.evaluate_numeric(record.predicted, &record.instance());
    }
    tracing::info!(
        n_instances = evaluation.n_instances(),
        elapsed = format_elapsed(start_instant).as_str(),
        "evaluated",
    );

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&evaluation.statistics())?);
    } else {
        print!("{}", evaluation.summary());
    }
    Ok(())
}
