//! poscodec driver: encode -> decode -> verify over one text.
//!
//! With no arguments this runs the fixed built-in sample and prints the
//! verification report. Exit status: 0 on a successful round trip, 1 on a
//! codec failure or mismatch, 2 on bad arguments.

mod config;
mod input_gen;

use config::{Config, TextSource, SAMPLE_TEXT};
use poscodec_core::{decode, encode, verify, Result};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let text = match &config.source {
        TextSource::Sample => SAMPLE_TEXT.to_string(),
        TextSource::Literal(text) => text.clone(),
        TextSource::Random { seed, len } => input_gen::generate_sample_text(*seed, *len),
    };

    match run(&text, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Run one encode/decode/verify cycle and print the report.
///
/// Returns whether the round trip succeeded.
fn run(text: &str, config: &Config) -> Result<bool> {
    let table = encode(text, &config.limits)?;
    let decoded = decode(&table);
    let report = verify(text, &table, &decoded);

    println!("{report}");

    Ok(report.round_trip_ok)
}
