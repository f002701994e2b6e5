use std::{fs, io};

use clap::Parser;
use quando::run;

/// quando is a small expression language where values flow left to right
/// through dot-chained method calls.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quando to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the value of
    /// the last top-level expression of a quando script.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut stdout = io::stdout();
    match run(&script, &mut stdout) {
        Ok(values) => {
            if args.pipe_mode && let Some(value) = values.last() {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
