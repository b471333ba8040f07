// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Command-line front end: run a program once and print the value left at
//! position 0, or search the `(noun, verb)` space for a target value.

use clap::Parser;
use nounverb::prelude::*;
use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));
const INPUT_HELP: &str =
    "File containing the program as comma-separated integers\nuses stdin if unset or set to '-'";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Run a stride-4 program, or search its (noun, verb) space", long_about = None)]
struct Args {
    #[arg(help = INPUT_HELP.split_once('\n').unwrap().0)]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(help = "Search for the pair whose run leaves this value at position 0")]
    #[arg(short, long)]
    #[arg(conflicts_with_all = ["noun", "verb", "trace"])]
    target: Option<i64>,
    #[arg(help = "Value written to position 1 before a single run")]
    #[arg(short, long)]
    noun: Option<i64>,
    #[arg(help = "Value written to position 2 before a single run")]
    #[arg(short, long)]
    verb: Option<i64>,
    #[arg(help = "Print each executed instruction to stderr")]
    #[arg(long)]
    trace: bool,
}

/// The search space was exhausted without a hit
#[derive(Debug)]
struct NotFound {
    target: i64,
}

impl Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no (noun, verb) pair in 0..=99 leaves {} at position 0",
            self.target
        )
    }
}

impl Error for NotFound {}

fn main() -> Result<(), DisplayedError> {
    env_logger::init();
    let args = Args::parse();

    let input = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let program: Program = input.parse()?;

    if let Some(target) = args.target {
        let answer = search(&program, target).ok_or(NotFound { target })?;
        println!("{answer} (combined: {})", answer.combined());
        return Ok(());
    }

    let mut interpreter = program.interpreter();
    if let Some(noun) = args.noun {
        interpreter.mem_override(1, noun)?;
    }
    if let Some(verb) = args.verb {
        interpreter.mem_override(2, verb)?;
    }
    if args.trace {
        interpreter.start_trace();
    }

    interpreter.run()?;

    if let Some(trace) = interpreter.end_trace() {
        for instr in &trace.0 {
            eprintln!("{instr}");
        }
    }
    println!("{}", interpreter.mem_get(0)?);
    Ok(())
}

/// a wrapper around a [`Box`ed][Box] [dyn Error][Error] that uses its
/// implementation of [Display] for the [Debug] impl, to display the Error if
/// returned from `main`
struct DisplayedError(Box<dyn Error>);
impl<E: Error + 'static> From<E> for DisplayedError {
    fn from(e: E) -> Self {
        Self(Box::from(e))
    }
}

impl Debug for DisplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
