use std::io::{self, BufRead};

use calcula::{Calculator, interpreter::config::Config, util::num::format_number};
use clap::Parser;

/// calcula evaluates arithmetic expressions such as `2 ^ 3 - cos 60`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Character separating the integer and fractional parts of numbers.
    #[arg(short, long, default_value_t = '.')]
    decimal_separator: char,

    /// Expression to evaluate. When omitted, every line of standard input is
    /// evaluated in turn.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = Config::new(args.decimal_separator).unwrap_or_else(|e| {
                                                        eprintln!("{e}");
                                                        std::process::exit(2);
                                                    });
    let calc = Calculator::with_config(config);

    if let Some(expression) = args.expression {
        match calc.evaluate(&expression) {
            Ok(value) => println!("{}", format_number(value, config.decimal_separator())),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            eprintln!("Failed to read from standard input.");
            std::process::exit(1);
        };
        if line.trim().is_empty() {
            continue;
        }
        match calc.evaluate(&line) {
            Ok(value) => println!("{}", format_number(value, config.decimal_separator())),
            Err(e) => eprintln!("{e}"),
        }
    }
}
