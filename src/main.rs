use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use fraccalc::config::Config;
use fraccalc::math::{infix_to_postfix_with, postfix_to_string, GroupingPolicy};
use fraccalc::session::State;
use fraccalc::term_frontend;

/// Exact fraction calculator. Separate every number, operator and
/// parenthesis with a blank, e.g. `( 1/2 + -3 ) * 4`.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Evaluate one expression, print the result and exit.
    #[arg(short, long)]
    expr: Option<String>,

    /// Also print the postfix form of the expression.
    #[arg(short, long, requires = "expr")]
    postfix: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Ignore unmatched parentheses instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Read configuration from this file instead of the platform default.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if args.no_color {
        config.color = false;
    }
    if args.lenient {
        config.grouping = GroupingPolicy::Lenient;
    }
    let mut state = State::new(config);

    match args.expr {
        Some(expression) => one_shot(&mut state, &expression, args.postfix),
        None => match term_frontend::crossterm_main(state) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("terminal i/o failed: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn one_shot(state: &mut State, expression: &str, show_postfix: bool) -> ExitCode {
    if show_postfix {
        match infix_to_postfix_with(expression, state.config.grouping) {
            Ok(postfix) => println!("Postfix: {}", postfix_to_string(&postfix)),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    match state.calculate(expression) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
