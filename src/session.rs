use std::collections::VecDeque;
use std::fmt;

use log::{debug, info};

use crate::config::Config;
use crate::error::CalcError;
use crate::math::{evaluate_postfix, infix_to_postfix_with, postfix_to_string, Fraction};

/// A successfully evaluated expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: Fraction,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Menu commands of the interactive front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Calc,
    Logs,
    Clear,
    Exit,
}

impl Command {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "/help" | "help" | "h" => Some(Command::Help),
            "/calc" | "calc" | "c" => Some(Command::Calc),
            "/logs" | "logs" | "l" => Some(Command::Logs),
            "/clear" | "clear" => Some(Command::Clear),
            "/exit" | "exit" | "q" | "quit" => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn all() -> [Command; 5] {
        [Command::Help, Command::Calc, Command::Logs, Command::Clear, Command::Exit]
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Help => "/help",
            Command::Calc => "/calc",
            Command::Logs => "/logs",
            Command::Clear => "/clear",
            Command::Exit => "/exit",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Command::Help => "this page",
            Command::Calc => "start calculating",
            Command::Logs => "check the logs",
            Command::Clear => "clear the logs",
            Command::Exit => "exit the program",
        }
    }
}

// state owned by one run of the application loop
pub struct State {
    pub config: Config,
    history: VecDeque<HistoryEntry>,
    pub exiting: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl State {
    pub fn new(config: Config) -> Self {
        Self { config, history: VecDeque::new(), exiting: false }
    }

    /// Evaluates one expression with the configured grouping policy and
    /// records it in the history when it succeeds.
    pub fn calculate(&mut self, expression: &str) -> Result<Fraction, CalcError> {
        let postfix = infix_to_postfix_with(expression, self.config.grouping)?;
        debug!("{expression:?} -> postfix [{}]", postfix_to_string(&postfix));
        let result = evaluate_postfix(&postfix)?;
        debug!("{expression:?} = {result}");
        self.record(expression.trim(), &result);
        Ok(result)
    }

    fn record(&mut self, expression: &str, result: &Fraction) {
        self.history.push_back(HistoryEntry {
            expression: expression.to_owned(),
            result: result.clone(),
        });
        let max = self.config.max_history;
        while max > 0 && self.history.len() > max {
            self.history.pop_front();
        }
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        info!("clearing {} history entries", self.history.len());
        self.history.clear();
    }
}

#[test]
fn command_test() {
    assert_eq!(Command::from_str("/help"), Some(Command::Help));
    assert_eq!(Command::from_str(" /calc "), Some(Command::Calc));
    assert_eq!(Command::from_str("l"), Some(Command::Logs));
    assert_eq!(Command::from_str("/exit"), Some(Command::Exit));
    assert_eq!(Command::from_str("/nope"), None);
}

#[test]
fn history_test() {
    let mut state = State::default();
    assert_eq!(state.calculate(" 1/2 + 1/3 ").unwrap().to_string(), "5/6");
    assert!(state.calculate("1 / 0").is_err());
    assert_eq!(state.calculate("2 * 3").unwrap().to_string(), "6/1");

    let entries: Vec<String> = state.history().map(|e| e.to_string()).collect();
    assert_eq!(entries, ["1/2 + 1/3 = 5/6", "2 * 3 = 6/1"]);

    state.clear_history();
    assert_eq!(state.history().len(), 0);
}

#[test]
fn history_limit_test() {
    let mut state = State::new(Config { max_history: 2, ..Config::default() });
    for expression in ["1", "2", "3"] {
        state.calculate(expression).unwrap();
    }
    let entries: Vec<String> = state.history().map(|e| e.expression.clone()).collect();
    assert_eq!(entries, ["2", "3"]);
}

#[test]
fn grouping_follows_config() {
    use crate::math::GroupingPolicy;
    let mut strict = State::default();
    assert!(strict.calculate("1 + 2 )").is_err());

    let mut lenient = State::new(Config { grouping: GroupingPolicy::Lenient, ..Config::default() });
    assert_eq!(lenient.calculate("1 + 2 )").unwrap().to_string(), "3/1");
}
