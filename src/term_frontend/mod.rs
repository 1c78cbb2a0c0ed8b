use crossterm::cursor;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use std::io::{self, stdin, stdout, BufRead, Write};

use crate::session::{Command, State};

/// Runs the menu loop on the process's terminal.
pub fn crossterm_main(state: State) -> io::Result<()> {
    let mut frontend = Frontend::new(state, stdin().lock(), stdout());
    frontend.run()
}

/// The line-oriented menu loop: `/help`, `/calc`, `/logs`, `/clear`, `/exit`.
///
/// Generic over its reader and writer so it can run against a terminal or
/// against in-memory buffers.
pub struct Frontend<R, W> {
    state: State,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Frontend<R, W> {
    pub fn new(state: State, input: R, output: W) -> Self {
        Self { state, input, output }
    }

    pub fn into_parts(self) -> (State, W) {
        (self.state, self.output)
    }

    pub fn run(&mut self) -> io::Result<()> {
        while !self.state.exiting {
            self.say(Color::Green, "Fraction Calculator\n")?;
            self.say(Color::DarkGrey, "/help for commands\n\n")?;

            let Some(line) = self.read_line()? else { break };
            self.clear()?;
            match Command::from_str(&line) {
                Some(Command::Help) => self.help()?,
                Some(Command::Calc) => self.calc()?,
                Some(Command::Logs) => self.logs()?,
                Some(Command::Clear) => self.state.clear_history(),
                Some(Command::Exit) => self.state.exiting = true,
                None => {}
            }
        }
        self.output.flush()
    }

    fn help(&mut self) -> io::Result<()> {
        self.say(Color::Green, "Commands\n")?;
        for command in Command::all() {
            let line = format!("{} : {}\n", command.name(), command.description());
            self.say(Color::DarkGrey, &line)?;
        }
        self.say(Color::White, "\n")?;
        self.press_enter()?;
        self.clear()
    }

    fn calc(&mut self) -> io::Result<()> {
        while !self.state.exiting {
            self.say(Color::Red, "WARNING! expressions without a blank does not work!\n")?;
            self.say(Color::DarkGreen, "If you want to exit, type 'q'\n")?;
            self.say(Color::Green, "Input a mathematical expression: ")?;

            let Some(expression) = self.read_line()? else { break };
            if expression.trim() == "q" {
                return self.clear();
            }

            match self.state.calculate(&expression) {
                Ok(result) => self.say(Color::White, &format!("Result: {result}\n"))?,
                Err(e) => self.say(Color::Red, &format!("Error: {e}\n"))?,
            }

            if self.state.config.pause_after_result {
                self.press_enter()?;
            }
            self.clear()?;
        }
        Ok(())
    }

    fn logs(&mut self) -> io::Result<()> {
        let lines: Vec<String> = self.state.history().map(|entry| entry.to_string()).collect();
        if lines.is_empty() {
            self.say(Color::Red, "log empty!\n\n")?;
        } else {
            for (i, line) in lines.iter().enumerate() {
                self.say(Color::Green, &format!("[{}] ", i + 1))?;
                self.say(Color::DarkGrey, &format!("{line}\n"))?;
            }
        }
        self.say(Color::White, "\n")?;
        self.press_enter()?;
        self.clear()
    }

    fn say(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.state.config.color {
            queue!(self.output, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            queue!(self.output, Print(text))
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.state.config.clear_screen {
            queue!(self.output, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        self.output.flush()
    }

    fn press_enter(&mut self) -> io::Result<()> {
        self.say(Color::White, "Press Enter to Continue...")?;
        self.read_line().map(|_| ())
    }

    // end of input ends the session
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.state.exiting = true;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
    }
}

#[cfg(test)]
fn plain_state() -> State {
    use crate::config::Config;
    State::new(Config { color: false, clear_screen: false, ..Config::default() })
}

#[cfg(test)]
fn drive(state: State, input: &str) -> (State, String) {
    let mut frontend = Frontend::new(state, input.as_bytes(), Vec::new());
    frontend.run().unwrap();
    let (state, output) = frontend.into_parts();
    (state, String::from_utf8(output).unwrap())
}

#[test]
fn help_lists_commands() {
    let (_, out) = drive(plain_state(), "/help\n\n/exit\n");
    assert!(out.contains("/calc : start calculating"));
    assert!(out.contains("/exit : exit the program"));
}

#[test]
fn empty_logs() {
    let (_, out) = drive(plain_state(), "/logs\n\n/exit\n");
    assert!(out.contains("log empty!"));
}

#[test]
fn end_of_input_exits() {
    let (state, _) = drive(plain_state(), "/calc\n1 + 1\n");
    assert!(state.exiting);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn colors_are_emitted_when_enabled() {
    let (_, out) = drive(State::default(), "/exit\n");
    assert!(out.contains("Fraction Calculator"));
    assert!(out.contains('\u{1b}'));
}
