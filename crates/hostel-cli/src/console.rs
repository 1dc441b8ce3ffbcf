//! Line-oriented terminal I/O.
//!
//! Everything the menus print or ask goes through [`Console`], so the whole
//! dispatcher can be driven by a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub const RULE_WIDTH: usize = 60;

pub trait Console {
    /// Print `prompt` and read one line without its trailing newline.
    /// `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn say(&mut self, line: &str);

    /// Like [`Console::read_line`] but trims and maps closed input to "".
    fn ask(&mut self, prompt: &str) -> String {
        self.read_line(prompt)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    fn header(&mut self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        self.say("");
        self.say(&rule);
        self.say(&format!("  {title}"));
        self.say(&rule);
    }

    fn separator(&mut self) {
        self.say(&"-".repeat(RULE_WIDTH));
    }
}

/// Console over the process's stdin/stdout.
pub struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.stdout, "{prompt}");
        let _ = self.stdout.flush();

        let mut line = String::new();
        match self.stdin.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                None
            }
        }
    }

    fn say(&mut self, line: &str) {
        let _ = writeln!(self.stdout, "{line}");
    }
}

/// Console fed from a fixed list of input lines; records everything printed.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether any printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.output.push(prompt.to_string());
        self.inputs.pop_front()
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console() {
        let mut console = ScriptedConsole::new(["  first  ", "second"]);
        assert_eq!(console.ask("> "), "first");
        assert_eq!(console.read_line("> ").as_deref(), Some("second"));
        assert_eq!(console.read_line("> "), None);
        assert_eq!(console.ask("> "), "");

        console.header("Title");
        assert!(console.printed("  Title"));
        assert_eq!(console.remaining_inputs(), 0);
    }
}
