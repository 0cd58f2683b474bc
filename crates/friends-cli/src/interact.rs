//! User interaction seam: confirmations, alerts and line input.

use std::io::{self, Write};

use colored::Colorize;

/// Blocking user prompts raised by the views.
pub trait Interaction {
    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to notice.
    fn alert(&mut self, message: &str);

    /// Read one line of input. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Option<String>;
}

/// Interaction over the process's stdin and stderr.
#[derive(Debug, Default)]
pub struct Terminal {
    force: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A terminal that answers yes to every confirmation.
    pub fn forced() -> Self {
        Self { force: true }
    }
}

impl Interaction for Terminal {
    fn confirm(&mut self, message: &str) -> bool {
        if self.force {
            return true;
        }

        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        let answer = input.trim();
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message);
    }

    fn prompt(&mut self, label: &str) -> Option<String> {
        eprint!("{} ", label.cyan());
        let _ = io::stderr().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::Interaction;

    /// Interaction driven by a fixed script, recording what was shown.
    #[derive(Debug, Default)]
    pub struct ScriptedUi {
        answers: VecDeque<bool>,
        lines: VecDeque<String>,
        pub confirms: Vec<String>,
        pub alerts: Vec<String>,
    }

    impl ScriptedUi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }

        pub fn with_lines(mut self, lines: &[&str]) -> Self {
            self.lines = lines.iter().map(|l| l.to_string()).collect();
            self
        }
    }

    impl Interaction for ScriptedUi {
        fn confirm(&mut self, message: &str) -> bool {
            self.confirms.push(message.to_string());
            self.answers.pop_front().unwrap_or(false)
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn prompt(&mut self, _label: &str) -> Option<String> {
            self.lines.pop_front()
        }
    }
}
