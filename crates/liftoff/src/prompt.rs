//! Interactive prompting
//!
//! One open-text question at a time. A non-empty default is returned when
//! the operator just presses enter; otherwise the trimmed input is returned,
//! which may be empty.

use std::io;

use dialoguer::Input;

/// Asks the operator one question
pub trait Prompter {
    fn ask(&mut self, prompt: &str, default: &str) -> io::Result<String>;
}

/// Terminal-backed prompter
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        let answer = input.interact_text().map_err(|e| match e {
            dialoguer::Error::IO(io_err) => io_err,
        })?;

        Ok(answer.trim().to_string())
    }
}

/// True when the answer is an affirmative token.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// True when the answer is a rejecting token.
pub fn is_no(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "n" | "no")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("maybe"));
    }

    #[test]
    fn test_is_no() {
        assert!(is_no("n"));
        assert!(is_no("No"));
        assert!(!is_no("y"));
        assert!(!is_no(""));
        assert!(!is_no("maybe"));
    }
}
