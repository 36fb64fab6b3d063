//! Line-mode user prompts
//!
//! Used outside the full-screen TUI, e.g. by the first-run setup wizard.
//! The trait keeps the wizard testable with scripted answers.

use std::io;

/// Prompts for the setup wizard
///
/// Every method returns `Ok(None)` when the user backs out.
///
/// # Examples
///
/// ```no_run
/// use inspector::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// if let Some(key) = input.prompt_text("Publishable key", None, true).unwrap() {
///     println!("Using {key}");
/// }
/// ```
pub trait UserInput {
    /// Prompt for free text
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;

    /// Prompt for yes/no
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Prompt for one of `items`, returning its index
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn prompt_select(&self, prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,
}

/// Prompts rendered with `dialoguer`
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        input
            .interact_text()
            .map(Some)
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_select(&self, prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>> {
        dialoguer::Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}

/// Scripted answers for tests
#[cfg(test)]
pub mod scripted {
    use super::{Result, UserInput};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// One scripted answer
    #[derive(Debug, Clone)]
    pub enum Answer {
        /// Text answer
        Text(String),
        /// Confirm answer
        Confirm(bool),
        /// Select answer (index)
        Select(usize),
        /// User backed out
        Cancel,
    }

    /// Replays answers in order; panics on a type mismatch
    #[derive(Debug, Default)]
    pub struct ScriptedInput {
        answers: RefCell<VecDeque<Answer>>,
    }

    impl ScriptedInput {
        /// Create from answers
        #[must_use]
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
            }
        }

        fn next(&self) -> Answer {
            self.answers
                .borrow_mut()
                .pop_front()
                .expect("script ran out of answers")
        }
    }

    impl UserInput for ScriptedInput {
        fn prompt_text(&self, _: &str, default: Option<&str>, _: bool) -> Result<Option<String>> {
            match self.next() {
                Answer::Text(t) if t.is_empty() => Ok(Some(default.unwrap_or_default().to_string())),
                Answer::Text(t) => Ok(Some(t)),
                Answer::Cancel => Ok(None),
                other => panic!("expected text answer, got {other:?}"),
            }
        }

        fn prompt_confirm(&self, _: &str, _: bool) -> Result<Option<bool>> {
            match self.next() {
                Answer::Confirm(b) => Ok(Some(b)),
                Answer::Cancel => Ok(None),
                other => panic!("expected confirm answer, got {other:?}"),
            }
        }

        fn prompt_select(&self, _: &str, _: &[&str], _: usize) -> Result<Option<usize>> {
            match self.next() {
                Answer::Select(i) => Ok(Some(i)),
                Answer::Cancel => Ok(None),
                other => panic!("expected select answer, got {other:?}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::{Answer, ScriptedInput};
    use super::*;

    #[test]
    fn test_input_error_from_io() {
        let io_err = io::Error::other("test error");
        let input_err: InputError = io_err.into();
        assert!(matches!(input_err, InputError::Io(_)));
    }

    #[test]
    fn test_scripted_input_replays_answers() {
        let input = ScriptedInput::new(vec![
            Answer::Text(String::new()),
            Answer::Confirm(false),
            Answer::Select(2),
            Answer::Cancel,
        ]);

        assert_eq!(
            input.prompt_text("name", Some("default"), false).unwrap(),
            Some("default".to_string())
        );
        assert_eq!(input.prompt_confirm("ok?", true).unwrap(), Some(false));
        assert_eq!(input.prompt_select("pick", &["a", "b", "c"], 0).unwrap(), Some(2));
        assert_eq!(input.prompt_text("again", None, true).unwrap(), None);
    }
}
