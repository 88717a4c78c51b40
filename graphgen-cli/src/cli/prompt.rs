//! Line-oriented interactive prompts.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Prompt shown when the node count was not given on the command line.
pub const NODE_COUNT_PROMPT: &str = "N> ";

/// Prompt shown when the output base name was not given on the command line.
pub const FILENAME_PROMPT: &str = "Filename> ";

/// Errors raised while asking the user for input.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended before an answer was read.
    #[error("input closed while waiting for `{prompt}`")]
    Closed {
        /// The prompt that went unanswered, without trailing whitespace.
        prompt: String,
    },
    /// Writing the prompt or reading the answer failed.
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Source of answers for values missing from the command line.
pub trait Prompt {
    /// Shows `prompt` and returns the answer with surrounding whitespace
    /// removed.
    ///
    /// # Errors
    /// Returns [`PromptError::Closed`] at end of input and
    /// [`PromptError::Io`] when the underlying streams fail.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Writes prompts to `output` and reads one line per answer from `input`.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::{LinePrompter, Prompt};
///
/// let mut shown = Vec::new();
/// let mut prompter = LinePrompter::new("12\n".as_bytes(), &mut shown);
/// assert_eq!(prompter.ask("N> ")?, "12");
/// drop(prompter);
/// assert_eq!(shown, b"N> ");
/// # Ok::<(), graphgen_cli::cli::PromptError>(())
/// ```
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> LinePrompter<R, W> {
    /// Creates a prompter over the given streams.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Creates a prompter over the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PromptError::Closed {
                prompt: prompt.trim_end().to_owned(),
            });
        }
        Ok(answer.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_read_in_order_and_trimmed() {
        let mut shown = Vec::new();
        let mut prompter = LinePrompter::new(&b"  40 \r\nout\n"[..], &mut shown);
        assert_eq!(prompter.ask(NODE_COUNT_PROMPT).expect("first answer"), "40");
        assert_eq!(prompter.ask(FILENAME_PROMPT).expect("second answer"), "out");
        drop(prompter);
        assert_eq!(String::from_utf8_lossy(&shown), "N> Filename> ");
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut prompter = LinePrompter::new(&b""[..], io::sink());
        let err = prompter
            .ask(FILENAME_PROMPT)
            .expect_err("empty input has no answer");
        match err {
            PromptError::Closed { prompt } => assert_eq!(prompt, "Filename>"),
            PromptError::Io(other) => panic!("unexpected error: {other}"),
        }
    }
}
