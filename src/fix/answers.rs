//! Where remediation decisions come from.

use std::collections::VecDeque;

use crate::error::Result;
use crate::ui::{Prompt, PromptType, UserInterface};

/// Prompt key used for every fix decision.
pub const FIX_DECISION_KEY: &str = "fix-decision";

/// Supplies one raw answer per decision.
///
/// `Ok(None)` means the source is exhausted (end of input, empty script) and
/// the session treats it as quit.
pub trait AnswerSource {
    fn next_answer(&mut self, ui: &mut dyn UserInterface, question: &str)
        -> Result<Option<String>>;
}

/// Answers typed by a person at the prompt.
#[derive(Debug, Default)]
pub struct PromptAnswers;

impl PromptAnswers {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerSource for PromptAnswers {
    fn next_answer(
        &mut self,
        ui: &mut dyn UserInterface,
        question: &str,
    ) -> Result<Option<String>> {
        let prompt =
            Prompt::new(FIX_DECISION_KEY, question, PromptType::Input).with_default("n");

        match ui.prompt(&prompt) {
            Ok(result) => Ok(Some(result.as_string())),
            Err(e) => {
                // EOF and a closed terminal both end the session
                tracing::debug!("Fix prompt ended: {}", e);
                Ok(None)
            }
        }
    }
}

/// Answers supplied up front, consumed in order.
///
/// Each answer is echoed after the question so a transcript reads the same
/// as an attended session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    /// Create from a sequence of answers.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated list such as `y,n,q`.
    ///
    /// An empty entry is kept and skips its issue, like pressing Enter at the
    /// prompt. An empty list has no answers at all.
    pub fn parse_list(list: &str) -> Self {
        if list.trim().is_empty() {
            return Self::default();
        }
        Self::new(list.split(',').map(str::trim))
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(
        &mut self,
        ui: &mut dyn UserInterface,
        question: &str,
    ) -> Result<Option<String>> {
        let answer = self.answers.pop_front();
        match &answer {
            Some(answer) => ui.message(&format!("{} {}", question, answer)),
            None => ui.message(&format!("{} (no answers left)", question)),
        }
        Ok(answer)
    }
}
