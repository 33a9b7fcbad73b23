//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{CtxlintError, Result};

use super::{is_affirmative, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix of environment variables that answer prompts by key.
const PROMPT_ENV_PREFIX: &str = "CTXLINT_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `CTXLINT_PROMPT_<KEY>` environment variables
/// (key upper-cased, `-` replaced by `_`) or from the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn env_key(key: &str) -> String {
        format!("{}{}", PROMPT_ENV_PREFIX, key.to_uppercase().replace('-', "_"))
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        print!("{}", text);
        std::io::stdout().flush().ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self
            .env_overrides
            .get(&Self::env_key(&prompt.key))
            .or(prompt.default.as_ref())
            .cloned();

        match (answer, prompt.prompt_type) {
            (Some(value), PromptType::Confirm) => Ok(PromptResult::Bool(is_affirmative(&value))),
            (Some(value), PromptType::Input) => Ok(PromptResult::String(value)),
            (None, _) => Err(CtxlintError::Other(anyhow::anyhow!(
                "Cannot prompt for '{}' in non-interactive mode (no default value)",
                prompt.key
            ))),
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n◆ {}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptType;

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn not_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut ui = NonInteractiveUI::with_overrides(
            OutputMode::Normal,
            overrides(&[("CTXLINT_PROMPT_FIX_DECISION", "y")]),
        );
        let prompt = Prompt::new("fix-decision", "Apply?", PromptType::Input).with_default("n");

        let result = ui.prompt(&prompt).unwrap();

        assert_eq!(result, PromptResult::String("y".to_string()));
    }

    #[test]
    fn prompt_falls_back_to_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::new("overwrite", "Overwrite?", PromptType::Confirm).with_default("no");

        let result = ui.prompt(&prompt).unwrap();

        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn prompt_without_default_fails() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::new("name", "Name?", PromptType::Input);

        assert!(ui.prompt(&prompt).is_err());
    }

    #[test]
    fn set_output_mode_changes_mode() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        ui.set_output_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
