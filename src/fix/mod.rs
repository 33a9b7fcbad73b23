//! Interactive remediation.
//!
//! A [`FixSession`] walks every issue of a report in order. Issues that map
//! to a concrete [`FixAction`] are presented with a preview and a decision is
//! requested from an [`AnswerSource`]; everything else is printed as
//! advisory. Accepted actions accumulate in a [`FixPlan`], which the caller
//! applies in one [`write_atomic`] call, or not at all when nothing was
//! accepted.
//!
//! # Example
//!
//! ```
//! use ctxlint::extract::extract;
//! use ctxlint::fix::{FixSession, ScriptedAnswers};
//! use ctxlint::lint::{CheckResult, Issue, Severity};
//! use ctxlint::ui::MockUI;
//!
//! let doc = extract("# App\n\nSee `./src/gone`.\n");
//! let mut result = CheckResult::new("filesystem");
//! result.fail(Issue::new("missing-path", Severity::Error, "gone").with_line(3));
//!
//! let mut ui = MockUI::new();
//! let mut answers = ScriptedAnswers::parse_list("y");
//! let plan = FixSession::new(&doc)
//!     .run(&[result], &mut ui, &mut answers)
//!     .unwrap();
//!
//! assert_eq!(plan.apply(&doc.raw_content), "# App\n\n");
//! ```

mod answers;
mod plan;

pub use answers::{AnswerSource, PromptAnswers, ScriptedAnswers, FIX_DECISION_KEY};
pub use plan::{write_atomic, FixPlan};

use crate::detection::PackageManager;
use crate::error::Result;
use crate::extract::ParsedDocument;
use crate::lint::{CheckResult, Issue};
use crate::templates::section_template;
use crate::ui::UserInterface;

/// Question asked for every fixable issue.
pub const FIX_QUESTION: &str = "Apply this fix? [y]es / [n]o / [q]uit";

/// A concrete edit that resolves an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixAction {
    /// Delete a 1-based line.
    RemoveLine(usize),
    /// Append a section to the end of the document.
    AddSection(String),
}

impl FixAction {
    /// Derive the action for `issue`, if it has one.
    ///
    /// A line within `1..=line_count` wins; otherwise a section template for
    /// the issue's rule; otherwise the issue is advisory.
    pub fn derive(issue: &Issue, line_count: usize, pm: PackageManager) -> Option<Self> {
        if let Some(line) = issue.line.filter(|l| (1..=line_count).contains(l)) {
            return Some(Self::RemoveLine(line));
        }
        section_template(issue.rule.as_str(), pm).map(Self::AddSection)
    }
}

/// A parsed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Skip,
    Quit,
}

impl Decision {
    /// `y`/`yes` accept, `q`/`quit` quit, anything else skips.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Self::Accept,
            "q" | "quit" => Self::Quit,
            _ => Self::Skip,
        }
    }
}

/// One remediation pass over a single document.
pub struct FixSession<'a> {
    doc: &'a ParsedDocument,
    package_manager: PackageManager,
}

impl<'a> FixSession<'a> {
    /// Create a session; section templates use the package manager the
    /// document already invokes, falling back to npm.
    pub fn new(doc: &'a ParsedDocument) -> Self {
        let package_manager =
            PackageManager::detect_in_text(&doc.raw_content).unwrap_or(PackageManager::Npm);
        Self {
            doc,
            package_manager,
        }
    }

    /// Override the package manager used by section templates.
    pub fn with_package_manager(mut self, pm: PackageManager) -> Self {
        self.package_manager = pm;
        self
    }

    /// Walk every issue and collect accepted edits.
    pub fn run(
        &self,
        results: &[CheckResult],
        ui: &mut dyn UserInterface,
        answers: &mut dyn AnswerSource,
    ) -> Result<FixPlan> {
        let mut plan = FixPlan::new();
        let issues: Vec<&Issue> = results.iter().flat_map(|r| &r.issues).collect();
        let total = issues.len();

        for (index, issue) in issues.into_iter().enumerate() {
            let heading = format!(
                "[{}/{}] {}[{}]: {}",
                index + 1,
                total,
                issue.severity,
                issue.rule,
                issue.message
            );

            let Some(action) =
                FixAction::derive(issue, self.doc.lines.len(), self.package_manager)
            else {
                ui.message(&format!("{} (advisory, no automatic fix)", heading));
                if let Some(ref suggestion) = issue.suggestion {
                    ui.show_hint(suggestion);
                }
                continue;
            };

            ui.message(&heading);
            if let Some(ref context) = issue.context {
                ui.message(&format!("   | {}", context));
            }
            self.preview(ui, &action);

            let Some(answer) = answers.next_answer(ui, FIX_QUESTION)? else {
                tracing::debug!("Answers exhausted at issue {} of {}", index + 1, total);
                break;
            };

            match Decision::parse(&answer) {
                Decision::Accept => match action {
                    FixAction::RemoveLine(line) => {
                        plan.removals.insert(line);
                    }
                    FixAction::AddSection(section) => plan.sections.push(section),
                },
                Decision::Skip => {}
                Decision::Quit => {
                    tracing::debug!("Session quit at issue {} of {}", index + 1, total);
                    break;
                }
            }
        }

        tracing::debug!(
            "Accepted {} line removal(s) and {} section(s)",
            plan.removals.len(),
            plan.sections.len()
        );
        Ok(plan)
    }

    fn preview(&self, ui: &mut dyn UserInterface, action: &FixAction) {
        match action {
            FixAction::RemoveLine(line) => {
                let text = self.doc.line_text(*line).unwrap_or_default();
                ui.message(&format!("   - {:>4} {}", line, text));
            }
            FixAction::AddSection(section) => {
                for line in section.lines() {
                    ui.message(&format!("   + {}", line));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use crate::lint::Severity;
    use crate::ui::MockUI;

    fn numbered_document(count: usize) -> ParsedDocument {
        let text: String = (1..=count).map(|i| format!("line {}\n", i)).collect();
        extract(&text)
    }

    fn results(issues: Vec<Issue>) -> Vec<CheckResult> {
        let mut result = CheckResult::new("filesystem");
        for issue in issues {
            result.fail(issue);
        }
        vec![result]
    }

    fn line_issue(line: usize) -> Issue {
        Issue::new("missing-path", Severity::Error, format!("stale path on {}", line))
            .with_line(line)
    }

    fn run_scripted(doc: &ParsedDocument, results: &[CheckResult], answers: &str) -> FixPlan {
        let mut ui = MockUI::new();
        let mut answers = ScriptedAnswers::parse_list(answers);
        FixSession::new(doc).run(results, &mut ui, &mut answers).unwrap()
    }

    #[test]
    fn decision_parsing() {
        assert_eq!(Decision::parse("y"), Decision::Accept);
        assert_eq!(Decision::parse(" YES "), Decision::Accept);
        assert_eq!(Decision::parse("Q"), Decision::Quit);
        assert_eq!(Decision::parse("quit"), Decision::Quit);
        assert_eq!(Decision::parse("n"), Decision::Skip);
        assert_eq!(Decision::parse("yep"), Decision::Skip);
        assert_eq!(Decision::parse(""), Decision::Skip);
    }

    #[test]
    fn derive_prefers_in_bounds_line() {
        let issue = line_issue(3);
        assert_eq!(
            FixAction::derive(&issue, 10, PackageManager::Npm),
            Some(FixAction::RemoveLine(3))
        );
        assert_eq!(FixAction::derive(&issue, 2, PackageManager::Npm), None);
    }

    #[test]
    fn derive_uses_section_templates() {
        let issue = Issue::new("missing-test-section", Severity::Warn, "No testing section");

        let action = FixAction::derive(&issue, 10, PackageManager::Pnpm).unwrap();

        match action {
            FixAction::AddSection(section) => assert!(section.contains("pnpm run test")),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn derive_without_line_or_template_is_advisory() {
        let issue = Issue::new("no-test-script", Severity::Warn, "No test script");
        assert_eq!(FixAction::derive(&issue, 10, PackageManager::Npm), None);
    }

    #[test]
    fn accepted_removals_for_lines_23_and_41() {
        let doc = numbered_document(50);
        let results = results(vec![line_issue(23), line_issue(41)]);

        let plan = run_scripted(&doc, &results, "y,y");
        let edited = plan.apply(&doc.raw_content);

        assert_eq!(plan.removals.iter().copied().collect::<Vec<_>>(), vec![23, 41]);
        assert_eq!(edited.lines().count(), 48);
        assert!(!edited.contains("line 23\n"));
        assert!(!edited.contains("line 41\n"));
        assert!(edited.contains("line 22\nline 24\n"));
        assert!(edited.contains("line 40\nline 42\n"));
    }

    #[test]
    fn quit_keeps_earlier_accepts() {
        let doc = numbered_document(10);
        let results = results(vec![line_issue(2), line_issue(5), line_issue(7)]);

        let plan = run_scripted(&doc, &results, "y,q,y");

        assert_eq!(plan.removals.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn exhausted_answers_stop_the_session() {
        let doc = numbered_document(10);
        let results = results(vec![line_issue(2), line_issue(5)]);
        let mut ui = MockUI::new();
        let mut answers = ScriptedAnswers::parse_list("n");

        let plan = FixSession::new(&doc)
            .run(&results, &mut ui, &mut answers)
            .unwrap();

        assert!(plan.is_empty());
        assert!(ui.has_message("(no answers left)"));
    }

    #[test]
    fn nothing_accepted_yields_empty_plan() {
        let doc = numbered_document(10);
        let results = results(vec![line_issue(2), line_issue(5)]);

        let plan = run_scripted(&doc, &results, "n,maybe");

        assert!(plan.is_empty());
    }

    #[test]
    fn advisory_issues_are_not_prompted() {
        let doc = numbered_document(10);
        let results = results(vec![
            Issue::new("no-test-script", Severity::Warn, "No test script")
                .with_suggestion("Add a test script"),
            line_issue(4),
        ]);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(FIX_DECISION_KEY, vec!["y"]);

        let plan = FixSession::new(&doc)
            .run(&results, &mut ui, &mut PromptAnswers::new())
            .unwrap();

        assert_eq!(ui.prompts_shown().len(), 1);
        assert!(ui.has_message("advisory"));
        assert_eq!(ui.hints(), &["Add a test script"]);
        assert!(plan.removals.contains(&4));
    }

    #[test]
    fn preview_shows_removed_line_and_context() {
        let doc = extract("# App\n\nSee `./src/gone`.\n");
        let results = results(vec![Issue::new("missing-path", Severity::Error, "gone")
            .located(&doc, Some(3))]);
        let mut ui = MockUI::new();

        run_scripted_with(&doc, &results, &mut ui, "n");

        assert!(ui.has_message("| See `./src/gone`."));
        assert!(ui.has_message("-    3 See `./src/gone`."));
    }

    fn run_scripted_with(
        doc: &ParsedDocument,
        results: &[CheckResult],
        ui: &mut MockUI,
        answers: &str,
    ) -> FixPlan {
        let mut answers = ScriptedAnswers::parse_list(answers);
        FixSession::new(doc).run(results, ui, &mut answers).unwrap()
    }

    #[test]
    fn sections_are_appended_in_acceptance_order() {
        let doc = extract("# App\n\nRun `yarn dev`.\n");
        let results = results(vec![
            Issue::new("missing-build-section", Severity::Info, "No build section"),
            Issue::new("missing-setup-section", Severity::Warn, "No setup section"),
        ]);

        let plan = run_scripted(&doc, &results, "y,y");
        let edited = plan.apply(&doc.raw_content);

        let build = edited.find("## Build").unwrap();
        let setup = edited.find("## Setup").unwrap();
        assert!(build < setup);
        assert!(edited.contains("yarn install"));
    }

    #[test]
    fn empty_answer_skips_like_enter_at_the_prompt() {
        let doc = numbered_document(10);
        let results = results(vec![line_issue(1), line_issue(2), line_issue(3)]);

        let scripted = run_scripted(&doc, &results, "y,,y");

        let mut ui = MockUI::new();
        ui.queue_prompt_responses(FIX_DECISION_KEY, vec!["y", "", "y"]);
        let prompted = FixSession::new(&doc)
            .run(&results, &mut ui, &mut PromptAnswers::new())
            .unwrap();

        assert_eq!(scripted.removals.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(scripted, prompted);
    }

    #[test]
    fn prompted_and_scripted_sessions_agree() {
        let doc = numbered_document(30);
        let results = results(vec![
            line_issue(3),
            Issue::new("missing-setup-section", Severity::Warn, "No setup section"),
            line_issue(12),
            line_issue(20),
            line_issue(25),
        ]);
        let sequence = vec!["y", "yes", "n", "Y", "q"];

        let scripted = run_scripted(&doc, &results, &sequence.join(","));

        let mut ui = MockUI::new();
        ui.queue_prompt_responses(FIX_DECISION_KEY, sequence);
        let prompted = FixSession::new(&doc)
            .run(&results, &mut ui, &mut PromptAnswers::new())
            .unwrap();

        assert_eq!(scripted, prompted);
        assert_eq!(scripted.removals.iter().copied().collect::<Vec<_>>(), vec![3, 20]);
        assert_eq!(scripted.sections.len(), 1);
    }
}
