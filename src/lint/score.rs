//! Freshness scoring.
//!
//! The score starts from the pass rate across all checks and subtracts a
//! fixed penalty per issue, weighted by severity (see [`Severity::penalty`]).

use std::fmt;

use serde::Serialize;

use super::result::CheckResult;
use super::rule::Severity;

/// Compute the 0-100 freshness score for a set of results.
///
/// No applicable checks at all scores 100.
pub fn score(results: &[CheckResult]) -> u8 {
    let total: usize = results.iter().map(CheckResult::total).sum();
    if total == 0 {
        return 100;
    }

    let passed: usize = results.iter().map(|r| r.passed).sum();
    let penalty: u32 = results
        .iter()
        .flat_map(|r| &r.issues)
        .map(|issue| issue.severity.penalty())
        .sum();

    let base = 100.0 * passed as f64 / total as f64;
    (base - f64::from(penalty)).round().clamp(0.0, 100.0) as u8
}

/// Letter grade for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            50..=69 => Grade::D,
            _ => Grade::F,
        }
    }

    /// Whether this grade is considered healthy.
    pub fn is_passing(self) -> bool {
        self <= Grade::C
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Issue counts by severity across results: (errors, warnings, infos).
pub fn severity_counts(results: &[CheckResult]) -> (usize, usize, usize) {
    results.iter().fold((0, 0, 0), |(e, w, i), r| {
        (
            e + r.count(Severity::Error),
            w + r.count(Severity::Warn),
            i + r.count(Severity::Info),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Issue;

    fn result(passed: usize, issues: &[Severity]) -> CheckResult {
        let mut result = CheckResult::new("test");
        for _ in 0..passed {
            result.pass();
        }
        for severity in issues {
            result.fail(Issue::new("rule", *severity, "message"));
        }
        result
    }

    #[test]
    fn no_checks_scores_100() {
        assert_eq!(score(&[]), 100);
        assert_eq!(score(&[CheckResult::new("empty")]), 100);
    }

    #[test]
    fn all_passed_scores_100() {
        assert_eq!(score(&[result(7, &[]), result(3, &[])]), 100);
    }

    #[test]
    fn penalties_are_weighted_by_severity() {
        // base 90, minus 15
        assert_eq!(score(&[result(9, &[Severity::Error])]), 75);
        // base 90, minus 7
        assert_eq!(score(&[result(9, &[Severity::Warn])]), 83);
        // base 90, minus 2
        assert_eq!(score(&[result(9, &[Severity::Info])]), 88);
    }

    #[test]
    fn score_is_clamped_at_zero() {
        let issues = vec![Severity::Error; 10];
        assert_eq!(score(&[result(0, &issues)]), 0);
    }

    #[test]
    fn score_is_rounded() {
        // 100 * 2 / 3 = 66.67
        let mut partial = result(2, &[]);
        partial.failed += 1;
        assert_eq!(score(&[partial]), 67);
    }

    #[test]
    fn adding_issues_never_increases_score() {
        let severities = [Severity::Info, Severity::Warn, Severity::Error];
        for passed in 0..12 {
            let mut issues = Vec::new();
            let mut previous = score(&[result(passed, &issues)]);
            for step in 0..10 {
                issues.push(severities[step % 3]);
                let current = score(&[result(passed, &issues)]);
                assert!(current <= previous, "passed={passed} step={step}");
                assert!(current <= 100);
                previous = current;
            }
        }
    }

    #[test]
    fn score_never_exceeds_pass_rate() {
        for passed in 0..10usize {
            for failed in 0..10usize {
                let issues = vec![Severity::Info; failed];
                let r = result(passed, &issues);
                let total = passed + failed;
                if total == 0 {
                    continue;
                }
                let rate = (100.0 * passed as f64 / total as f64).round() as u8;
                assert!(score(&[r]) <= rate);
            }
        }
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(80), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(69), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn grade_display() {
        assert_eq!(Grade::B.to_string(), "B");
        assert!(Grade::C.is_passing());
        assert!(!Grade::D.is_passing());
    }

    #[test]
    fn counts_by_severity() {
        let results = [
            result(0, &[Severity::Error, Severity::Warn]),
            result(0, &[Severity::Warn, Severity::Info]),
        ];
        assert_eq!(severity_counts(&results), (1, 2, 1));
    }
}
