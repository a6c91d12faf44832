//! Self-checking suite over the three dispatch idioms.
//!
//! A [`Scenario`] collects named [`Check`]s. Failed checks are recorded,
//! not raised, so every assertion in a run is reported. [`SuiteReport`]
//! turns the result into a printable summary and a process exit status.

use std::fmt::{Debug, Write};

use colored::{ColoredString, Colorize};
use tracing::info;

use crate::dispatch::Dispatcher;
use crate::erased::ErasedValue;
use crate::error::{DispatchError, Result};
use crate::variant::Variant;

pub const SUITE_NAME: &str = "ComplexDispatchTest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { expected: String, actual: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: String,
    pub outcome: Outcome,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    checks: Vec<Check>,
}

impl Scenario {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
        }
    }

    /// Records whether `actual` equals `expected`.
    pub fn check_eq<T: PartialEq + Debug>(&mut self, name: &str, expected: T, actual: T) {
        let outcome = if expected == actual {
            Outcome::Passed
        } else {
            Outcome::Failed {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            }
        };
        self.push(name, outcome);
    }

    /// Records whether `result` failed with an error accepted by `predicate`.
    pub fn check_err<T, P>(&mut self, name: &str, result: Result<T>, predicate: P)
    where
        T: Debug,
        P: Fn(&DispatchError) -> bool,
    {
        let outcome = match result {
            Err(err) if predicate(&err) => Outcome::Passed,
            Err(err) => Outcome::Failed {
                expected: "matching error".to_string(),
                actual: format!("{:?} error: {}", err.kind(), err),
            },
            Ok(value) => Outcome::Failed {
                expected: "matching error".to_string(),
                actual: format!("Ok({:?})", value),
            },
        };
        self.push(name, outcome);
    }

    fn push(&mut self, name: &str, outcome: Outcome) {
        self.checks.push(Check {
            name: name.to_string(),
            outcome,
        });
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }
}

#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub module: &'static str,
    pub scenarios: Vec<Scenario>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.scenarios.iter().map(Scenario::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.scenarios.iter().map(Scenario::failed).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Formats the report, with ANSI styling only when `color` is set.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        let header = format!("Running suite {}", self.module);
        let _ = writeln!(out, "{}", paint(&header, color, |s| s.bold()));

        for scenario in &self.scenarios {
            let _ = writeln!(out, "\n  {}", paint(scenario.name, color, |s| s.bold()));
            for check in scenario.checks() {
                match &check.outcome {
                    Outcome::Passed => {
                        let _ = writeln!(
                            out,
                            "    {} {}",
                            paint("PASS", color, |s| s.green()),
                            check.name
                        );
                    }
                    Outcome::Failed { expected, actual } => {
                        let _ = writeln!(
                            out,
                            "    {} {}: expected {}, got {}",
                            paint("FAIL", color, |s| s.red()),
                            check.name,
                            expected,
                            actual
                        );
                    }
                }
            }
        }

        let summary = format!("\n{} passed, {} failed", self.passed(), self.failed());
        if self.is_success() {
            let _ = writeln!(out, "{}", paint(&summary, color, |s| s.green()));
        } else {
            let _ = writeln!(out, "{}", paint(&summary, color, |s| s.bold().red()));
        }
        out
    }
}

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn optional_scenario(dispatcher: &Dispatcher) -> Scenario {
    let mut scenario = Scenario::new("optional");

    let mut a = Some(10);
    scenario.check_eq("holding 10", 10, dispatcher.optional(a));

    a = None;
    scenario.check_eq(
        "empty yields default",
        dispatcher.config().default_value,
        dispatcher.optional(a),
    );

    scenario
}

pub fn erased_scenario(dispatcher: &Dispatcher) -> Scenario {
    let mut scenario = Scenario::new("any");
    let labels = &dispatcher.config().labels;

    let mut val = ErasedValue::from(10);
    scenario.check_eq(
        "holding int 10",
        Ok(format!("{}10", labels.int)),
        dispatcher.erased(&val),
    );

    val.set(String::from("hello"));
    scenario.check_eq(
        "holding text hello",
        Ok(format!("{}hello", labels.text)),
        dispatcher.erased(&val),
    );

    scenario.check_err(
        "holding float 5.5",
        dispatcher.erased(&ErasedValue::new(5.5f64)),
        DispatchError::is_invalid_argument,
    );

    scenario
}

pub fn variant_scenario(dispatcher: &Dispatcher) -> Scenario {
    let mut scenario = Scenario::new("variant");

    let mut var = Variant::from(42);
    scenario.check_eq("holding int 42", 42, dispatcher.variant(&var));

    var = "Boost".into();
    scenario.check_eq("holding text Boost", 5, dispatcher.variant(&var));

    scenario
}

/// Runs every scenario against `dispatcher`.
pub fn run(dispatcher: &Dispatcher) -> SuiteReport {
    let scenarios = vec![
        optional_scenario(dispatcher),
        erased_scenario(dispatcher),
        variant_scenario(dispatcher),
    ];

    for scenario in &scenarios {
        info!(
            scenario = scenario.name,
            passed = scenario.passed(),
            failed = scenario.failed(),
            "scenario finished"
        );
    }

    SuiteReport {
        module: SUITE_NAME,
        scenarios,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DispatchConfig, Labels};
    use crate::error::ErrorKind;

    #[test]
    fn default_run_passes_every_check() {
        let report = run(&Dispatcher::default());
        assert_eq!(report.module, SUITE_NAME);
        assert_eq!(report.scenarios.len(), 3);
        assert_eq!(report.passed(), 7);
        assert_eq!(report.failed(), 0);
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn configured_run_still_passes() {
        let dispatcher = Dispatcher::new(DispatchConfig {
            default_value: 5,
            labels: Labels {
                int: "i:".to_string(),
                text: "s:".to_string(),
            },
        });
        assert!(run(&dispatcher).is_success());
    }

    #[test]
    fn failed_check_records_both_sides() {
        let mut scenario = Scenario::new("demo");
        scenario.check_eq("mismatch", 1, 2);
        scenario.check_eq("match", "a", "a");

        assert_eq!(scenario.passed(), 1);
        assert_eq!(scenario.failed(), 1);
        assert_eq!(
            scenario.checks()[0].outcome,
            Outcome::Failed {
                expected: "1".to_string(),
                actual: "2".to_string(),
            }
        );
    }

    #[test]
    fn check_err_distinguishes_kinds() {
        let mut scenario = Scenario::new("errors");
        scenario.check_err::<i32, _>(
            "right kind",
            Err(DispatchError::UnsupportedType { type_name: "f64" }),
            DispatchError::is_invalid_argument,
        );
        scenario.check_err::<i32, _>(
            "wrong kind",
            Err(DispatchError::BadCast {
                expected: "i32",
                actual: "f64",
            }),
            DispatchError::is_invalid_argument,
        );
        scenario.check_err("no error", Ok(1), |_| true);
        scenario.check_err::<i32, _>(
            "custom predicate",
            Err(DispatchError::BadCast {
                expected: "i32",
                actual: "f64",
            }),
            |err| err.kind() == ErrorKind::BadCast,
        );

        let results: Vec<bool> = scenario.checks().iter().map(Check::passed).collect();
        assert_eq!(results, vec![true, false, false, true]);
    }

    #[test]
    fn failing_report_exit_code() {
        let mut scenario = Scenario::new("broken");
        scenario.check_eq("off by one", 1, 2);
        let report = SuiteReport {
            module: SUITE_NAME,
            scenarios: vec![scenario],
        };
        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);

        let rendered = report.render(false);
        assert!(rendered.contains("FAIL off by one: expected 1, got 2"));
        assert!(rendered.contains("0 passed, 1 failed"));
    }

    #[test]
    fn render_lists_scenarios() {
        let rendered = run(&Dispatcher::default()).render(false);
        assert!(rendered.contains("optional"));
        assert!(rendered.contains("any"));
        assert!(rendered.contains("variant"));
        assert!(rendered.contains("holding float 5.5"));
        assert!(rendered.contains("PASS holding float 5.5"));
        assert!(rendered.contains("7 passed, 0 failed"));
    }

    #[test]
    fn plain_render_has_no_escape_codes() {
        let rendered = run(&Dispatcher::default()).render(false);
        assert!(!rendered.contains('\x1b'));
        assert!(rendered.starts_with("Running suite ComplexDispatchTest\n"));
    }

    #[test]
    fn colored_render_styles_labels() {
        colored::control::set_override(true);
        let rendered = run(&Dispatcher::default()).render(true);
        assert!(rendered.contains(&"PASS".green().to_string()));
        assert!(rendered.contains('\x1b'));
    }
}
