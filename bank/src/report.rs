//! Error/warning aggregate shared by the validator's checks.
//!
//! Every check appends findings here; nothing else carries state between
//! checks, which keeps them independent and order-insensitive. Rendering
//! is deterministic: the same findings always produce byte-identical
//! output.

use std::fmt;

/// Horizontal rule used by the report and CLI banners.
pub const RULE: &str =
    "======================================================================";

/// Accumulated validation findings.
#[derive(Debug, Clone, Default)]
pub struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Overall validation verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No errors and no warnings.
    Clean,
    /// No errors; warnings should be reviewed but do not block usage.
    WarningsOnly,
    /// At least one error; the bank must be fixed before use.
    Failed,
}

impl Verdict {
    /// Process exit code for this verdict. Warnings never block.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Verdict::Clean | Verdict::WarningsOnly => 0,
            Verdict::Failed => 1,
        }
    }
}

impl Report {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blocking error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record a non-blocking warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Recorded errors in insertion order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Recorded warnings in insertion order.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The overall verdict: success iff the error list is empty.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match (self.errors.is_empty(), self.warnings.is_empty()) {
            (true, true) => Verdict::Clean,
            (true, false) => Verdict::WarningsOnly,
            (false, _) => Verdict::Failed,
        }
    }

    /// Render the full results block: numbered errors, numbered warnings,
    /// and the verdict line.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut lines = vec![
            String::new(),
            RULE.to_owned(),
            "VALIDATION RESULTS".to_owned(),
            RULE.to_owned(),
        ];

        if !self.errors.is_empty() {
            lines.push(String::new());
            lines.push(format!("❌ {} ERROR(S) FOUND:", self.errors.len()));
            lines.push(String::new());
            for (index, error) in self.errors.iter().enumerate() {
                lines.push(format!("{}. {error}", index + 1));
            }
        }

        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.push(format!("⚠️  {} WARNING(S):", self.warnings.len()));
            lines.push(String::new());
            for (index, warning) in self.warnings.iter().enumerate() {
                lines.push(format!("{}. {warning}", index + 1));
            }
        }

        lines.push(String::new());
        lines.push(match self.verdict() {
            Verdict::Clean => "✅ All checks passed! Question bank is valid.".to_owned(),
            Verdict::WarningsOnly => {
                "✅ No errors found. Warnings should be reviewed but don't block usage."
                    .to_owned()
            }
            Verdict::Failed => "❌ Validation failed. Fix errors before generating form.".to_owned(),
        });
        lines.push(String::new());
        lines.push(RULE.to_owned());

        lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}
