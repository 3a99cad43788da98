//! Per-record outcomes aggregated into a run report

use serde::Serialize;

use crate::cli::Stage;

/// What happened to a single input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Resource created or permission granted
    Created,
    /// Resource already present; nothing was changed
    Exists,
    /// Dry run: the record would have been acted on
    Planned,
    /// Record not acted on (invalid row or missing dependency)
    Skipped { reason: String },
    /// The create or grant request failed
    Failed { error: String },
}

impl Outcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Outcome::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Outcome::Failed {
            error: error.to_string(),
        }
    }

    /// Short lowercase label used in tables and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Created => "created",
            Outcome::Exists => "exists",
            Outcome::Planned => "planned",
            Outcome::Skipped { .. } => "skipped",
            Outcome::Failed { .. } => "failed",
        }
    }

    /// Reason or error text, empty for the other outcomes
    pub fn detail(&self) -> &str {
        match self {
            Outcome::Skipped { reason } => reason,
            Outcome::Failed { error } => error,
            _ => "",
        }
    }
}

/// Outcome of one record, labelled with what the record refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordResult {
    pub subject: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Counts of each outcome within a stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub created: usize,
    pub exists: usize,
    pub planned: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    fn add(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Exists => self.exists += 1,
            Outcome::Planned => self.planned += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} created, {} existing, {} planned, {} skipped, {} failed",
            self.created, self.exists, self.planned, self.skipped, self.failed
        )
    }
}

/// Results of one stage, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    pub results: Vec<RecordResult>,
}

impl StageReport {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, subject: impl Into<String>, outcome: Outcome) {
        self.results.push(RecordResult {
            subject: subject.into(),
            outcome,
        });
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for result in &self.results {
            summary.add(&result.outcome);
        }
        summary
    }
}

/// Results of a whole invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub organization: String,
    pub dry_run: bool,
    pub stages: Vec<StageReport>,
}

impl RunReport {
    pub fn new(organization: &str, dry_run: bool) -> Self {
        Self {
            organization: organization.to_string(),
            dry_run,
            stages: Vec::new(),
        }
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    pub fn has_failures(&self) -> bool {
        self.stages.iter().any(|s| s.summary().failed > 0)
    }
}
