use serde::Serialize;

use crate::models::job::JobRecord;
use crate::models::question::QuestionBank;

/// The single JSON artifact written at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputDocument {
    pub questions: QuestionBank,
    pub jobs: Vec<JobRecord>,
}
