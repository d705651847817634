use std::collections::BTreeMap;

use serde::Serialize;

use crate::csv_table::Scalar;

/// One interview question as loaded from the bank. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRecord {
    pub id: Scalar,
    pub question: String,
    pub difficulty: Scalar,
    /// Source category label; the bucket key already carries it in output.
    #[serde(skip_serializing)]
    pub category: String,
}

/// Questions bucketed for the prep artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuestionBank {
    /// Lowercased category name → questions, in source row order.
    pub technical: BTreeMap<String, Vec<QuestionRecord>>,
    pub behavioral: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn technical_count(&self) -> usize {
        self.technical.values().map(Vec::len).sum()
    }
}
