use std::collections::BTreeSet;

use serde::Serialize;

/// A job posting reduced to its identity fields plus extracted keyword tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub seniority_level: Option<String>,
    /// Serialized as a sorted array.
    pub keywords: BTreeSet<String>,
}
