use std::path::Path;

use tracing::{error, info};

use crate::csv_table::CsvTable;
use crate::errors::PrepError;
use crate::jobs::keywords::extract_keywords;
use crate::models::job::JobRecord;

const JOB_COLUMNS: &[&str] = &[
    "job_title",
    "company_name",
    "seniority_level",
    "job_description_text",
    "company_description",
];

/// Loads job postings and tags each with keywords from its description text.
/// Failures are logged and reported as `None`.
pub fn load_job_descriptions(path: &Path) -> Option<Vec<JobRecord>> {
    match CsvTable::read(path).and_then(|table| build_job_records(&table)) {
        Ok(jobs) => Some(jobs),
        Err(e) => {
            error!("Error loading job descriptions from {}: {e}", path.display());
            None
        }
    }
}

pub fn build_job_records(table: &CsvTable) -> Result<Vec<JobRecord>, PrepError> {
    table.require(JOB_COLUMNS)?;

    let jobs: Vec<JobRecord> = (0..table.row_count())
        .map(|row| {
            let description = table.cell(row, "job_description_text").unwrap_or_default();
            let company = table.cell(row, "company_description").unwrap_or_default();
            let combined = format!("{description} {company}");

            JobRecord {
                job_title: table.cell(row, "job_title").map(str::to_string),
                company_name: table.cell(row, "company_name").map(str::to_string),
                seniority_level: table.cell(row, "seniority_level").map(str::to_string),
                keywords: extract_keywords(&combined),
            }
        })
        .collect();

    info!("Job descriptions loaded: {}", jobs.len());
    Ok(jobs)
}
