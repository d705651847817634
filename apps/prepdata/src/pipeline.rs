use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use crate::jobs::load_job_descriptions;
use crate::models::document::OutputDocument;
use crate::output::write_output;
use crate::questions::load_question_bank;

/// Inputs for one preprocessing run.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub question_bank_path: PathBuf,
    pub job_descriptions_path: PathBuf,
    pub output_path: PathBuf,
    pub category_column: String,
}

/// Loads both inputs, then writes the combined document.
/// Nothing is written unless both loaders succeed.
pub fn run(params: &RunParams) -> Result<OutputDocument> {
    let questions = load_question_bank(&params.question_bank_path, &params.category_column);
    let jobs = load_job_descriptions(&params.job_descriptions_path);

    let (questions, jobs) = match (questions, jobs) {
        (Some(questions), Some(jobs)) => (questions, jobs),
        _ => {
            error!("Failed to load data. Exiting.");
            bail!("failed to load input data; no output written");
        }
    };

    info!(
        technical = questions.technical_count(),
        behavioral = questions.behavioral.len(),
        jobs = jobs.len(),
        "Input data loaded"
    );

    let document = OutputDocument { questions, jobs };
    write_output(&params.output_path, &document).with_context(|| {
        format!(
            "Failed to write output to {}",
            params.output_path.display()
        )
    })?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn params(dir: &Path, questions_csv: &str, jobs_csv: &str) -> RunParams {
        let question_bank_path = dir.join("questions.csv");
        let job_descriptions_path = dir.join("jobs.csv");
        std::fs::write(&question_bank_path, questions_csv).unwrap();
        std::fs::write(&job_descriptions_path, jobs_csv).unwrap();
        RunParams {
            question_bank_path,
            job_descriptions_path,
            output_path: dir.join("prep.json"),
            category_column: "category".to_string(),
        }
    }

    const ONE_QUESTION: &str = "id,question,difficulty,category\n1,Tell me about yourself,easy,Intro\n";
    const ONE_JOB: &str = "job_title,company_name,seniority_level,job_description_text,company_description\n\
        Data Scientist,Acme,Mid,\"Machine learning with AWS and aws tooling\",\"Sports analytics\"\n";

    #[test]
    fn test_minimal_inputs_produce_document() {
        let dir = tempfile::tempdir().unwrap();
        let p = params(dir.path(), ONE_QUESTION, ONE_JOB);

        run(&p).unwrap();

        let text = std::fs::read_to_string(&p.output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["questions"]["behavioral"].as_array().unwrap().len(), 1);
        assert_eq!(value["questions"]["behavioral"][0]["id"], 1);
        assert_eq!(value["jobs"].as_array().unwrap().len(), 1);
        assert_eq!(
            value["jobs"][0]["keywords"],
            serde_json::json!(["aws", "machine learning"])
        );
    }

    #[test]
    fn test_question_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let p = params(dir.path(), "id,question\n1,Hi\n", ONE_JOB);

        assert!(run(&p).is_err());
        assert!(!p.output_path.exists());
    }

    #[test]
    fn test_job_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let p = params(dir.path(), ONE_QUESTION, "job_title\nX\n");

        assert!(run(&p).is_err());
        assert!(!p.output_path.exists());
    }

    #[test]
    fn test_custom_category_column_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = params(
            dir.path(),
            "id,question,difficulty,topic\n1,What is a CNN?,hard,Deep Learning\n",
            ONE_JOB,
        );
        p.category_column = "topic".to_string();

        let document = run(&p).unwrap();
        assert_eq!(document.questions.technical["deep learning"].len(), 1);
        assert!(document.questions.behavioral.is_empty());
    }
}
