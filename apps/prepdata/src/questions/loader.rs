use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, error, info};

use crate::csv_table::CsvTable;
use crate::errors::PrepError;
use crate::models::question::{QuestionBank, QuestionRecord};
use crate::questions::classify::{classify_category, is_behavioral_question, CategoryKind};

/// Loads the question bank CSV and buckets it.
///
/// Any failure (unreadable file, malformed CSV, missing column) is logged here
/// and reported as `None`; callers only need to know whether to proceed.
pub fn load_question_bank(path: &Path, category_column: &str) -> Option<QuestionBank> {
    match CsvTable::read(path).and_then(|table| build_question_bank(&table, category_column)) {
        Ok(bank) => Some(bank),
        Err(e) => {
            error!("Error loading question bank from {}: {e}", path.display());
            None
        }
    }
}

/// Drops incomplete rows, deduplicates on exact question text, then buckets by
/// category with a phrase-based behavioral fallback.
pub fn build_question_bank(
    table: &CsvTable,
    category_column: &str,
) -> Result<QuestionBank, PrepError> {
    table.require(&["id", "question", "difficulty", category_column])?;

    let ids = table.infer_column("id");
    let difficulties = table.infer_column("difficulty");

    let complete: Vec<QuestionRecord> = (0..table.row_count())
        .filter_map(|row| {
            Some(QuestionRecord {
                id: ids[row].clone()?,
                question: table.cell(row, "question")?.to_string(),
                difficulty: difficulties[row].clone()?,
                category: table.cell(row, category_column)?.to_string(),
            })
        })
        .collect();

    let mut seen_questions = HashSet::new();
    let records: Vec<QuestionRecord> = complete
        .iter()
        .filter(|r| seen_questions.insert(r.question.as_str()))
        .cloned()
        .collect();

    info!("Total questions in dataset: {}", complete.len());
    info!("Unique questions in dataset: {}", records.len());

    let mut categories: Vec<String> = Vec::new();
    for record in &records {
        let category_lower = record.category.to_lowercase();
        if !categories.contains(&category_lower) {
            categories.push(category_lower);
        }
    }
    info!("Unique categories in question bank: {:?}", categories);

    let mut bank = QuestionBank::default();

    for category in &categories {
        let members = records
            .iter()
            .filter(|r| r.category.to_lowercase() == *category)
            .cloned();

        match classify_category(category) {
            CategoryKind::Technical => {
                bank.technical.insert(category.clone(), members.collect());
            }
            CategoryKind::Behavioral => bank.behavioral.extend(members),
            CategoryKind::Unclassified => {
                debug!("Dropping category '{category}': neither technical nor behavioral");
            }
        }
    }

    let mut seen_behavioral: HashSet<String> = bank
        .behavioral
        .iter()
        .map(|r| r.question.to_lowercase())
        .collect();

    for record in records.iter().filter(|r| is_behavioral_question(&r.question)) {
        if seen_behavioral.insert(record.question.to_lowercase()) {
            bank.behavioral.push(record.clone());
        }
    }

    for (category, questions) in &bank.technical {
        info!("{category} questions: {}", questions.len());
    }
    info!("Behavioral questions: {}", bank.behavioral.len());

    Ok(bank)
}
