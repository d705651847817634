//! Keyword tagging for job postings against a fixed skills vocabulary.
//!
//! Vocabulary terms are matched as case-insensitive substrings, so
//! "communications" tags `communication` and "Pythonic" tags `python`. Tool
//! names are also matched against whole tokens. "r" is only ever matched as a
//! whole token.

use std::collections::BTreeSet;

const SUBSTRING_KEYWORDS: &[&str] = &[
    "machine learning",
    "data science",
    "python",
    "pytorch",
    "tensorflow",
    "sql",
    "pandas",
    "spark",
    "cloud",
    "aws",
    "gcp",
    "azure",
    "databricks",
    "communication",
    "collaboration",
    "sports technology",
    "generative ai",
    "deep learning",
    "data pipelines",
    "feature engineering",
    "model deployment",
    "kubernetes",
    "docker",
    "statistics",
    "natural language processing",
    "computer vision",
];

const TOKEN_KEYWORDS: &[&str] = &[
    "python",
    "sql",
    "pandas",
    "spark",
    "aws",
    "gcp",
    "azure",
    "databricks",
    "pytorch",
    "tensorflow",
    "r",
    "kubernetes",
    "docker",
];

/// Returns the lowercased vocabulary terms present in `text`.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();

    let mut keywords: BTreeSet<String> = SUBSTRING_KEYWORDS
        .iter()
        .filter(|k| text_lower.contains(*k))
        .map(|k| k.to_string())
        .collect();

    keywords.extend(
        tokenize(&text_lower)
            .filter(|token| TOKEN_KEYWORDS.contains(token))
            .map(str::to_string),
    );

    keywords
}

/// Word tokens: maximal runs of alphanumerics or underscore.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}
