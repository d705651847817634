//! Category bucketing — decides whether a free-text category label is technical,
//! behavioral, or neither, and spots behavioral questions by their wording.

const TECHNICAL_CATEGORY_KEYWORDS: &[&str] = &["machine learning", "data science", "deep learning"];

const BEHAVIORAL_CATEGORY_KEYWORDS: &[&str] = &["behavior", "behavioral"];

/// Phrases that mark a question as behavioral regardless of its category.
const BEHAVIORAL_PHRASES: &[&str] = &[
    "tell me about yourself",
    "why should we hire you",
    "strengths",
    "weaknesses",
    "teamwork",
    "experience",
    "challenge",
    "leadership",
    "conflict",
    "accomplishment",
    "failure",
    "motivation",
    "career goals",
    "work with others",
    "problem solving",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Technical,
    Behavioral,
    Unclassified,
}

/// Technical wins when a label matches both keyword sets.
pub fn classify_category(category: &str) -> CategoryKind {
    let category_lower = category.to_lowercase();

    if TECHNICAL_CATEGORY_KEYWORDS
        .iter()
        .any(|k| category_lower.contains(k))
    {
        CategoryKind::Technical
    } else if BEHAVIORAL_CATEGORY_KEYWORDS
        .iter()
        .any(|k| category_lower.contains(k))
    {
        CategoryKind::Behavioral
    } else {
        CategoryKind::Unclassified
    }
}

pub fn is_behavioral_question(question: &str) -> bool {
    let question_lower = question.to_lowercase();
    BEHAVIORAL_PHRASES.iter().any(|p| question_lower.contains(p))
}
