// Question bank: CSV loading, deduplication, and technical/behavioral bucketing.

pub mod classify;
pub mod loader;

pub use loader::load_question_bank;
