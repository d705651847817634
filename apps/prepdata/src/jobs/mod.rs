// Job descriptions: CSV loading and keyword tagging.

pub mod keywords;
pub mod loader;

pub use loader::load_job_descriptions;
