use thiserror::Error;

/// Error type for the preprocessing pipeline.
/// Loaders log and swallow it at their boundary; the writer propagates it to `main`.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Malformed CSV row at line {line}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not move output into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_lists_every_column() {
        let err = PrepError::MissingColumns(vec!["id".to_string(), "difficulty".to_string()]);
        assert_eq!(err.to_string(), "Missing required column(s): id, difficulty");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PrepError = io.into();
        assert!(matches!(err, PrepError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
