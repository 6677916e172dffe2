//! Error Types

/// Result alias for snapshot handling.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a snapshot.
///
/// The access engine itself never fails; these only surface at the edge
/// where snapshots are read from disk and parsed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.to_string().contains("Failed to read snapshot"));
        assert!(io.to_string().contains("gone"));
    }

    #[test]
    fn test_json_error_converts() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("Malformed snapshot JSON"));
    }
}
