//! Error types for key persistence

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeyStoreError>;

/// The only two failure modes of the key store. Both are non-fatal: the
/// controller surfaces them in the UI and recovers on the next edit.
#[derive(Error, Debug)]
pub enum KeyStoreError {
    #[error("Failed to open file '{}'", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to file '{}'", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KeyStoreError {
    /// The two human-readable lines shown in the UI: what failed, then the
    /// underlying OS error.
    pub fn display_lines(&self) -> Vec<String> {
        let source = match self {
            Self::FileOpen { source, .. } => source,
            Self::FileWrite { source, .. } => source,
        };
        vec![self.to_string(), format!("Error: {}", source)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_lines_name_path_and_os_error() {
        let err = KeyStoreError::FileOpen {
            path: PathBuf::from("/data/params/d/SecOCKey"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };

        let lines = err.display_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("/data/params/d/SecOCKey"));
        assert!(lines[0].starts_with("Failed to open"));
        assert!(lines[1].starts_with("Error: "));
        assert!(lines[1].len() > "Error: ".len());
    }

    #[test]
    fn test_write_error_names_operation() {
        let err = KeyStoreError::FileWrite {
            path: PathBuf::from("/tmp/key"),
            source: io::Error::from(io::ErrorKind::WriteZero),
        };
        assert!(err.to_string().starts_with("Failed to write to"));
    }
}
