use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::Profile;

/// Errors raised while reading a profile file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_profile_from_json<P: AsRef<Path>>(path: P) -> Result<Profile, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let profile: Profile =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), student_id = %profile.student_id, "loaded profile");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_profile(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_profile() {
        let file = write_profile(
            r#"{"display_name": "TRAN THI B", "student_id": "CN23A",
                "question_text": "Bạn thích gì?"}"#,
        );
        let profile = load_profile_from_json(file.path()).unwrap();
        assert_eq!(profile, Profile::new("TRAN THI B", "CN23A", "Bạn thích gì?"));
    }

    #[test]
    fn test_load_profile_allows_empty_fields() {
        let file =
            write_profile(r#"{"display_name": "", "student_id": "", "question_text": ""}"#);
        let profile = load_profile_from_json(file.path()).unwrap();
        assert!(profile.display_name.is_empty());
        assert!(profile.question_text.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile_from_json(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_profile(r#"{"display_name": "A", "student_id": "B"}"#);
        let err = load_profile_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_profile(
            r#"{"display_name": "A", "student_id": "B", "question_text": "C", "age": 3}"#,
        );
        assert!(matches!(
            load_profile_from_json(file.path()),
            Err(LoadError::Parse { .. })
        ));
    }
}
