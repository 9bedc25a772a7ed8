//! Knowledge-base loader
//!
//! Parses the welfare dataset JSON into the typed [`KnowledgeBase`] model.
//! Collections missing from the file deserialize as empty.

use std::path::Path;

use sahayak_core::KnowledgeBase;

use crate::KnowledgeError;

/// Load the knowledge base from a JSON file.
pub fn load_knowledge_base<P: AsRef<Path>>(path: P) -> Result<KnowledgeBase, KnowledgeError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| KnowledgeError::NotFound {
        path: path.display().to_string(),
        source,
    })?;

    let kb: KnowledgeBase = serde_json::from_str(&content)?;

    tracing::info!(
        path = %path.display(),
        schemes = kb.schemes.len(),
        wards = kb.wards.len(),
        citizens = kb.citizens.len(),
        "Loaded knowledge base"
    );

    Ok(kb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"schemes": [{{"scheme_id": "PEN001", "name": "Pension"}}], "meta": {{"city": "Thane"}}}}"#
        )
        .unwrap();

        let kb = load_knowledge_base(file.path()).unwrap();
        assert_eq!(kb.schemes.len(), 1);
        assert_eq!(kb.meta["city"], "Thane");
        assert!(kb.wards.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_knowledge_base("/nonexistent/dataset.json").unwrap_err();
        assert!(matches!(err, KnowledgeError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_knowledge_base(file.path()).unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse(_)));
    }
}
