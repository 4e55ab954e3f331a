// JSON persistence of the issue collection.
//
// The on-disk format is an array of boundary documents, so files
// written by other clients of the same schema load without loss:
// unknown enum values and missing fields map onto the documented
// defaults during conversion.

use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};

use ocdb_boundary::IssueDoc;
use ocdb_core::entities::issue::Issue;

use crate::MemoryStore;

impl MemoryStore {
    /// Load a collection dump. A missing file yields an empty store.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No collection dump at {} => empty store", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read collection dump {}", path.display()));
            }
        };
        let docs: Vec<IssueDoc> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse collection dump {}", path.display()))?;
        let store = Self::default();
        {
            let mut issues = store.inner.issues.write();
            for doc in docs {
                let issue = Issue::from(doc);
                issues.insert(issue.id.to_string(), issue);
            }
        }
        log::debug!(
            "Loaded {} issue(s) from {}",
            store.inner.issues.read().len(),
            path.display()
        );
        Ok(store)
    }

    /// Dump the full collection.
    pub fn dump_to_file(&self, path: &Path) -> Result<()> {
        let docs: Vec<IssueDoc> = self.snapshot().into_iter().map(Into::into).collect();
        let json = serde_json::to_string_pretty(&docs)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write collection dump {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocdb_core::{
        entities::{category::Category, status::IssueStatus},
        repositories::{IssueRepo, IssueUpdate, NewIssueRecord},
    };

    #[test]
    fn round_trip_through_dump_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.json");

        let store = MemoryStore::new();
        let id = store
            .create_issue(NewIssueRecord {
                category: Category::WaterLeakage,
                description: "Burst pipe".into(),
                position: Default::default(),
                image_url: "".into(),
                status: IssueStatus::default(),
                reported_by: "u1".into(),
            })
            .unwrap();
        store
            .update_issue(id.as_str(), IssueUpdate::CastVote { voter: "u2".into() })
            .unwrap();
        store.dump_to_file(&path).unwrap();

        let restored = MemoryStore::load_from_file(&path).unwrap();
        assert_eq!(store.all_issues().unwrap(), restored.all_issues().unwrap());
    }

    #[test]
    fn missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::load_from_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(0, store.count_issues().unwrap());
    }

    #[test]
    fn partial_documents_load_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.json");
        fs::write(
            &path,
            r#"[ { "id": "legacy1", "lat": 1.0, "lng": 2.0, "status": "wontfix" } ]"#,
        )
        .unwrap();
        let store = MemoryStore::load_from_file(&path).unwrap();
        let issue = store.get_issue("legacy1").unwrap();
        assert_eq!(IssueStatus::Reported, issue.status);
        assert_eq!(Category::Other, issue.category);
        assert_eq!(0, issue.votes);
    }
}
