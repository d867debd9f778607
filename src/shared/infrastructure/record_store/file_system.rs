// File system implementation of the RecordStore port.
//
// Layout
// - One JSON document per partition at <root>/<server>/<channel>.json.
// - Path segments are escaped, so any server or channel name maps to a single file name.
//
// Responsibilities
// - Treat a missing file as an empty partition.
// - Replace the whole document atomically: write and sync a temporary sibling, then rename over
//   the target.

use crate::shared::core::primitives::PartitionKey;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

pub struct FileSystemRecordStore {
    root: PathBuf,
}

impl FileSystemRecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, partition: &PartitionKey) -> PathBuf {
        self.root
            .join(escape_segment(&partition.server))
            .join(format!("{}.json", escape_segment(&partition.channel)))
    }
}

/// Keeps ASCII alphanumerics, `-` and `_`; everything else becomes `%XX`.
fn escape_segment(segment: &str) -> String {
    if segment.is_empty() {
        return "%".to_string();
    }
    let mut escaped = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            escaped.push(byte as char);
        } else {
            escaped.push_str(&format!("%{byte:02X}"));
        }
    }
    escaped
}

fn backend(context: &str, path: &Path, err: std::io::Error) -> RecordStoreError {
    RecordStoreError::Backend(format!("{context} {}: {err}", path.display()))
}

/// Writes and flushes `bytes` to disk before returning, so a later rename never exposes a
/// truncated document.
async fn write_durably(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

#[async_trait::async_trait]
impl<Record> RecordStore<Record> for FileSystemRecordStore
where
    Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(&self, partition: &PartitionKey) -> Result<Vec<Record>, RecordStoreError> {
        let path = self.path_for(partition);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(backend("cannot read", &path, err)),
        };
        serde_json::from_slice(&bytes).map_err(|err| RecordStoreError::Corrupt {
            partition: partition.to_string(),
            reason: err.to_string(),
        })
    }

    async fn save(
        &self,
        partition: &PartitionKey,
        records: &[Record],
    ) -> Result<(), RecordStoreError> {
        let path = self.path_for(partition);
        let directory = path
            .parent()
            .ok_or_else(|| RecordStoreError::Backend(format!("no parent for {}", path.display())))?;
        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|err| backend("cannot create", directory, err))?;

        let document = serde_json::to_vec_pretty(records)
            .map_err(|err| RecordStoreError::Backend(err.to_string()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temporary = directory.join(format!(".{file_name}.{}.tmp", Uuid::now_v7()));

        if let Err(err) = write_durably(&temporary, &document).await {
            let _ = tokio::fs::remove_file(&temporary).await;
            return Err(backend("cannot write", &temporary, err));
        }
        if let Err(err) = tokio::fs::rename(&temporary, &path).await {
            let _ = tokio::fs::remove_file(&temporary).await;
            return Err(backend("cannot replace", &path, err));
        }
        tracing::debug!(partition = %partition, bytes = document.len(), "partition saved");
        Ok(())
    }
}
