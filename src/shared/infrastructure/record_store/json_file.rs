// File backed implementation of the RecordStore port.
//
// One JSON document per key inside a data directory. A missing file or a `null`
// document reads as an empty set. Each write lands in its own sibling temp file and is
// renamed over the target.

use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct JsonFileRecordStore<Record> {
    path: PathBuf,
    _record: PhantomData<fn() -> Record>,
}

impl<Record> JsonFileRecordStore<Record> {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl<Record> RecordStore<Record> for JsonFileRecordStore<Record>
where
    Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static,
{
    async fn read_all(&self) -> Result<Vec<Record>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let records: Option<Vec<Record>> = serde_json::from_slice(&bytes)?;
        Ok(records.unwrap_or_default())
    }

    async fn write_all(&self, records: &[Record]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec(records)?;
        let tmp = self.path.with_extension(format!("json.{}.tmp", Uuid::now_v7()));
        let written = match tokio::fs::write(&tmp, body).await {
            Ok(()) => tokio::fs::rename(&tmp, &self.path).await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err.into());
        }
        Ok(())
    }
}
