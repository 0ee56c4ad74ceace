// Port for the blob that holds every record under a single key.
//
// Purpose
// - Describe the only two capabilities the lifecycle needs: read the whole set, replace the whole set.
//
// Boundaries
// - No partial updates, no versioning. Concurrent writers overwrite each other (last writer wins).

pub mod in_memory;
pub mod json_file;

use async_trait::async_trait;
use thiserror::Error;

/// Key under which the full record array is stored.
pub const RECORDS_KEY: &str = "all-ideas";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait RecordStore<Record: Clone + Send + Sync + 'static>: Send + Sync {
    /// Returns the full record set, or an empty one when nothing has been stored yet.
    async fn read_all(&self) -> Result<Vec<Record>, StoreError>;

    /// Replaces the full record set.
    async fn write_all(&self, records: &[Record]) -> Result<(), StoreError>;
}
