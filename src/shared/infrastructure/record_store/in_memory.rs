// In memory implementation of the RecordStore port.
//
// Purpose
// - Default backend for local development, and the backend every handler test runs against.
//
// Responsibilities
// - Hold the record array behind a lock and replace it wholesale on write.
// - Simulate an unavailable backend (`toggle_offline`), a backend that reads but refuses
//   writes (`set_fail_writes`), and a slow write (`set_delay_write_ms`).

use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<Record: Clone + Send + Sync + 'static> {
    inner: RwLock<Vec<Record>>,
    writes: AtomicU64,
    delay_write_ms: AtomicU64,
    fail_writes: AtomicBool,
    is_offline: bool,
}

impl<Record: Clone + Send + Sync + 'static> Default for InMemoryRecordStore<Record> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Record: Clone + Send + Sync + 'static> InMemoryRecordStore<Record> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<Record>) -> Self {
        Self {
            inner: RwLock::new(records),
            writes: AtomicU64::new(0),
            delay_write_ms: AtomicU64::new(0),
            fail_writes: AtomicBool::new(false),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of successful `write_all` calls so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn records(&self) -> Vec<Record> {
        self.inner.read().await.clone()
    }
}

#[async_trait::async_trait]
impl<Record> RecordStore<Record> for InMemoryRecordStore<Record>
where
    Record: Clone + Send + Sync + 'static,
{
    async fn read_all(&self) -> Result<Vec<Record>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Record store offline".into()));
        }
        Ok(self.inner.read().await.clone())
    }

    async fn write_all(&self, records: &[Record]) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Record store offline".into()));
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("Record store rejected the write".into()));
        }
        let snapshot = records.to_vec();
        let delay = self.delay_write_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        *self.inner.write().await = snapshot;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_record_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_read_an_empty_set_when_nothing_was_written() {
        let store = InMemoryRecordStore::<String>::new();
        let records = store.read_all().await.expect("read failed");
        assert!(records.is_empty());
        assert_eq!(store.write_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_the_whole_set_on_write() {
        let store = InMemoryRecordStore::seeded(vec!["a".to_string(), "b".to_string()]);
        store
            .write_all(&["c".to_string()])
            .await
            .expect("write failed");
        assert_eq!(store.read_all().await.unwrap(), vec!["c".to_string()]);
        assert_eq!(store.write_count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_read_and_write_when_offline() {
        let mut store = InMemoryRecordStore::seeded(vec!["a".to_string()]);
        store.toggle_offline();
        let read = store.read_all().await;
        let write = store.write_all(&[]).await;
        assert!(matches!(read, Err(StoreError::Backend(msg)) if msg == "Record store offline"));
        assert!(write.is_err());
        store.toggle_offline();
        assert_eq!(store.records().await, vec!["a".to_string()]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_serving_reads_when_writes_fail() {
        let store = InMemoryRecordStore::seeded(vec!["a".to_string()]);
        store.set_fail_writes(true);
        assert!(matches!(store.write_all(&[]).await, Err(StoreError::Backend(_))));
        assert_eq!(store.read_all().await.unwrap(), vec!["a".to_string()]);
        assert_eq!(store.write_count(), 0);
    }
}
