use std::sync::Arc;

use crate::config::StoreBackend;
use crate::modules::ideas::application::lifecycle::IdeaLifecycle;
use crate::modules::ideas::core::idea::Idea;
use crate::modules::reference_data::core::directory::ReferenceData;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shared::infrastructure::record_store::json_file::JsonFileRecordStore;
use crate::shared::infrastructure::record_store::{RECORDS_KEY, RecordStore};

#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<IdeaLifecycle>,
    pub reference: Arc<ReferenceData>,
    pub passcode: Option<Arc<str>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore<Idea>>,
        reference: ReferenceData,
        passcode: Option<String>,
    ) -> Self {
        Self {
            lifecycle: Arc::new(IdeaLifecycle::new(store)),
            reference: Arc::new(reference),
            passcode: passcode.map(Arc::from),
        }
    }
}

pub fn build_record_store(backend: &StoreBackend) -> Arc<dyn RecordStore<Idea>> {
    match backend {
        StoreBackend::Memory => Arc::new(InMemoryRecordStore::<Idea>::new()),
        StoreBackend::File { dir } => Arc::new(JsonFileRecordStore::<Idea>::new(dir, RECORDS_KEY)),
    }
}
