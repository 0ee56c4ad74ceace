// Application state over an in-memory store, shared by the HTTP and GraphQL adapter tests.

use std::sync::Arc;

use crate::modules::ideas::core::idea::Idea;
use crate::modules::reference_data::core::directory::ReferenceData;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;

pub const TEST_PASSCODE: &str = "letmein";

pub fn make_test_state(ideas: Vec<Idea>) -> (Arc<InMemoryRecordStore<Idea>>, AppState) {
    state_over(InMemoryRecordStore::seeded(ideas))
}

pub fn make_offline_state() -> (Arc<InMemoryRecordStore<Idea>>, AppState) {
    let mut store = InMemoryRecordStore::new();
    store.toggle_offline();
    state_over(store)
}

fn state_over(store: InMemoryRecordStore<Idea>) -> (Arc<InMemoryRecordStore<Idea>>, AppState) {
    let store = Arc::new(store);
    let state = AppState::new(
        store.clone(),
        ReferenceData::default(),
        Some(TEST_PASSCODE.to_string()),
    );
    (store, state)
}
