// Lifecycle service orchestrating every write against the record store.
//
// Responsibilities
// - Read the full record set, locate the target, run the pure decider, write the full set back.
// - Write exactly once on success and never on failure.
// - Queries degrade to an empty set when the store cannot be read; transitions surface the failure.
//
// Boundaries
// - No locking or versioning: two transitions racing on the same blob lose the earlier write.

use crate::modules::ideas::core::decision::DecideError;
use crate::modules::ideas::core::idea::{Collection, Idea};
use crate::modules::ideas::use_cases::approve_idea::command::ApproveIdea;
use crate::modules::ideas::use_cases::approve_idea::decide::decide_approve;
use crate::modules::ideas::use_cases::patch_idea::command::PatchIdea;
use crate::modules::ideas::use_cases::patch_idea::decide::decide_patch;
use crate::modules::ideas::use_cases::reject_idea::command::RejectIdea;
use crate::modules::ideas::use_cases::reject_idea::decide::decide_reject;
use crate::modules::ideas::use_cases::revert_idea::command::RevertIdea;
use crate::modules::ideas::use_cases::revert_idea::decide::decide_revert;
use crate::modules::ideas::use_cases::submit_idea::command::SubmitIdea;
use crate::modules::ideas::use_cases::submit_idea::decide::decide_submit;
use crate::modules::ideas::use_cases::update_status::command::UpdateStatus;
use crate::modules::ideas::use_cases::update_status::decide::decide_update_status;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdeaError {
    #[error("idea not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("record store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub changed: usize,
    pub total: usize,
}

pub struct IdeaLifecycle {
    store: Arc<dyn RecordStore<Idea>>,
}

impl IdeaLifecycle {
    pub fn new(store: Arc<dyn RecordStore<Idea>>) -> Self {
        Self { store }
    }

    /// Full record set for read-only views. A failed read is logged and treated as empty.
    pub async fn snapshot(&self) -> Vec<Idea> {
        match self.store.read_all().await {
            Ok(ideas) => ideas,
            Err(err) => {
                tracing::warn!(error = %err, "record store unreadable, serving an empty set");
                Vec::new()
            }
        }
    }

    pub async fn list(&self, collection: Option<Collection>) -> Vec<Idea> {
        let ideas = self.snapshot().await;
        match collection {
            Some(collection) => ideas
                .into_iter()
                .filter(|idea| idea.collection == collection)
                .collect(),
            None => ideas,
        }
    }

    pub async fn fetch(&self, id: &str) -> Result<Idea, IdeaError> {
        self.snapshot()
            .await
            .into_iter()
            .find(|idea| idea.id == id)
            .ok_or_else(|| IdeaError::NotFound(id.to_string()))
    }

    pub async fn submit(&self, command: SubmitIdea) -> Result<Idea, IdeaError> {
        let mut ideas = self.store.read_all().await?;
        let idea = decide_submit(command)?;
        ideas.push(idea.clone());
        self.persist(&ideas).await?;
        tracing::info!(id = %idea.id, idea_id = %idea.idea_id, "idea submitted");
        Ok(idea)
    }

    pub async fn approve(&self, id: &str, command: ApproveIdea) -> Result<Idea, IdeaError> {
        self.transition("approve", id, |idea| decide_approve(idea, command))
            .await
    }

    pub async fn reject(&self, id: &str, command: RejectIdea) -> Result<Idea, IdeaError> {
        self.transition("reject", id, |idea| decide_reject(idea, command))
            .await
    }

    pub async fn revert(&self, id: &str, command: RevertIdea) -> Result<Idea, IdeaError> {
        self.transition("revert", id, |idea| decide_revert(idea, command))
            .await
    }

    pub async fn update_status(&self, id: &str, command: UpdateStatus) -> Result<Idea, IdeaError> {
        self.transition("update_status", id, |idea| {
            decide_update_status(idea, command)
        })
        .await
    }

    pub async fn patch(&self, id: &str, command: PatchIdea) -> Result<Idea, IdeaError> {
        self.transition("patch", id, |idea| Ok(decide_patch(idea, command)))
            .await
    }

    /// Removes the record. `Ok(false)` when no record carries the id; nothing is written then.
    pub async fn delete(&self, id: &str) -> Result<bool, IdeaError> {
        let mut ideas = self.store.read_all().await?;
        let Some(index) = ideas.iter().position(|idea| idea.id == id) else {
            return Ok(false);
        };
        ideas.remove(index);
        self.persist(&ideas).await?;
        tracing::info!(id = %id, "idea deleted");
        Ok(true)
    }

    /// Applies `edit` to every record in one read-modify-write. `edit` reports whether it
    /// changed the record; nothing is written when no record changed.
    pub async fn rewrite_all<F>(&self, mut edit: F) -> Result<RewriteOutcome, IdeaError>
    where
        F: FnMut(&mut Idea) -> bool,
    {
        let mut ideas = self.store.read_all().await?;
        let changed = ideas.iter_mut().map(&mut edit).filter(|changed| *changed).count();
        if changed > 0 {
            self.persist(&ideas).await?;
        }
        tracing::info!(changed, total = ideas.len(), "records rewritten");
        Ok(RewriteOutcome {
            changed,
            total: ideas.len(),
        })
    }

    async fn transition<F>(&self, operation: &'static str, id: &str, decide: F) -> Result<Idea, IdeaError>
    where
        F: FnOnce(&Idea) -> Result<Idea, DecideError>,
    {
        let mut ideas = self.store.read_all().await?;
        let index = ideas
            .iter()
            .position(|idea| idea.id == id)
            .ok_or_else(|| IdeaError::NotFound(id.to_string()))?;
        let next = decide(&ideas[index]).inspect_err(|err| {
            tracing::debug!(operation, id = %id, error = %err, "transition refused");
        })?;
        ideas[index] = next.clone();
        self.persist(&ideas).await?;
        tracing::info!(operation, id = %id, collection = %next.collection, "transition applied");
        Ok(next)
    }

    async fn persist(&self, ideas: &[Idea]) -> Result<(), IdeaError> {
        self.store.write_all(ideas).await.map_err(|err| {
            tracing::error!(error = %err, "record store write failed");
            IdeaError::StoreUnavailable(err)
        })
    }
}
