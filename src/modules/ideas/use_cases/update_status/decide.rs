// Pure decision function for post-approval status updates.
//
// Responsibilities
// - Only ideas in Approved carry a tracked status.
// - Not in Scope needs a reason and records when it was set.
// - Implemented keeps the implementation date and actual savings when supplied.

use crate::modules::ideas::core::decision::{DecideError, require};
use crate::modules::ideas::core::idea::{Collection, Idea, IdeaStatus};
use crate::modules::ideas::use_cases::update_status::command::{StatusChange, UpdateStatus};
use crate::shared::core::primitives::format_timestamp;

pub fn decide_update_status(idea: &Idea, command: UpdateStatus) -> Result<Idea, DecideError> {
    if idea.collection != Collection::Approved {
        return Err(DecideError::NotApproved(idea.collection));
    }

    let mut next = idea.clone();
    match command.change {
        StatusChange::InProgress => {
            next.status = Some(IdeaStatus::InProgress);
        }
        StatusChange::Implemented {
            implemented_date,
            actual_savings,
        } => {
            next.status = Some(IdeaStatus::Implemented);
            if implemented_date.is_some() {
                next.implemented_date = implemented_date;
            }
            if actual_savings.is_some() {
                next.actual_savings = actual_savings;
            }
        }
        StatusChange::NotInScope { reason } => {
            let reason = require(reason, "notInScopeReason")?;
            next.status = Some(IdeaStatus::NotInScope);
            next.not_in_scope_reason = Some(reason);
            next.not_in_scope_date_time = Some(format_timestamp(command.updated_at));
        }
    }
    Ok(next)
}
