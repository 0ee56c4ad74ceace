// Pure decision function for reverting a reviewed idea back to Pending.
//
// Responsibilities
// - Require reverter name, reverter domain id and a reason.
// - Append exactly one revert entry; earlier entries are carried over untouched.
// - `previousStatus` is Approved when leaving Approved, Rejected otherwise.

use crate::modules::ideas::core::decision::{DecideError, require};
use crate::modules::ideas::core::idea::{Collection, Idea, PreviousStatus, RevertEntry};
use crate::modules::ideas::use_cases::revert_idea::command::RevertIdea;
use crate::shared::core::primitives::format_timestamp;

pub fn decide_revert(idea: &Idea, command: RevertIdea) -> Result<Idea, DecideError> {
    let reverted_by = require(command.reverted_by, "revertedBy")?;
    let reverted_by_domain_id = require(command.reverted_by_domain_id, "revertedByDomainId")?;
    let revert_reason = require(command.revert_reason, "revertReason")?;

    let mut next = idea.clone();
    next.revert_history.push(RevertEntry {
        reverted_by,
        reverted_by_domain_id,
        revert_reason,
        revert_date_time: format_timestamp(command.reverted_at),
        previous_status: PreviousStatus::leaving(idea.collection),
    });
    next.collection = Collection::Pending;
    Ok(next)
}
