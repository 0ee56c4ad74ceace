// Pure decision function for rejection.
//
// Responsibilities
// - Require approver domain id, approver name and a non-empty rejection comment, in that order.
// - Move the idea to Rejected with status Rejected, stamping the rejection date.
// - Drop the approval timestamp and post-approval tracking left over from an earlier approval.

use crate::modules::ideas::core::decision::{DecideError, require};
use crate::modules::ideas::core::idea::{Collection, Idea, IdeaStatus};
use crate::modules::ideas::use_cases::reject_idea::command::RejectIdea;
use crate::shared::core::primitives::format_timestamp;

pub fn decide_reject(idea: &Idea, command: RejectIdea) -> Result<Idea, DecideError> {
    let approver_domain_id = require(command.approver_domain_id, "approverDomainId")?;
    let approver_name = require(command.approver_name, "approverName")?;
    let rejection_comment = require(command.rejection_comment, "rejectionComment")?;

    Ok(Idea {
        collection: Collection::Rejected,
        status: Some(IdeaStatus::Rejected),
        approver_domain_id: Some(approver_domain_id),
        approver_name: Some(approver_name),
        rejection_comment: Some(rejection_comment),
        rejected_date: Some(format_timestamp(command.rejected_at)),
        approval_date_time: None,
        implemented_date: None,
        actual_savings: None,
        not_in_scope_reason: None,
        not_in_scope_date_time: None,
        ..idea.clone()
    })
}
