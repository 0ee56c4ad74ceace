// Pure decision function for approval.
//
// Responsibilities
// - Require approver domain id and name.
// - Move the idea to Approved with status In Progress, whatever collection it was in.
// - Drop fields left over from an earlier rejection or an earlier status update.

use crate::modules::ideas::core::decision::{DecideError, require};
use crate::modules::ideas::core::idea::{Collection, Idea, IdeaStatus};
use crate::modules::ideas::use_cases::approve_idea::command::ApproveIdea;
use crate::shared::core::primitives::format_timestamp;

pub fn decide_approve(idea: &Idea, command: ApproveIdea) -> Result<Idea, DecideError> {
    let approver_domain_id = require(command.approver_domain_id, "approverDomainId")
        .map_err(|_| DecideError::MissingApprover)?;
    let approver_name =
        require(command.approver_name, "approverName").map_err(|_| DecideError::MissingApprover)?;

    Ok(Idea {
        collection: Collection::Approved,
        status: Some(IdeaStatus::InProgress),
        approver_domain_id: Some(approver_domain_id),
        approver_name: Some(approver_name),
        approval_date_time: Some(format_timestamp(command.approved_at)),
        rejection_comment: None,
        rejected_date: None,
        implemented_date: None,
        actual_savings: None,
        not_in_scope_reason: None,
        not_in_scope_date_time: None,
        ..idea.clone()
    })
}
