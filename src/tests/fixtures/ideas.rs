// Records in each lifecycle position, derived from the submission fixture.

use crate::modules::ideas::core::idea::{Collection, Idea, IdeaStatus};
use crate::modules::ideas::use_cases::submit_idea::decide::decide_submit;
use crate::tests::fixtures::commands::submit_idea::SubmitIdeaBuilder;

pub fn make_pending_idea() -> Idea {
    decide_submit(SubmitIdeaBuilder::new().build()).unwrap()
}

pub fn make_approved_idea() -> Idea {
    Idea {
        collection: Collection::Approved,
        status: Some(IdeaStatus::InProgress),
        approver_domain_id: Some("R1".into()),
        approver_name: Some("Reviewer One".into()),
        approval_date_time: Some("2024-03-02T09:00:00.000Z".into()),
        ..make_pending_idea()
    }
}

pub fn make_rejected_idea() -> Idea {
    Idea {
        collection: Collection::Rejected,
        status: Some(IdeaStatus::Rejected),
        approver_domain_id: Some("R1".into()),
        approver_name: Some("Reviewer One".into()),
        rejection_comment: Some("Duplicate of IDEA-0".into()),
        rejected_date: Some("2024-03-02T09:00:00.000Z".into()),
        ..make_pending_idea()
    }
}

/// Pending record with its own id, business id and submission time.
pub fn make_idea(id: &str, idea_id: &str, submitted: &str) -> Idea {
    decide_submit(
        SubmitIdeaBuilder::new()
            .id(id)
            .idea_id(idea_id)
            .submission_date_time(submitted)
            .build(),
    )
    .unwrap()
}
