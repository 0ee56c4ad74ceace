// Display ordering shared by list views and exports.
//
// Priority (lower first): pending/new 1, approved or in progress 4, implemented 5,
// not in scope 6, reverted 7, rejected 8. Reverted is checked before anything else,
// so a reverted idea sorts as reverted whatever its current status says. Rejection is
// recognised by the `Rejected` status or, for rows written before the status was
// stamped on reject, by a rejection comment.

use crate::modules::ideas::core::idea::{Idea, IdeaStatus};
use crate::shared::core::primitives::{non_blank, timestamp_millis};
use std::cmp::Ordering;

pub fn status_priority(idea: &Idea) -> u8 {
    if idea.is_reverted() {
        return 7;
    }
    match &idea.status {
        Some(IdeaStatus::Implemented) => 5,
        Some(IdeaStatus::NotInScope) => 6,
        Some(IdeaStatus::Rejected) => 8,
        Some(status) if !status.as_str().is_empty() && status.as_str() != "Pending" => 4,
        _ if non_blank(idea.rejection_comment.as_deref()).is_some() => 8,
        _ => 1,
    }
}

/// Status label shown in the all-ideas view and its export.
pub fn status_text(idea: &Idea) -> &str {
    if idea.is_reverted() {
        return "Reverted";
    }
    match &idea.status {
        Some(
            status @ (IdeaStatus::Implemented | IdeaStatus::NotInScope | IdeaStatus::Rejected),
        ) => status.as_str(),
        Some(status) if !status.as_str().is_empty() && status.as_str() != "Pending" => {
            status.as_str()
        }
        _ if non_blank(idea.rejection_comment.as_deref()).is_some() => "Rejected",
        _ => "Pending",
    }
}

/// Newest submission first; unparseable timestamps go last.
pub fn by_submission_desc(a: &Idea, b: &Idea) -> Ordering {
    let a_ms = timestamp_millis(&a.submission_date_time);
    let b_ms = timestamp_millis(&b.submission_date_time);
    b_ms.cmp(&a_ms)
}

pub fn by_display_priority(a: &Idea, b: &Idea) -> Ordering {
    status_priority(a)
        .cmp(&status_priority(b))
        .then_with(|| by_submission_desc(a, b))
}

#[cfg(test)]
mod display_tests {
    use super::*;
    use crate::modules::ideas::core::idea::{Collection, PreviousStatus, RevertEntry};
    use rstest::rstest;

    fn idea(id: &str, submitted: &str) -> Idea {
        Idea {
            id: id.into(),
            submission_date_time: submitted.into(),
            ..Idea::default()
        }
    }

    fn revert_entry() -> RevertEntry {
        RevertEntry {
            reverted_by: "BA One".into(),
            reverted_by_domain_id: "B1".into(),
            revert_reason: "needs detail".into(),
            revert_date_time: "2024-02-01T00:00:00.000Z".into(),
            previous_status: PreviousStatus::Approved,
        }
    }

    #[rstest]
    fn it_should_rank_each_lifecycle_position() {
        let pending = idea("p", "2024-01-01T00:00:00.000Z");
        let in_progress = Idea {
            status: Some(IdeaStatus::InProgress),
            collection: Collection::Approved,
            ..idea("a", "2024-01-01T00:00:00.000Z")
        };
        let implemented = Idea {
            status: Some(IdeaStatus::Implemented),
            ..idea("i", "2024-01-01T00:00:00.000Z")
        };
        let not_in_scope = Idea {
            status: Some(IdeaStatus::NotInScope),
            ..idea("n", "2024-01-01T00:00:00.000Z")
        };
        let reverted = Idea {
            status: Some(IdeaStatus::Implemented),
            revert_history: vec![revert_entry()],
            ..idea("r", "2024-01-01T00:00:00.000Z")
        };
        let rejected = Idea {
            rejection_comment: Some("duplicate".into()),
            ..idea("x", "2024-01-01T00:00:00.000Z")
        };
        assert_eq!(status_priority(&pending), 1);
        assert_eq!(status_priority(&in_progress), 4);
        assert_eq!(status_priority(&implemented), 5);
        assert_eq!(status_priority(&not_in_scope), 6);
        assert_eq!(status_priority(&reverted), 7);
        assert_eq!(status_priority(&rejected), 8);

        assert_eq!(status_text(&pending), "Pending");
        assert_eq!(status_text(&in_progress), "In Progress");
        assert_eq!(status_text(&reverted), "Reverted");
        assert_eq!(status_text(&rejected), "Rejected");
    }

    #[rstest]
    fn it_should_rank_the_rejected_status_last() {
        let rejected = Idea {
            status: Some(IdeaStatus::Rejected),
            rejection_comment: Some("duplicate".into()),
            ..idea("x", "2024-01-01T00:00:00.000Z")
        };
        assert_eq!(status_priority(&rejected), 8);
        assert_eq!(status_text(&rejected), "Rejected");
    }

    #[rstest]
    fn it_should_sort_by_priority_then_newest_submission() {
        let mut ideas = vec![
            Idea {
                rejection_comment: Some("no".into()),
                ..idea("rejected", "2024-05-01T00:00:00.000Z")
            },
            idea("old-pending", "2024-01-01T00:00:00.000Z"),
            Idea {
                status: Some(IdeaStatus::InProgress),
                ..idea("approved", "2024-06-01T00:00:00.000Z")
            },
            idea("new-pending", "2024-03-01T00:00:00.000Z"),
            idea("garbled", "not a date"),
        ];
        ideas.sort_by(by_display_priority);
        let order: Vec<&str> = ideas.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            order,
            vec!["new-pending", "old-pending", "garbled", "approved", "rejected"]
        );
    }
}
