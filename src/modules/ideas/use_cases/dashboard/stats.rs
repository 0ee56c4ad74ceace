// Aggregate counts for the dashboard.
//
// Breakdowns are keyed by the raw stored value, so legacy spellings show up as their own
// rows until the field migration has run. Months are computed in UTC.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::modules::ideas::core::idea::{Collection, Idea, IdeaStatus};
use crate::shared::core::primitives::timestamp_millis;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionCounts {
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
}

impl CollectionCounts {
    fn bump(&mut self, collection: Collection) {
        match collection {
            Collection::Approved => self.approved += 1,
            Collection::Rejected => self.rejected += 1,
            Collection::Pending => self.pending += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_ideas: usize,
    pub approved_ideas: usize,
    pub rejected_ideas: usize,
    pub pending_ideas: usize,
    pub implemented_ideas: usize,
    pub in_progress_ideas: usize,
    pub ideas_per_team_lead: BTreeMap<String, CollectionCounts>,
    pub ideas_per_functional_manager: BTreeMap<String, CollectionCounts>,
    pub ideas_per_function: BTreeMap<String, CollectionCounts>,
    /// Submissions per `"{month}/{year}"`, month not zero-padded.
    pub monthly_submissions: BTreeMap<String, usize>,
}

fn month_key(submitted: &str) -> Option<String> {
    let at = DateTime::<Utc>::from_timestamp_millis(timestamp_millis(submitted)?)?;
    Some(format!("{}/{}", at.month(), at.year()))
}

impl DashboardStats {
    pub fn compute(ideas: &[Idea]) -> Self {
        let mut stats = DashboardStats {
            total_ideas: ideas.len(),
            ..DashboardStats::default()
        };

        for idea in ideas {
            match idea.collection {
                Collection::Approved => {
                    stats.approved_ideas += 1;
                    if idea.status == Some(IdeaStatus::Implemented) {
                        stats.implemented_ideas += 1;
                    } else {
                        stats.in_progress_ideas += 1;
                    }
                }
                Collection::Rejected => stats.rejected_ideas += 1,
                Collection::Pending => stats.pending_ideas += 1,
            }

            stats
                .ideas_per_team_lead
                .entry(idea.team_lead.clone())
                .or_default()
                .bump(idea.collection);
            stats
                .ideas_per_functional_manager
                .entry(idea.functional_manager.clone())
                .or_default()
                .bump(idea.collection);
            stats
                .ideas_per_function
                .entry(idea.function.clone())
                .or_default()
                .bump(idea.collection);

            if let Some(key) = month_key(&idea.submission_date_time) {
                *stats.monthly_submissions.entry(key).or_default() += 1;
            }
        }

        stats
    }
}
