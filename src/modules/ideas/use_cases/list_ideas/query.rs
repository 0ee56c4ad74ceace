// Read-side views over the record set.
//
// Responsibilities
// - Per-collection views: newest submission first.
// - All-ideas view: display priority, then newest submission first.
// - Grouped view: the three collections side by side.
// - Optional narrowing by submitter fields, free-text search, submission date range
//   and whether an idea has been reverted.

use serde::{Deserialize, Serialize};

use crate::modules::ideas::core::display::{by_display_priority, by_submission_desc};
use crate::modules::ideas::core::idea::{Collection, Idea};
use crate::shared::core::primitives::{non_blank, timestamp_millis};

const END_OF_DAY_MS: i64 = 86_399_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFilter {
    pub associate_name: Option<String>,
    pub associate_domain_id: Option<String>,
    pub team_lead: Option<String>,
    pub functional_manager: Option<String>,
    pub search: Option<String>,
    /// Inclusive lower bound on the submission time, as a date or timestamp.
    pub start_date: Option<String>,
    /// Inclusive upper bound; a plain date covers the whole day.
    pub end_date: Option<String>,
    pub reverted: Option<bool>,
}

fn contains_ignoring_case(haystack: &str, needle: Option<&str>) -> bool {
    match non_blank(needle) {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

fn any_text_contains(idea: &Idea, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(idea) else {
        return false;
    };
    fields.values().any(|value| {
        value
            .as_str()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

impl IdeaFilter {
    pub fn matches(&self, idea: &Idea) -> bool {
        if let Some(reverted) = self.reverted
            && idea.is_reverted() != reverted
        {
            return false;
        }
        if !(contains_ignoring_case(&idea.associate_name, self.associate_name.as_deref())
            && contains_ignoring_case(&idea.associate_domain_id, self.associate_domain_id.as_deref())
            && contains_ignoring_case(&idea.team_lead, self.team_lead.as_deref())
            && contains_ignoring_case(&idea.functional_manager, self.functional_manager.as_deref()))
        {
            return false;
        }
        if let Some(term) = non_blank(self.search.as_deref())
            && !any_text_contains(idea, term)
        {
            return false;
        }
        self.matches_dates(idea)
    }

    fn matches_dates(&self, idea: &Idea) -> bool {
        let start = non_blank(self.start_date.as_deref()).and_then(timestamp_millis);
        let end = non_blank(self.end_date.as_deref()).map(|raw| {
            let is_plain_date = raw.trim().len() == 10;
            timestamp_millis(raw).map(|ms| if is_plain_date { ms + END_OF_DAY_MS } else { ms })
        });
        if start.is_none() && end.is_none() {
            return true;
        }
        let Some(submitted) = timestamp_millis(&idea.submission_date_time) else {
            return false;
        };
        let after_start = start.is_none_or(|start| submitted >= start);
        let before_end = match end {
            Some(Some(end)) => submitted <= end,
            Some(None) => false,
            None => true,
        };
        after_start && before_end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedIdeas {
    pub pending_ideas: Vec<Idea>,
    pub approved_ideas: Vec<Idea>,
    pub rejected_ideas: Vec<Idea>,
}

pub fn collection_view(ideas: Vec<Idea>, collection: Collection, filter: &IdeaFilter) -> Vec<Idea> {
    let mut view: Vec<Idea> = ideas
        .into_iter()
        .filter(|idea| idea.collection == collection && filter.matches(idea))
        .collect();
    view.sort_by(by_submission_desc);
    view
}

pub fn all_view(ideas: Vec<Idea>, filter: &IdeaFilter) -> Vec<Idea> {
    let mut view: Vec<Idea> = ideas.into_iter().filter(|idea| filter.matches(idea)).collect();
    view.sort_by(by_display_priority);
    view
}

pub fn grouped_view(ideas: Vec<Idea>, filter: &IdeaFilter) -> GroupedIdeas {
    GroupedIdeas {
        pending_ideas: collection_view(ideas.clone(), Collection::Pending, filter),
        approved_ideas: collection_view(ideas.clone(), Collection::Approved, filter),
        rejected_ideas: collection_view(ideas, Collection::Rejected, filter),
    }
}
