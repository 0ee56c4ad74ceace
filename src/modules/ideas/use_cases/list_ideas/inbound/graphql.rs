use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::ideas::core::display::status_text;
use crate::modules::ideas::core::idea::{Collection, Idea, RevertEntry};
use crate::modules::ideas::use_cases::list_ideas::query::{IdeaFilter, all_view, collection_view};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRevertEntry {
    pub reverted_by: String,
    pub reverted_by_domain_id: String,
    pub revert_reason: String,
    pub revert_date_time: String,
    pub previous_status: String,
}

impl From<RevertEntry> for GqlRevertEntry {
    fn from(v: RevertEntry) -> Self {
        Self {
            reverted_by: v.reverted_by,
            reverted_by_domain_id: v.reverted_by_domain_id,
            revert_reason: v.revert_reason,
            revert_date_time: v.revert_date_time,
            previous_status: v.previous_status.as_str().to_string(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlIdea {
    pub id: String,
    pub collection: String,
    pub idea_id: String,
    pub associate_domain_id: String,
    pub associate_name: String,
    pub function: String,
    pub team_lead: String,
    pub functional_manager: String,
    pub state: String,
    pub application_name: String,
    pub idea_name: String,
    pub problem_statement: String,
    pub solution: String,
    pub savings_type: String,
    pub savings_comment: String,
    pub submission_date_time: String,
    pub approver_domain_id: Option<String>,
    pub approver_name: Option<String>,
    pub approval_date_time: Option<String>,
    pub rejected_date: Option<String>,
    pub rejection_comment: Option<String>,
    pub status: Option<String>,
    pub display_status: String,
    pub implemented_date: Option<String>,
    pub actual_savings: Option<String>,
    pub not_in_scope_reason: Option<String>,
    pub implementation_notes: Option<String>,
    pub revert_history: Vec<GqlRevertEntry>,
}

impl From<Idea> for GqlIdea {
    fn from(v: Idea) -> Self {
        let display_status = status_text(&v).to_string();
        let application_name = v.display_application_name().to_string();
        Self {
            id: v.id,
            collection: v.collection.as_str().to_string(),
            idea_id: v.idea_id,
            associate_domain_id: v.associate_domain_id,
            associate_name: v.associate_name,
            function: v.function,
            team_lead: v.team_lead,
            functional_manager: v.functional_manager,
            state: v.state,
            application_name,
            idea_name: v.idea_name,
            problem_statement: v.problem_statement,
            solution: v.solution,
            savings_type: v.savings_type,
            savings_comment: v.savings_comment,
            submission_date_time: v.submission_date_time,
            approver_domain_id: v.approver_domain_id,
            approver_name: v.approver_name,
            approval_date_time: v.approval_date_time,
            rejected_date: v.rejected_date,
            rejection_comment: v.rejection_comment,
            status: v.status.map(String::from),
            display_status,
            implemented_date: v.implemented_date,
            actual_savings: v.actual_savings,
            not_in_scope_reason: v.not_in_scope_reason,
            implementation_notes: v.implementation_notes,
            revert_history: v.revert_history.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Ideas in one collection (`pendingIdeas`, `approvedIdeas`, `rejectedIdeas`), newest
    /// first, or every idea in display order when `collection` is omitted.
    async fn ideas(
        &self,
        context: &Context<'_>,
        collection: Option<String>,
        search: Option<String>,
    ) -> GqlResult<Vec<GqlIdea>> {
        let state = context.data_unchecked::<AppState>();
        let filter = IdeaFilter {
            search,
            ..IdeaFilter::default()
        };
        let ideas = state.lifecycle.snapshot().await;
        let view = match collection.as_deref() {
            None | Some("all") => all_view(ideas, &filter),
            Some(name) => {
                let collection = Collection::parse(name)
                    .ok_or_else(|| async_graphql::Error::new(format!("unknown collection: {name}")))?;
                collection_view(ideas, collection, &filter)
            }
        };
        Ok(view.into_iter().map(Into::into).collect())
    }

    async fn idea(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlIdea>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.lifecycle.fetch(&id).await.ok().map(Into::into))
    }
}
