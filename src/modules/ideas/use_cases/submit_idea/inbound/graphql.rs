use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::ideas::use_cases::list_ideas::inbound::graphql::GqlIdea;
use crate::modules::ideas::use_cases::submit_idea::inbound::http::SubmitIdeaBody;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct SubmitIdeaInput {
    pub idea_id: Option<String>,
    pub associate_domain_id: Option<String>,
    pub associate_name: Option<String>,
    pub function: Option<String>,
    pub team_lead: Option<String>,
    pub functional_manager: Option<String>,
    pub state: Option<String>,
    pub application_name: Option<String>,
    pub specify_application_name: Option<String>,
    pub idea_name: Option<String>,
    pub problem_statement: Option<String>,
    pub solution: Option<String>,
    pub savings_type: Option<String>,
    pub savings_comment: Option<String>,
}

impl From<SubmitIdeaInput> for SubmitIdeaBody {
    fn from(v: SubmitIdeaInput) -> Self {
        Self {
            idea_id: v.idea_id,
            associate_domain_id: v.associate_domain_id,
            associate_name: v.associate_name,
            function: v.function,
            team_lead: v.team_lead,
            functional_manager: v.functional_manager,
            state: v.state,
            application_name: v.application_name,
            specify_application_name: v.specify_application_name,
            idea_name: v.idea_name,
            problem_statement: v.problem_statement,
            solution: v.solution,
            savings_type: v.savings_type,
            savings_comment: v.savings_comment,
            submission_date_time: None,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_idea(
        &self,
        context: &Context<'_>,
        input: SubmitIdeaInput,
    ) -> GqlResult<GqlIdea> {
        let state = context.data_unchecked::<AppState>();
        let command = SubmitIdeaBody::from(input).into_command();
        let idea = state
            .lifecycle
            .submit(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(idea.into())
    }
}
