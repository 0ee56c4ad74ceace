use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::ideas::use_cases::list_ideas::inbound::graphql::QueryRoot;
pub use crate::modules::ideas::use_cases::submit_idea::inbound::graphql::MutationRoot;
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
