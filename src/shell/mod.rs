// Composition root for the idea portal.
//
// Responsibilities
// - Choose the record store backend from configuration.
// - Wire the lifecycle service and reference data into shared state.
// - Assemble the HTTP router and the GraphQL schema.

pub mod graphql;
pub mod http;
pub mod passcode;
pub mod state;
