// Composition root for the products bounded context.
//
// Responsibilities
// - Read config from file and environment.
// - Instantiate the in memory product store.
// - Wire the store into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
