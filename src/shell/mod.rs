// Composition root for the events service.
//
// - Read config from the environment.
// - Build the application state and seed it.
// - Expose the HTTP router and the serving loop.

pub mod config;
pub mod http;
pub mod server;
pub mod state;
