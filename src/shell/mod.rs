// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the file system record store and the event store on top of it.
// - Expose the command router over HTTP for the chat platform connector.

pub mod config;
pub mod http;
pub mod state;
