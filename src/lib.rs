// Pedantic lint configuration for the crate.
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: The only panics are on constant regex patterns
// - module_name_repetitions: `JobDocsError` and friends read better in logs
// - needless_pass_by_value: Sometimes clearer semantically
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value
)]

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod ingest;
pub mod models;
