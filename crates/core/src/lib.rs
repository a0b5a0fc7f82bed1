//! Domain logic for the layout editor backend.
//!
//! Everything in this crate is pure: identifiers, error types, the theme and
//! edit-action schema, the model-response validator, the prompt builder, and
//! the version-retention policy. Persistence lives in `layoutsmith-db`, the
//! model client in `layoutsmith-llm`.

pub mod actions;
pub mod error;
pub mod limits;
pub mod prompt;
pub mod suggestion;
pub mod theme;
pub mod types;
pub mod versioning;
