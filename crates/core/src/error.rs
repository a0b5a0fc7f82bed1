use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid {entity} id: '{raw}'")]
    InvalidId { entity: &'static str, raw: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{field} exceeds maximum length of {max} characters (got {actual})")]
    PayloadTooLarge {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}
