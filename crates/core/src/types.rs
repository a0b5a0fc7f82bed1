use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse an identifier taken from a request path.
///
/// Identifiers are opaque to clients; anything that is not a positive
/// integer is rejected as [`CoreError::InvalidId`] rather than looked up.
pub fn parse_db_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::InvalidId {
            entity,
            raw: raw.to_string(),
        }),
    }
}
