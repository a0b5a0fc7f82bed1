//! Version-history policy for layouts.
//!
//! Every mutation of a layout first snapshots the content it is about to
//! replace. Only the newest [`MAX_RETAINED_VERSIONS`] snapshots per layout are
//! kept; older ones are pruned right after a new snapshot is written.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of snapshots retained per layout.
pub const MAX_RETAINED_VERSIONS: usize = 4;

/// Default `limit` for version listings.
pub const DEFAULT_VERSION_LIST_LIMIT: i64 = 4;

/// Largest accepted `limit` for version listings.
pub const MAX_VERSION_LIST_LIMIT: i64 = 10;

/// Snapshot reason written when a layout is created.
pub const REASON_INITIAL_CREATE: &str = "initial_create";

/// Default snapshot reason for updates that don't supply one.
pub const REASON_MANUAL_UPDATE: &str = "manual_update";

/// Snapshot reason written before a restore overwrites the layout.
pub const REASON_RESTORE_SNAPSHOT: &str = "restore_snapshot";

// ---------------------------------------------------------------------------
// Policy helpers
// ---------------------------------------------------------------------------

/// Resolve the `limit` query parameter of a version listing.
///
/// Absent means [`DEFAULT_VERSION_LIST_LIMIT`]; anything outside
/// `1..=MAX_VERSION_LIST_LIMIT` is rejected, not clamped.
pub fn resolve_version_limit(limit: Option<i64>) -> Result<i64, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_VERSION_LIST_LIMIT);
    if !(1..=MAX_VERSION_LIST_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between 1 and {MAX_VERSION_LIST_LIMIT} (got {limit})"
        )));
    }
    Ok(limit)
}

/// The reason recorded for an update: the caller's, or the default when the
/// caller sent none or only whitespace.
pub fn update_reason(reason: Option<&str>) -> &str {
    match reason.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => REASON_MANUAL_UPDATE,
    }
}

/// Given version ids ordered newest first, return the ids that fall outside
/// the newest `keep`.
pub fn versions_to_prune<T: Copy>(newest_first: &[T], keep: usize) -> Vec<T> {
    newest_first.iter().skip(keep).copied().collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_limit_uses_default() {
        assert_eq!(resolve_version_limit(None).unwrap(), DEFAULT_VERSION_LIST_LIMIT);
    }

    #[test]
    fn limit_bounds_are_inclusive() {
        assert_eq!(resolve_version_limit(Some(1)).unwrap(), 1);
        assert_eq!(resolve_version_limit(Some(10)).unwrap(), 10);
    }

    #[test]
    fn out_of_range_limits_rejected() {
        assert_matches!(resolve_version_limit(Some(0)), Err(CoreError::Validation(_)));
        assert_matches!(resolve_version_limit(Some(11)), Err(CoreError::Validation(_)));
        assert_matches!(resolve_version_limit(Some(-1)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_reason_falls_back_to_default() {
        assert_eq!(update_reason(None), REASON_MANUAL_UPDATE);
        assert_eq!(update_reason(Some("  ")), REASON_MANUAL_UPDATE);
        assert_eq!(update_reason(Some(" ai_edit ")), "ai_edit");
    }

    #[test]
    fn prune_keeps_newest() {
        assert_eq!(versions_to_prune(&[9, 8, 7, 6, 5], 4), vec![5]);
        assert_eq!(versions_to_prune(&[3, 2], 4), Vec::<i32>::new());
    }
}
