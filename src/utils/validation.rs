//! Centralized validation helpers.

use crate::core::types::MapError;

/// Check that a worker count is usable.
///
/// Zero is rejected, never clamped to one. Any positive count is accepted;
/// extra workers beyond the number of references simply get empty ranges.
///
/// # Examples
///
/// ```
/// use map_strings::utils::validation::validate_worker_count;
///
/// assert!(validate_worker_count(1).is_ok());
/// assert!(validate_worker_count(0).is_err());
/// ```
///
/// # Errors
///
/// Returns `MapError::Config` if `workers` is zero.
pub fn validate_worker_count(workers: usize) -> Result<(), MapError> {
    if workers == 0 {
        return Err(MapError::Config(
            "worker count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_worker_count() {
        assert!(validate_worker_count(1).is_ok());
        assert!(validate_worker_count(4096).is_ok());
        assert!(matches!(validate_worker_count(0), Err(MapError::Config(_))));
    }
}
