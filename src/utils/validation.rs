//! Centralized validation of user-supplied matching parameters.

/// Upper bound on `max_results`
pub const MAX_RESULTS_LIMIT: usize = 1_000;

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Threshold must be between 0.0 and 1.0, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("Max results must be between 1 and {MAX_RESULTS_LIMIT}, got {0}")]
    MaxResultsOutOfRange(usize),
    #[error("At least one scoring weight must be non-zero")]
    AllWeightsZero,
}

/// Validate a similarity threshold.
///
/// # Errors
///
/// Returns `ValidationError::ThresholdOutOfRange` if the value is NaN or
/// outside `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use memo_match::utils::validation::validate_threshold;
///
/// assert!(validate_threshold(0.5).is_ok());
/// assert!(validate_threshold(1.5).is_err());
/// ```
pub fn validate_threshold(threshold: f64) -> Result<f64, ValidationError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(ValidationError::ThresholdOutOfRange(threshold))
    }
}

/// Validate the maximum number of results.
///
/// # Errors
///
/// Returns `ValidationError::MaxResultsOutOfRange` for zero or values above
/// [`MAX_RESULTS_LIMIT`].
pub fn validate_max_results(max_results: usize) -> Result<usize, ValidationError> {
    if (1..=MAX_RESULTS_LIMIT).contains(&max_results) {
        Ok(max_results)
    } else {
        Err(ValidationError::MaxResultsOutOfRange(max_results))
    }
}
