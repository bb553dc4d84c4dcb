//! Result type alias for Aegis

use super::errors::AegisError;

/// Result type alias for Aegis operations
///
/// This is a convenience type alias that uses `AegisError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use aegis::domain::result::Result;
/// use aegis::domain::errors::AegisError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AegisError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AegisError>;
