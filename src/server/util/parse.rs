use crate::server::error::{internal::InternalError, AppError};

/// Parses a snowflake id read back from a text column.
///
/// # Returns
/// - `Ok(u64)` - The id
/// - `Err(AppError::InternalErr(InvalidSnowflake))` - The stored text is not a u64
pub fn parse_stored_snowflake(column: &'static str, value: &str) -> Result<u64, AppError> {
    value.parse::<u64>().map_err(|source| {
        InternalError::InvalidSnowflake {
            column,
            value: value.to_string(),
            source,
        }
        .into()
    })
}
