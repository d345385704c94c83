use std::num::ParseIntError;
use thiserror::Error;

/// Stored data that violates an invariant the code relies on.
///
/// Results in a 500 Internal Server Error with a generic message returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A snowflake column holds something other than a decimal u64.
    #[error("Stored {column} '{value}' is not a valid snowflake: {source}")]
    InvalidSnowflake {
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
