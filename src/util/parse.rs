use crate::error::internal::InternalError;

/// Parses a u64 value from a string slice
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(InternalError::ParseStringId)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })
}

/// Parses a Discord snowflake from a string slice.
///
/// Serenity id types panic on zero, so zero is rejected here before any id is built.
///
/// # Arguments
/// - `value` - Decimal snowflake text, e.g. captured from a message link
///
/// # Returns
/// - `Ok(u64)` - A non-zero id safe to pass to `ChannelId::new` and friends
/// - `Err(InternalError::ParseStringId)` - Not a decimal u64 (including overflow)
/// - `Err(InternalError::ZeroSnowflake)` - Parsed to zero
pub fn parse_snowflake(value: &str) -> Result<u64, InternalError> {
    match parse_u64_from_string(value)? {
        0 => Err(InternalError::ZeroSnowflake {
            value: value.to_string(),
        }),
        id => Ok(id),
    }
}
