//! Errors raised while turning a message link into a preview.

use thiserror::Error;

use crate::error::{internal::InternalError, AppError};

#[derive(Error, Debug)]
pub enum PreviewError {
    /// The link pattern matched but one of its capture groups was missing.
    ///
    /// Aborts extraction for the whole message; no partial results are returned.
    #[error("Invalid submatch found in message link '{link}'")]
    MalformedLink {
        /// The full text of the offending match
        link: String,
    },

    /// A channel needed for the access check could not be resolved from the cache
    /// or fetched from Discord.
    #[error("Failed to resolve channel {channel_id}: {source}")]
    ChannelLookup {
        /// The channel that could not be resolved
        channel_id: u64,
        /// The underlying fetch failure
        #[source]
        source: Box<AppError>,
    },

    /// An empty channel ID was handed to the access check.
    #[error("Empty channel ID provided")]
    EmptyChannelId,

    /// A channel ID handed to the access check is not a usable snowflake.
    #[error("Invalid channel ID '{value}': {source}")]
    InvalidChannelId {
        /// The rejected channel ID
        value: String,
        /// Why the ID was rejected
        #[source]
        source: InternalError,
    },
}
