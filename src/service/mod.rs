//! Message link preview services.
//!
//! - `link` - Finding message links in text and dropping links to other guilds
//! - `access` - Deciding whether a linked message may be shown in another channel
//! - `preview` - Building the preview summary and its embed
//! - `message` - Running the whole pipeline for an incoming message

pub mod access;
pub mod link;
pub mod message;
pub mod preview;

#[cfg(test)]
mod test;

/// Upper bound on previews sent for a single message, and on links extracted from it.
pub const MAX_PREVIEWS_PER_MESSAGE: usize = 3;
