use regex::Regex;
use std::sync::LazyLock;

use crate::{
    error::preview::PreviewError, model::link::MessageLinkReference,
    service::MAX_PREVIEWS_PER_MESSAGE,
};

static MESSAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://(discordapp\.com|discord\.com)/channels/(\d+)/(\d+)/(\d+)")
        .expect("hardcoded regex")
});

/// Extracts Discord message links from free-form text.
///
/// At most `MAX_PREVIEWS_PER_MESSAGE` links are returned, in the order they appear.
/// The match iterator is cut off at that count, so the rest of the text is never
/// scanned.
///
/// # Arguments
/// - `content` - Message body to search
///
/// # Returns
/// - `Ok(Vec<MessageLinkReference>)` - Links found, possibly empty
/// - `Err(PreviewError::MalformedLink)` - A match was missing a capture group; no
///   links are returned in that case
pub fn extract_message_links(content: &str) -> Result<Vec<MessageLinkReference>, PreviewError> {
    MESSAGE_LINK
        .captures_iter(content)
        .take(MAX_PREVIEWS_PER_MESSAGE)
        .map(|captures| {
            match (
                captures.get(0),
                captures.get(2),
                captures.get(3),
                captures.get(4),
            ) {
                (Some(link), Some(guild_id), Some(channel_id), Some(message_id)) => {
                    Ok(MessageLinkReference {
                        link: link.as_str().to_string(),
                        guild_id: guild_id.as_str().to_string(),
                        channel_id: channel_id.as_str().to_string(),
                        message_id: message_id.as_str().to_string(),
                    })
                }
                _ => Err(PreviewError::MalformedLink {
                    link: captures
                        .get(0)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                }),
            }
        })
        .collect()
}

/// Keeps only links pointing into the given guild, preserving their order.
pub fn filter_same_guild(
    links: Vec<MessageLinkReference>,
    guild_id: &str,
) -> Vec<MessageLinkReference> {
    links
        .into_iter()
        .filter(|link| link.guild_id == guild_id)
        .collect()
}
