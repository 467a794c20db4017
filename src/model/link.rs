/// A link to a Discord message found in free-form text.
///
/// Holds the identifiers exactly as they appeared in the link. They are only parsed into
/// numeric ids once the reference has passed the same-guild filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLinkReference {
    /// The full matched link, used as the preview embed URL.
    pub link: String,
    /// Guild (server) ID segment of the link.
    pub guild_id: String,
    /// Channel ID segment of the link.
    pub channel_id: String,
    /// Message ID segment of the link.
    pub message_id: String,
}
