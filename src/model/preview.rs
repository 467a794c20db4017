use chrono::{DateTime, SecondsFormat, Utc};

/// Image shown in a preview embed, taken from the first image attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub url: String,
    pub proxy_url: String,
    pub width: u32,
    pub height: u32,
}

/// Disclosure-safe summary of a linked message.
///
/// Built once per qualifying link, rendered into an embed and sent, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSummary {
    /// The link that was shared, used as the embed URL.
    pub link: String,
    pub title: String,
    /// Message body cut to the preview length, with an ellipsis when cut.
    pub content: String,
    /// Send time of the linked message, truncated to whole seconds.
    pub timestamp: DateTime<Utc>,
    pub footer_text: String,
    pub footer_icon_url: String,
    pub image: Option<PreviewImage>,
    /// Comma separated names of the non-image attachments.
    pub attachment_names: Option<String>,
}

impl PreviewSummary {
    /// Timestamp as ISO-8601 text at second precision, e.g. `2024-01-02T03:04:05Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
