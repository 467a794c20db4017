//! Preview assembly.
//!
//! Turns a fetched message into a `PreviewSummary` that only exposes a shortened body,
//! the first image and the names of the remaining attachments. `builder` renders the
//! summary into a Discord embed.

pub mod builder;

use chrono::SubsecRound;

use crate::model::{
    link::MessageLinkReference,
    message::LinkedMessage,
    preview::{PreviewImage, PreviewSummary},
};

/// Maximum number of characters of the linked message shown in a preview.
pub const MAX_PREVIEW_CHARS: usize = 128;

pub const PREVIEW_TITLE: &str = "Linked Message Preview";
pub const UNKNOWN_CHANNEL_NAME: &str = "#Unknown Channel";

const ELLIPSIS: &str = "...";

/// Builds the preview summary for a linked message.
///
/// # Arguments
/// - `link` - The link that was shared
/// - `message` - The message the link points at
/// - `channel_name` - Display name of the message's channel, if it could be resolved
///
/// # Returns
/// - `PreviewSummary` - Summary ready to be rendered with `builder::build_preview_embed`
pub fn assemble_preview(
    link: &MessageLinkReference,
    message: &LinkedMessage,
    channel_name: Option<&str>,
) -> PreviewSummary {
    let (images, files): (Vec<_>, Vec<_>) = message
        .attachments
        .iter()
        .partition(|attachment| attachment.is_image());

    let image = images.first().map(|attachment| PreviewImage {
        url: attachment.url.clone(),
        proxy_url: attachment.proxy_url.clone(),
        width: attachment.width.unwrap_or_default(),
        height: attachment.height.unwrap_or_default(),
    });

    let attachment_names = if files.is_empty() {
        None
    } else {
        Some(
            files
                .iter()
                .map(|attachment| attachment.filename.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    };

    PreviewSummary {
        link: link.link.clone(),
        title: PREVIEW_TITLE.to_string(),
        content: truncate_content(&message.content),
        timestamp: message.timestamp.trunc_subsecs(0),
        footer_text: format!(
            "Message sent by {} in {}",
            message.author.tag,
            channel_name.unwrap_or(UNKNOWN_CHANNEL_NAME)
        ),
        footer_icon_url: message.author.avatar_url.clone(),
        image,
        attachment_names,
    }
}

/// Cuts a message body down to `MAX_PREVIEW_CHARS` characters.
///
/// Bodies that fit are returned unchanged. Longer bodies keep their first
/// `MAX_PREVIEW_CHARS` characters, minus trailing whitespace, followed by `...`.
pub fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(MAX_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", content[..cut].trim_end(), ELLIPSIS),
        None => content.to_string(),
    }
}
