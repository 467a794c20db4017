//! Preview embed builder.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::preview::PreviewSummary,
};

/// Embed colour used for every preview.
pub const PREVIEW_COLOUR: u32 = 0x6DAED6;

pub const ATTACHMENTS_FIELD_NAME: &str = "Attached Files";

/// Builds the Discord embed for a preview summary.
///
/// The description is omitted for messages without text, since Discord rejects
/// embeds with an empty description.
///
/// # Arguments
/// - `preview` - Summary produced by `assemble_preview`
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(AppError::InternalErr)` - Timestamp outside Discord's supported range
pub fn build_preview_embed(preview: &PreviewSummary) -> Result<CreateEmbed, AppError> {
    let unix = preview.timestamp.timestamp();
    let timestamp = Timestamp::from_unix_timestamp(unix).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: e.to_string(),
        }
    })?;

    let mut embed = CreateEmbed::new()
        .title(&preview.title)
        .url(&preview.link)
        .timestamp(timestamp)
        .color(PREVIEW_COLOUR)
        .footer(CreateEmbedFooter::new(&preview.footer_text).icon_url(&preview.footer_icon_url));

    if !preview.content.is_empty() {
        embed = embed.description(&preview.content);
    }

    // Serenity only takes the image URL; Discord fills in proxy URL and size itself
    if let Some(image) = &preview.image {
        embed = embed.image(&image.url);
    }

    if let Some(names) = &preview.attachment_names {
        embed = embed.field(ATTACHMENTS_FIELD_NAME, names, false);
    }

    Ok(embed)
}
