//! Test factories for creating Serenity message objects.

use serde_json::Value;
use serenity::all::Message;

use crate::serenity::user::test_user;

/// Author id used by every test message.
pub const TEST_AUTHOR_ID: u64 = 900000000000000000;

/// Builds the JSON for a message attachment.
///
/// # Arguments
/// - `attachment_id` - Discord attachment ID (snowflake)
/// - `filename` - Attachment file name
/// - `dimensions` - `Some((width, height))` for images, `None` for other files
pub fn create_test_attachment(
    attachment_id: u64,
    filename: &str,
    dimensions: Option<(u32, u32)>,
) -> Value {
    let (width, height) = match dimensions {
        Some((width, height)) => (Some(width), Some(height)),
        None => (None, None),
    };

    serde_json::json!({
        "id": attachment_id.to_string(),
        "filename": filename,
        "size": 1024,
        "url": format!("https://cdn.discordapp.com/attachments/{}/{}", attachment_id, filename),
        "proxy_url": format!("https://media.discordapp.net/attachments/{}/{}", attachment_id, filename),
        "width": width,
        "height": height,
    })
}

/// Creates a test Serenity Message authored by `tester`.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `guild_id` - Guild the message was sent in, `None` for direct messages
/// - `content` - Message body
/// - `bot` - Whether the author is a bot account
/// - `attachments` - Attachment JSON from `create_test_attachment`
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    content: &str,
    bot: bool,
    attachments: Vec<Value>,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": test_user(TEST_AUTHOR_ID, "tester", bot),
        "content": content,
        "timestamp": "2024-01-02T03:04:05.678000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": attachments,
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
