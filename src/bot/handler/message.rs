use serenity::all::{Context, Message};
use std::sync::Arc;

use crate::{
    data::discord::{ChannelCache, SerenityDiscordClient},
    model::message::IncomingMessage,
    service::message::MessagePreviewService,
};

/// Handles message creation by previewing any linked messages.
///
/// Errors are logged here and go no further, so one bad message never affects the
/// handling of later events.
///
/// # Arguments
/// - `channels` - Shared write-through channel cache
/// - `ctx` - Discord context providing the HTTP client and gateway cache
/// - `message` - The newly created message
pub async fn handle_message(channels: Arc<ChannelCache>, ctx: Context, message: Message) {
    let client = SerenityDiscordClient::new(ctx.http.clone(), ctx.cache.clone(), channels);
    let incoming = IncomingMessage::from_message(&message);

    match MessagePreviewService::new(&client)
        .handle_message(&incoming)
        .await
    {
        Ok(0) => {}
        Ok(sent) => tracing::debug!(
            "Sent {} preview(s) for message {} in channel {}",
            sent,
            incoming.message_id,
            incoming.channel_id
        ),
        Err(e) => tracing::error!(
            "Failed to preview links in message {} (channel {}): {}",
            incoming.message_id,
            incoming.channel_id,
            e
        ),
    }
}
