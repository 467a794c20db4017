use async_trait::async_trait;
use serenity::all::{Cache, ChannelId, CreateEmbed, CreateMessage, GetMessages, Http, MessageId};
use std::sync::Arc;

use crate::{
    data::discord::{ChannelCache, DiscordClient},
    error::AppError,
    model::{channel::PreviewChannel, message::LinkedMessage},
};

/// `DiscordClient` backed by Serenity's HTTP client and gateway cache.
///
/// Cheap to construct; the bot builds one per message event from the event context and
/// the shared `ChannelCache`.
pub struct SerenityDiscordClient {
    http: Arc<Http>,
    cache: Arc<Cache>,
    channels: Arc<ChannelCache>,
}

impl SerenityDiscordClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client for API requests
    /// - `cache` - Serenity gateway cache, consulted first for channel lookups
    /// - `channels` - Shared write-through cache for channels fetched over HTTP
    pub fn new(http: Arc<Http>, cache: Arc<Cache>, channels: Arc<ChannelCache>) -> Self {
        Self {
            http,
            cache,
            channels,
        }
    }
}

#[async_trait]
impl DiscordClient for SerenityDiscordClient {
    fn cached_channel(&self, channel_id: u64) -> Option<PreviewChannel> {
        if let Some(channel) = self.cache.channel(ChannelId::new(channel_id)) {
            return Some(PreviewChannel::from_guild_channel(&channel));
        }

        self.channels.get(channel_id)
    }

    fn cache_channel(&self, channel: PreviewChannel) {
        self.channels.insert(channel);
    }

    async fn fetch_channel(&self, channel_id: u64) -> Result<PreviewChannel, AppError> {
        let channel = self.http.get_channel(ChannelId::new(channel_id)).await?;

        PreviewChannel::from_channel(&channel)
            .ok_or_else(|| serenity::Error::Other("Unsupported channel type").into())
    }

    async fn fetch_messages_around(
        &self,
        channel_id: u64,
        message_id: u64,
        limit: u8,
    ) -> Result<Vec<LinkedMessage>, AppError> {
        let builder = GetMessages::new()
            .around(MessageId::new(message_id))
            .limit(limit);

        let messages = ChannelId::new(channel_id)
            .messages(&self.http, builder)
            .await?;

        Ok(messages
            .iter()
            .map(|message| LinkedMessage::from_message(message, message.content_safe(&self.cache)))
            .collect())
    }

    async fn send_embed(&self, channel_id: u64, embed: CreateEmbed) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}
