pub mod cache;
pub mod client;

pub use cache::ChannelCache;
pub use client::SerenityDiscordClient;

use async_trait::async_trait;
use serenity::all::CreateEmbed;

use crate::{
    error::AppError,
    model::{channel::PreviewChannel, message::LinkedMessage},
};

/// Discord operations needed to preview linked messages.
///
/// Channel lookups come in two flavours: `cached_channel` never touches the network,
/// `fetch_channel` always does. Callers that fetch are expected to hand the result back
/// through `cache_channel` so later lookups are served locally.
#[async_trait]
pub trait DiscordClient: Send + Sync {
    /// Looks up a channel in the local cache only.
    fn cached_channel(&self, channel_id: u64) -> Option<PreviewChannel>;

    /// Admits a fetched channel into the local cache.
    ///
    /// Entries are only ever added. Admitting the same channel twice is harmless.
    fn cache_channel(&self, channel: PreviewChannel);

    /// Fetches a channel from the Discord API.
    async fn fetch_channel(&self, channel_id: u64) -> Result<PreviewChannel, AppError>;

    /// Fetches up to `limit` messages around `message_id` in a channel.
    ///
    /// The returned messages are not guaranteed to include `message_id` itself.
    async fn fetch_messages_around(
        &self,
        channel_id: u64,
        message_id: u64,
        limit: u8,
    ) -> Result<Vec<LinkedMessage>, AppError>;

    /// Posts a message containing a single embed.
    async fn send_embed(&self, channel_id: u64, embed: CreateEmbed) -> Result<(), AppError>;
}
