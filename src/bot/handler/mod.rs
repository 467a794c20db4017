use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::data::discord::ChannelCache;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Channels fetched over HTTP, shared by every message event
    pub channels: Arc<ChannelCache>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(ChannelCache::new()),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self.channels.clone(), ctx, message).await;
    }
}
