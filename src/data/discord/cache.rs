//! Write-through channel cache.
//!
//! Serenity's gateway cache only knows about channels it has received events for and
//! cannot be written to directly, so channels fetched over HTTP are kept here instead.
//! The map is shared between event handlers and only ever grows.

use dashmap::DashMap;

use crate::model::channel::PreviewChannel;

#[derive(Debug, Default)]
pub struct ChannelCache {
    channels: DashMap<u64, PreviewChannel>,
}

impl ChannelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, channel_id: u64) -> Option<PreviewChannel> {
        self.channels
            .get(&channel_id)
            .map(|entry| entry.value().clone())
    }

    /// Adds a channel unless one with the same id is already cached.
    pub fn insert(&self, channel: PreviewChannel) {
        self.channels.entry(channel.channel_id).or_insert(channel);
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
