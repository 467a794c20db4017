//! Cross-channel disclosure check.
//!
//! A preview copies part of a message into another channel. That is only safe if
//! everyone who can read the destination could already read the source, which this
//! module approximates from the two channels' NSFW flags and role overwrites.

use crate::{
    data::discord::DiscordClient,
    error::{preview::PreviewError, AppError},
    model::channel::PreviewChannel,
    util::parse::parse_snowflake,
};

pub struct AccessService<'a, C: DiscordClient> {
    client: &'a C,
}

impl<'a, C: DiscordClient> AccessService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Determines whether a message from the source channel may be previewed in the
    /// destination channel.
    ///
    /// Channel ids are validated before any lookup. The source channel is resolved
    /// first, then the destination, each from the cache or else from the API with the
    /// fetched channel written back into the cache.
    ///
    /// # Arguments
    /// - `dest_channel_id` - Channel the preview would be posted in
    /// - `src_channel_id` - Channel the linked message lives in
    ///
    /// # Returns
    /// - `Ok(true)` - The preview may be shown
    /// - `Ok(false)` - Showing the preview could leak the message
    /// - `Err(PreviewError::EmptyChannelId)` - Either id is empty
    /// - `Err(PreviewError::InvalidChannelId)` - Either id is not a snowflake
    /// - `Err(PreviewError::ChannelLookup)` - A channel could not be fetched
    pub async fn may_disclose(
        &self,
        dest_channel_id: &str,
        src_channel_id: &str,
    ) -> Result<bool, AppError> {
        if dest_channel_id.is_empty() || src_channel_id.is_empty() {
            return Err(PreviewError::EmptyChannelId.into());
        }

        if dest_channel_id == src_channel_id {
            return Ok(true);
        }

        let src_channel_id = validate_channel_id(src_channel_id)?;
        let dest_channel_id = validate_channel_id(dest_channel_id)?;

        let src = self.resolve_channel(src_channel_id).await?;
        let dest = self.resolve_channel(dest_channel_id).await?;

        Ok(is_disclosure_safe(&dest, &src))
    }

    async fn resolve_channel(&self, channel_id: u64) -> Result<PreviewChannel, AppError> {
        if let Some(channel) = self.client.cached_channel(channel_id) {
            return Ok(channel);
        }

        let channel = self
            .client
            .fetch_channel(channel_id)
            .await
            .map_err(|e| PreviewError::ChannelLookup {
                channel_id,
                source: Box::new(e),
            })?;

        tracing::debug!("Caching channel {} after fetch", channel_id);
        self.client.cache_channel(channel.clone());

        Ok(channel)
    }
}

fn validate_channel_id(value: &str) -> Result<u64, PreviewError> {
    parse_snowflake(value).map_err(|e| PreviewError::InvalidChannelId {
        value: value.to_string(),
        source: e,
    })
}

/// Decides disclosure between two already resolved channels.
///
/// - Same channel: always allowed.
/// - NSFW source into a non-NSFW destination: never allowed.
/// - Otherwise allowed only when the roles denied reading the source are exactly the
///   roles denied in the destination, or a strict subset of them.
pub fn is_disclosure_safe(dest: &PreviewChannel, src: &PreviewChannel) -> bool {
    if dest.channel_id == src.channel_id {
        return true;
    }

    if src.nsfw && !dest.nsfw {
        return false;
    }

    src.denied_roles().is_covered_by(&dest.denied_roles())
}
