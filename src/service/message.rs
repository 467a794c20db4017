//! Message preview orchestration.
//!
//! For every new message: skip bots and direct messages, extract links into the same
//! guild, then for each link fetch the target message, check that disclosing it in the
//! current channel is safe, and post the preview embed.

use crate::{
    data::discord::DiscordClient,
    error::AppError,
    model::{
        channel::ChannelKind,
        link::MessageLinkReference,
        message::{IncomingMessage, LinkedMessage},
    },
    service::{
        access::AccessService,
        link::{extract_message_links, filter_same_guild},
        preview::{assemble_preview, builder::build_preview_embed},
        MAX_PREVIEWS_PER_MESSAGE,
    },
    util::parse::parse_snowflake,
};

pub struct MessagePreviewService<'a, C: DiscordClient> {
    client: &'a C,
}

impl<'a, C: DiscordClient> MessagePreviewService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Posts previews for the message links contained in a new message.
    ///
    /// Links whose target message no longer exists are skipped. A failure while
    /// fetching a message or checking access stops processing of the remaining links
    /// and is returned to the caller; failures to send an embed are logged and ignored.
    ///
    /// # Arguments
    /// - `message` - The newly created message
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of previews sent
    /// - `Err(AppError)` - Link extraction, message fetch or access check failed
    pub async fn handle_message(&self, message: &IncomingMessage) -> Result<usize, AppError> {
        if message.author_is_bot {
            return Ok(0);
        }

        if self.comes_from_dm(message).await {
            return Ok(0);
        }

        let Some(guild_id) = message.guild_id else {
            return Ok(0);
        };

        let links = filter_same_guild(
            extract_message_links(&message.content)?,
            &guild_id.to_string(),
        );

        let dest_channel_id = message.channel_id.to_string();
        let mut sent = 0;

        for link in links.iter().take(MAX_PREVIEWS_PER_MESSAGE) {
            let Some(linked) = self.fetch_linked_message(link).await? else {
                tracing::debug!("Linked message {} not found, skipping", link.link);
                continue;
            };

            let channel_name = self
                .client
                .cached_channel(linked.channel_id)
                .map(|channel| channel.display_name());
            let preview = assemble_preview(link, &linked, channel_name.as_deref());

            let allowed = AccessService::new(self.client)
                .may_disclose(&dest_channel_id, &linked.channel_id.to_string())
                .await?;

            if !allowed {
                tracing::debug!(
                    "Not previewing message {} from channel {} in channel {}",
                    linked.message_id,
                    linked.channel_id,
                    message.channel_id
                );
                continue;
            }

            let embed = build_preview_embed(&preview)?;

            if let Err(e) = self.client.send_embed(message.channel_id, embed).await {
                tracing::warn!(
                    "Failed to send preview to channel {}: {}",
                    message.channel_id,
                    e
                );
                continue;
            }

            sent += 1;
        }

        Ok(sent)
    }

    /// Returns true if the message was sent in a direct message channel.
    ///
    /// Checks the cache, then the API, and finally falls back to whether the message
    /// carries a guild id at all.
    async fn comes_from_dm(&self, message: &IncomingMessage) -> bool {
        if let Some(channel) = self.client.cached_channel(message.channel_id) {
            return channel.kind == ChannelKind::Direct;
        }

        match self.client.fetch_channel(message.channel_id).await {
            Ok(channel) => channel.kind == ChannelKind::Direct,
            Err(e) => {
                tracing::debug!(
                    "Failed to fetch channel {} for DM check: {}",
                    message.channel_id,
                    e
                );
                message.guild_id.is_none()
            }
        }
    }

    /// Fetches exactly the message a link points at.
    ///
    /// # Returns
    /// - `Ok(Some(LinkedMessage))` - The message exists
    /// - `Ok(None)` - The ids in the link are not snowflakes, or Discord returned no
    ///   message or a different one
    /// - `Err(AppError)` - The fetch itself failed
    async fn fetch_linked_message(
        &self,
        link: &MessageLinkReference,
    ) -> Result<Option<LinkedMessage>, AppError> {
        let (Ok(channel_id), Ok(message_id)) = (
            parse_snowflake(&link.channel_id),
            parse_snowflake(&link.message_id),
        ) else {
            return Ok(None);
        };

        let messages = self
            .client
            .fetch_messages_around(channel_id, message_id, 1)
            .await?;

        Ok(messages
            .into_iter()
            .next()
            .filter(|message| message.message_id == message_id))
    }
}
