use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serenity::all::{CreateEmbed, Permissions};
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use crate::{
    data::discord::DiscordClient,
    error::AppError,
    model::{
        channel::{ChannelKind, ChannelOverwrite, OverwriteSubject, PreviewChannel},
        link::MessageLinkReference,
        message::{LinkedMessage, MessageAttachment, MessageAuthor},
    },
};


/// In-memory `DiscordClient` recording every call made against it.
///
/// `cached` plays the role of the local cache, `remote` the channels the API knows about
/// and `messages` the result of a fetch around a given message id.
#[derive(Default)]
struct FakeDiscordClient {
    cached: Mutex<HashMap<u64, PreviewChannel>>,
    remote: HashMap<u64, PreviewChannel>,
    messages: HashMap<u64, Vec<LinkedMessage>>,
    failing_message_ids: HashSet<u64>,
    fail_sends: bool,
    channel_fetches: Mutex<Vec<u64>>,
    message_fetches: Mutex<Vec<(u64, u64, u8)>>,
    sent: Mutex<Vec<(u64, CreateEmbed)>>,
}

impl FakeDiscordClient {
    fn new() -> Self {
        Self::default()
    }

    fn with_cached_channel(self, channel: PreviewChannel) -> Self {
        self.cached
            .lock()
            .unwrap()
            .insert(channel.channel_id, channel);
        self
    }

    fn with_remote_channel(mut self, channel: PreviewChannel) -> Self {
        self.remote.insert(channel.channel_id, channel);
        self
    }

    fn with_messages_around(mut self, message_id: u64, messages: Vec<LinkedMessage>) -> Self {
        self.messages.insert(message_id, messages);
        self
    }

    fn with_failing_message_fetch(mut self, message_id: u64) -> Self {
        self.failing_message_ids.insert(message_id);
        self
    }

    fn with_failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    fn is_cached(&self, channel_id: u64) -> bool {
        self.cached.lock().unwrap().contains_key(&channel_id)
    }

    fn channel_fetches(&self) -> Vec<u64> {
        self.channel_fetches.lock().unwrap().clone()
    }

    fn message_fetches(&self) -> Vec<(u64, u64, u8)> {
        self.message_fetches.lock().unwrap().clone()
    }

    fn sent(&self) -> Vec<(u64, CreateEmbed)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordClient for FakeDiscordClient {
    fn cached_channel(&self, channel_id: u64) -> Option<PreviewChannel> {
        self.cached.lock().unwrap().get(&channel_id).cloned()
    }

    fn cache_channel(&self, channel: PreviewChannel) {
        self.cached
            .lock()
            .unwrap()
            .entry(channel.channel_id)
            .or_insert(channel);
    }

    async fn fetch_channel(&self, channel_id: u64) -> Result<PreviewChannel, AppError> {
        self.channel_fetches.lock().unwrap().push(channel_id);

        self.remote
            .get(&channel_id)
            .cloned()
            .ok_or_else(|| serenity::Error::Other("Unknown Channel").into())
    }

    async fn fetch_messages_around(
        &self,
        channel_id: u64,
        message_id: u64,
        limit: u8,
    ) -> Result<Vec<LinkedMessage>, AppError> {
        self.message_fetches
            .lock()
            .unwrap()
            .push((channel_id, message_id, limit));

        if self.failing_message_ids.contains(&message_id) {
            return Err(serenity::Error::Other("Missing Access").into());
        }

        Ok(self.messages.get(&message_id).cloned().unwrap_or_default())
    }

    async fn send_embed(&self, channel_id: u64, embed: CreateEmbed) -> Result<(), AppError> {
        if self.fail_sends {
            return Err(serenity::Error::Other("Missing Permissions").into());
        }

        self.sent.lock().unwrap().push((channel_id, embed));
        Ok(())
    }
}

fn text_channel(channel_id: u64, overwrites: Vec<ChannelOverwrite>) -> PreviewChannel {
    PreviewChannel {
        channel_id,
        guild_id: Some(1),
        name: format!("channel-{}", channel_id),
        kind: ChannelKind::Guild,
        nsfw: false,
        overwrites,
    }
}

fn nsfw_channel(channel_id: u64, overwrites: Vec<ChannelOverwrite>) -> PreviewChannel {
    PreviewChannel {
        nsfw: true,
        ..text_channel(channel_id, overwrites)
    }
}

fn dm_channel(channel_id: u64) -> PreviewChannel {
    PreviewChannel {
        channel_id,
        guild_id: None,
        name: "someone".to_string(),
        kind: ChannelKind::Direct,
        nsfw: false,
        overwrites: Vec::new(),
    }
}

fn role_denies_view(role_id: u64) -> ChannelOverwrite {
    ChannelOverwrite {
        subject: OverwriteSubject::Role(role_id),
        deny: Permissions::VIEW_CHANNEL,
    }
}

fn role_denies_history(role_id: u64) -> ChannelOverwrite {
    ChannelOverwrite {
        subject: OverwriteSubject::Role(role_id),
        deny: Permissions::READ_MESSAGE_HISTORY,
    }
}

fn member_denies_view(user_id: u64) -> ChannelOverwrite {
    ChannelOverwrite {
        subject: OverwriteSubject::Member(user_id),
        deny: Permissions::VIEW_CHANNEL,
    }
}

fn attachment(filename: &str, url: &str, width: u32, height: u32) -> MessageAttachment {
    MessageAttachment {
        filename: filename.to_string(),
        url: url.to_string(),
        proxy_url: format!("{}-proxy", url),
        width: Some(width),
        height: Some(height),
    }
}

fn linked_message(
    message_id: u64,
    channel_id: u64,
    content: &str,
    attachments: Vec<MessageAttachment>,
) -> LinkedMessage {
    LinkedMessage {
        message_id,
        channel_id,
        author: MessageAuthor {
            tag: "tester".to_string(),
            avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        },
        content: content.to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(678),
        attachments,
    }
}

fn link_reference(guild_id: &str, channel_id: &str, message_id: &str) -> MessageLinkReference {
    MessageLinkReference {
        link: format!(
            "https://discord.com/channels/{}/{}/{}",
            guild_id, channel_id, message_id
        ),
        guild_id: guild_id.to_string(),
        channel_id: channel_id.to_string(),
        message_id: message_id.to_string(),
    }
}
