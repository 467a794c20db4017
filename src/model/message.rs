//! Message domain models.
//!
//! `IncomingMessage` is the message that may contain links; `LinkedMessage` is the
//! message a link points at, fetched so it can be previewed.

use chrono::{DateTime, Utc};
use serenity::all::{Attachment, Message, User};

/// A newly created message delivered by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub message_id: u64,
    pub channel_id: u64,
    /// `None` when the message was sent in a direct message channel.
    pub guild_id: Option<u64>,
    pub author_is_bot: bool,
    pub content: String,
}

impl IncomingMessage {
    pub fn from_message(message: &Message) -> Self {
        Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
            author_is_bot: message.author.bot,
            content: message.content.clone(),
        }
    }
}

/// Author attribution shown in a preview footer.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageAuthor {
    /// `name#discriminator`, or just the username for accounts without one.
    pub tag: String,
    /// Avatar URL, falling back to Discord's default avatar.
    pub avatar_url: String,
}

impl MessageAuthor {
    pub fn from_user(user: &User) -> Self {
        Self {
            tag: user.tag(),
            avatar_url: user.face(),
        }
    }
}

/// File attached to a linked message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageAttachment {
    pub filename: String,
    pub url: String,
    pub proxy_url: String,
    /// Only set by Discord for images and videos.
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MessageAttachment {
    pub fn from_attachment(attachment: &Attachment) -> Self {
        Self {
            filename: attachment.filename.clone(),
            url: attachment.url.clone(),
            proxy_url: attachment.proxy_url.clone(),
            width: attachment.width,
            height: attachment.height,
        }
    }

    /// Returns true if the attachment carries non-zero dimensions.
    pub fn is_image(&self) -> bool {
        matches!((self.width, self.height), (Some(width), Some(height)) if width > 0 && height > 0)
    }
}

/// A message fetched because another message linked to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedMessage {
    pub message_id: u64,
    pub channel_id: u64,
    pub author: MessageAuthor,
    /// Message body with mentions rendered as plain names.
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub attachments: Vec<MessageAttachment>,
}

impl LinkedMessage {
    /// Converts a Serenity message at the client boundary.
    ///
    /// # Arguments
    /// - `message` - Message returned by the HTTP API
    /// - `content` - Body to preview; callers pass the mention-safe rendering
    ///
    /// # Returns
    /// - `LinkedMessage` - Domain model ready for preview assembly
    pub fn from_message(message: &Message, content: String) -> Self {
        Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            author: MessageAuthor::from_user(&message.author),
            content,
            timestamp: message.timestamp.to_utc(),
            attachments: message
                .attachments
                .iter()
                .map(MessageAttachment::from_attachment)
                .collect(),
        }
    }
}
