//! Discord bot integration.
//!
//! Connects to the Discord gateway with Serenity and runs the preview pipeline for every
//! newly created message. The bot's only output is preview embeds; failures are logged
//! and never reported back to the chat.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populates the channel cache used for access checks
//! - `GUILD_MESSAGES` - Receive messages sent in guild channels
//! - `DIRECT_MESSAGES` - Receive direct messages so they can be ignored explicitly
//! - `MESSAGE_CONTENT` - Read message bodies to find links (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
