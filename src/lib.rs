//! Discord bot that previews linked messages.
//!
//! When someone posts a link to another message in the same guild, the bot replies with
//! an embed showing who sent the linked message, where, a shortened copy of its text,
//! its first image and the names of its other attachments. A preview is only posted if
//! the channel it would appear in is at least as restricted as the channel the message
//! came from.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity client setup and gateway event handlers
//! - **Service Layer** (`service/`) - Link extraction, access check, preview assembly
//!   and the per-message pipeline
//! - **Data Layer** (`data/`) - The `DiscordClient` trait and its Serenity implementation
//! - **Model Layer** (`model/`) - Domain models converted from Serenity types
//! - **Error Layer** (`error/`) - Application error types
//!
//! Supporting modules: `config` (environment configuration), `startup` (tracing setup)
//! and `util` (id parsing).

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
