//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return, with sensible defaults for every field the tests
//! don't care about.
//!
//! # Available Factories
//!
//! - `channel::create_test_guild_channel` - Create Serenity GuildChannel objects
//! - `channel::create_test_private_channel` - Create Serenity PrivateChannel objects
//! - `channel::role_overwrite` / `channel::member_overwrite` - Permission overwrite JSON
//! - `message::create_test_message` - Create Serenity Message objects
//! - `message::create_test_attachment` - Attachment JSON for messages
//! - `user::test_user` - User JSON

pub mod channel;
pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use channel::{
    create_test_guild_channel, create_test_private_channel, member_overwrite, role_overwrite,
};
pub use message::{create_test_attachment, create_test_message};
pub use user::test_user;
