//! Link Preview Test Utils
//!
//! Provides shared testing utilities for the link preview bot. The factories build
//! Serenity model objects (channels, messages, attachments, users) by deserializing
//! JSON, simulating what Discord's API would return, so conversion code can be tested
//! without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_channel, role_overwrite};
//!
//! #[test]
//! fn converts_channel() {
//!     let channel = create_test_guild_channel(2, 1, "general", false, vec![role_overwrite(3, 1 << 10)]);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
