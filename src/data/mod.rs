//! Access to Discord.
//!
//! The services never talk to Serenity directly. They go through the `DiscordClient`
//! trait defined here, which the bot implements on top of Serenity's HTTP client and
//! gateway cache and which tests replace with an in-memory fake.

pub mod discord;
