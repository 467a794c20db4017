//! Domain models used by the preview services.
//!
//! Serenity types are converted into these models at the Discord client boundary so the
//! link, access and preview logic can be exercised without a gateway connection.

pub mod channel;
pub mod link;
pub mod message;
pub mod preview;
