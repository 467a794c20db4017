//! Error types for the preview bot.
//!
//! `AppError` is the top-level error type returned by services and the Discord client
//! layer. Domain-specific errors are grouped into their own enums and converted into
//! `AppError` via `#[from]`. None of these errors are ever surfaced to chat users: the
//! event handlers log them and move on to the next event.

pub mod config;
pub mod internal;
pub mod preview;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, preview::PreviewError};

/// Top-level application error type.
///
/// Aggregates every error that can occur while the bot starts up or processes a message.
/// Most variants use `#[from]` for automatic conversion with the `?` operator.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Unexpected internal failure such as an unparseable snowflake.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Failure while extracting links or deciding whether a preview may be shown.
    #[error(transparent)]
    PreviewErr(#[from] PreviewError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
