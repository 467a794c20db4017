//! Channel domain models used by the access check.
//!
//! Provides a reduced view of a Discord channel: identity, NSFW flag and the permission
//! overwrites that decide who can read it. Handles conversion from Serenity's
//! `GuildChannel` and `Channel` types.

use serenity::all::{Channel, ChannelType, GuildChannel, PermissionOverwriteType, Permissions};
use std::collections::HashSet;

/// Whether a channel is a direct message or lives inside a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Direct,
    Guild,
}

/// Who a permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteSubject {
    Role(u64),
    Member(u64),
}

/// A single permission overwrite on a channel, reduced to its deny mask.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelOverwrite {
    pub subject: OverwriteSubject,
    pub deny: Permissions,
}

impl ChannelOverwrite {
    /// Returns true if this overwrite denies reading the channel or its history.
    pub fn denies_read(&self) -> bool {
        self.deny.contains(Permissions::READ_MESSAGE_HISTORY)
            || self.deny.contains(Permissions::VIEW_CHANNEL)
    }
}

/// Discord channel as seen by the preview access check.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewChannel {
    /// Discord channel ID as a u64.
    pub channel_id: u64,
    /// Discord guild ID as a u64, `None` for direct messages.
    pub guild_id: Option<u64>,
    /// Channel display name without the leading `#`.
    pub name: String,
    pub kind: ChannelKind,
    /// Age-restricted channel flag.
    pub nsfw: bool,
    /// Permission overwrites in the order Discord returned them.
    pub overwrites: Vec<ChannelOverwrite>,
}

impl PreviewChannel {
    /// Converts a Serenity guild channel at the client boundary.
    ///
    /// Overwrite types unknown to this version of Serenity are dropped.
    ///
    /// # Arguments
    /// - `channel` - Guild channel from the cache or the HTTP API
    ///
    /// # Returns
    /// - `PreviewChannel` - Domain model with role and member overwrites
    pub fn from_guild_channel(channel: &GuildChannel) -> Self {
        let overwrites = channel
            .permission_overwrites
            .iter()
            .filter_map(|overwrite| {
                let subject = match overwrite.kind {
                    PermissionOverwriteType::Role(role_id) => OverwriteSubject::Role(role_id.get()),
                    PermissionOverwriteType::Member(user_id) => {
                        OverwriteSubject::Member(user_id.get())
                    }
                    _ => return None,
                };

                Some(ChannelOverwrite {
                    subject,
                    deny: overwrite.deny,
                })
            })
            .collect();

        let kind = if channel.kind == ChannelType::Private {
            ChannelKind::Direct
        } else {
            ChannelKind::Guild
        };

        Self {
            channel_id: channel.id.get(),
            guild_id: Some(channel.guild_id.get()),
            name: channel.name.clone(),
            kind,
            nsfw: channel.nsfw,
            overwrites,
        }
    }

    /// Converts any Serenity channel returned by the HTTP API.
    ///
    /// # Returns
    /// - `Some(PreviewChannel)` - Guild or private channel
    /// - `None` - Channel variant this bot does not understand
    pub fn from_channel(channel: &Channel) -> Option<Self> {
        match channel {
            Channel::Guild(guild_channel) => Some(Self::from_guild_channel(guild_channel)),
            Channel::Private(private_channel) => Some(Self {
                channel_id: private_channel.id.get(),
                guild_id: None,
                name: private_channel.recipient.name.clone(),
                kind: ChannelKind::Direct,
                nsfw: false,
                overwrites: Vec::new(),
            }),
            _ => None,
        }
    }

    /// Channel name as shown in preview footers, e.g. `#general`.
    pub fn display_name(&self) -> String {
        format!("#{}", self.name)
    }

    /// Roles this channel's overwrites bar from reading it.
    pub fn denied_roles(&self) -> RoleDenialSet {
        RoleDenialSet::from_overwrites(&self.overwrites)
    }
}

/// Set of role IDs denied read access to a channel.
///
/// Only role-scoped overwrites count. Member overwrites describe individual users and
/// say nothing about who else can see a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDenialSet(HashSet<u64>);

impl RoleDenialSet {
    pub fn from_overwrites(overwrites: &[ChannelOverwrite]) -> Self {
        Self(
            overwrites
                .iter()
                .filter(|overwrite| overwrite.denies_read())
                .filter_map(|overwrite| match overwrite.subject {
                    OverwriteSubject::Role(role_id) => Some(role_id),
                    OverwriteSubject::Member(_) => None,
                })
                .collect(),
        )
    }

    pub fn contains(&self, role_id: u64) -> bool {
        self.0.contains(&role_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `other` denies every role this set denies.
    ///
    /// Equal sets, or this set being a strict subset of `other`.
    pub fn is_covered_by(&self, other: &RoleDenialSet) -> bool {
        self == other || (self.0.len() < other.0.len() && self.0.is_subset(&other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        create_test_guild_channel, create_test_private_channel, role_overwrite,
        member_overwrite,
    };

    const VIEW: u64 = 1 << 10;
    const HISTORY: u64 = 1 << 16;
    const SEND: u64 = 1 << 11;

    /// Tests converting a Serenity guild channel with mixed overwrites.
    ///
    /// Verifies ids, name, NSFW flag and that both role and member overwrites are kept
    /// in order with their deny masks.
    ///
    /// Expected: PreviewChannel with two overwrites
    #[test]
    fn converts_guild_channel() {
        let channel = create_test_guild_channel(
            200,
            100,
            "general",
            true,
            vec![role_overwrite(300, HISTORY), member_overwrite(400, VIEW)],
        );

        let preview = PreviewChannel::from_guild_channel(&channel);

        assert_eq!(preview.channel_id, 200);
        assert_eq!(preview.guild_id, Some(100));
        assert_eq!(preview.name, "general");
        assert_eq!(preview.display_name(), "#general");
        assert_eq!(preview.kind, ChannelKind::Guild);
        assert!(preview.nsfw);
        assert_eq!(preview.overwrites.len(), 2);
        assert_eq!(preview.overwrites[0].subject, OverwriteSubject::Role(300));
        assert_eq!(preview.overwrites[1].subject, OverwriteSubject::Member(400));
        assert!(preview.overwrites[1].deny.contains(Permissions::VIEW_CHANNEL));
    }

    /// Tests converting a private channel returned by the HTTP API.
    ///
    /// Expected: Direct channel with no guild and no overwrites
    #[test]
    fn converts_private_channel() {
        let channel = Channel::Private(create_test_private_channel(500, 600, "someone"));

        let preview = PreviewChannel::from_channel(&channel).unwrap();

        assert_eq!(preview.channel_id, 500);
        assert_eq!(preview.kind, ChannelKind::Direct);
        assert_eq!(preview.guild_id, None);
        assert!(preview.overwrites.is_empty());
    }

    /// Tests which overwrites end up in the role denial set.
    ///
    /// Only role overwrites denying view or history count; member overwrites and
    /// unrelated denials are ignored.
    ///
    /// Expected: Set containing roles 1 and 2 only
    #[test]
    fn collects_read_denied_roles() {
        let channel = create_test_guild_channel(
            200,
            100,
            "staff",
            false,
            vec![
                role_overwrite(1, VIEW),
                role_overwrite(2, HISTORY | SEND),
                role_overwrite(3, SEND),
                member_overwrite(4, VIEW),
            ],
        );

        let denied = PreviewChannel::from_guild_channel(&channel).denied_roles();

        assert_eq!(denied.len(), 2);
        assert!(denied.contains(1));
        assert!(denied.contains(2));
        assert!(!denied.contains(3));
        assert!(!denied.contains(4));
    }

    fn roles(ids: &[u64]) -> RoleDenialSet {
        RoleDenialSet(ids.iter().copied().collect())
    }

    #[test]
    fn equal_sets_are_covered() {
        assert!(roles(&[]).is_covered_by(&roles(&[])));
        assert!(roles(&[1, 2]).is_covered_by(&roles(&[2, 1])));
    }

    #[test]
    fn strict_subset_is_covered() {
        assert!(roles(&[1]).is_covered_by(&roles(&[1, 2])));
        assert!(roles(&[]).is_covered_by(&roles(&[7])));
    }

    #[test]
    fn superset_and_disjoint_are_not_covered() {
        assert!(!roles(&[1, 2]).is_covered_by(&roles(&[1])));
        assert!(!roles(&[1]).is_covered_by(&roles(&[2])));
        assert!(!roles(&[1, 2]).is_covered_by(&roles(&[2, 3])));
    }
}
