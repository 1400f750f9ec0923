//! Platform-level identity shared across bounded contexts.
//!
//! The chat platform addresses guilds, users, roles, and channels with
//! numeric snowflake identifiers. These newtypes prevent accidental mixing
//! of identifier kinds and validate the range constraints imposed by the
//! `PostgreSQL` schema. [`Caller`] carries the identity the command
//! dispatcher attaches to each incoming command.

mod caller;
mod ids;

pub use caller::Caller;
pub use ids::{ChannelId, GuildId, PlatformIdError, RoleId, UserId};
