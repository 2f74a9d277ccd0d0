//! Data models for Knot
//!
//! UI-independent data structures describing conflicted files as the
//! version control backend reports them.

mod conflict;
mod notification;
mod unmerged;

pub use conflict::{ConflictHunk, HunkState};
pub use notification::{DEFAULT_NOTIFICATION_TTL, Notification, NotificationKind};
pub use unmerged::{UnmergedKind, UnmergedPath};
