use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Named collections the service keeps documents in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    User,
    UserStatus,
    SessionType,
    SessionStatus,
    FocusTimer,
    BlockList,
    FocusTimeSummary,
}

impl Collection {
    /// All collections, in seed order.
    pub const ALL: [Collection; 7] = [
        Collection::User,
        Collection::UserStatus,
        Collection::SessionType,
        Collection::SessionStatus,
        Collection::FocusTimer,
        Collection::BlockList,
        Collection::FocusTimeSummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::User => "user",
            Collection::UserStatus => "user_status",
            Collection::SessionType => "session_type",
            Collection::SessionStatus => "session_status",
            Collection::FocusTimer => "focus_timer",
            Collection::BlockList => "block_list",
            Collection::FocusTimeSummary => "focus_time_summary",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StoreError::UnknownCollection(s.to_string()))
    }
}
