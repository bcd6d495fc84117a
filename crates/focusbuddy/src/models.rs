//! Typed shapes of the documents the focus-timer service keeps.
//!
//! Enumerations travel as their integer codes, so a [`User`] serializes to
//! `{"user_id": 1, "user_status": 2}`. Each enumeration can also render its
//! own lookup document (`{"work": 0, "study": 1, ...}`) via
//! [`Enumeration::table`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use time::OffsetDateTime;

use crate::collection::Collection;

/// An integer code that does not belong to the enumeration it was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i32,
}

/// A closed name to integer-code mapping.
pub trait Enumeration: Copy + Sized + 'static {
    /// Human readable name of the enumeration, used in errors.
    const KIND: &'static str;
    /// Every variant, in code order.
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;

    fn code(self) -> i32;

    fn from_code(code: i32) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.code() == code)
    }

    /// The enumeration as a single lookup document.
    fn table() -> Map<String, Value> {
        Self::VARIANTS
            .iter()
            .map(|v| (v.name().to_string(), Value::from(v.code())))
            .collect()
    }
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $ty:ident, $kind:literal {
            $($variant:ident = $code:literal => $name:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "i32", try_from = "i32")]
        #[repr(i32)]
        pub enum $ty {
            $($variant = $code),+
        }

        impl Enumeration for $ty {
            const KIND: &'static str = $kind;
            const VARIANTS: &'static [Self] = &[$($ty::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            fn code(self) -> i32 {
                self as i32
            }
        }

        impl From<$ty> for i32 {
            fn from(value: $ty) -> i32 {
                value.code()
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = UnknownCode;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or(UnknownCode { kind: $kind, code })
            }
        }
    };
}

code_enum! {
    /// What a user is currently doing.
    UserStatus, "user status" {
        Work = 0 => "work",
        Study = 1 => "study",
        Personal = 2 => "personal",
        Other = 3 => "other",
        Idle = 4 => "idle",
    }
}

code_enum! {
    /// Category of a focus session.
    SessionType, "session type" {
        Work = 0 => "work",
        Study = 1 => "study",
        Personal = 2 => "personal",
        Other = 3 => "other",
    }
}

code_enum! {
    /// Lifecycle position of a focus session.
    SessionStatus, "session status" {
        Upcoming = 0 => "upcoming",
        Undergoing = 1 => "undergoing",
        Paused = 2 => "paused",
        Completed = 3 => "completed",
    }
}

code_enum! {
    /// Which session category a blocked domain applies to. `Permanent` blocks
    /// regardless of the running session.
    BlockListType, "block list type" {
        Work = 0 => "work",
        Study = 1 => "study",
        Personal = 2 => "personal",
        Other = 3 => "other",
        Permanent = 4 => "permanent",
    }
}

/// A record that lives in exactly one collection.
pub trait Record: Serialize + DeserializeOwned {
    const COLLECTION: Collection;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub user_status: UserStatus,
}

impl Record for User {
    const COLLECTION: Collection = Collection::User;
}

/// A scheduled or running focus session. Durations are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusTimer {
    pub user_id: i64,
    pub session_id: i64,
    pub session_status: SessionStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(alias = "duartion")]
    pub duration: i64,
    pub break_time: i64,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub remaining_runtime: i64,
    pub remaining_breaktime: i64,
}

impl Record for FocusTimer {
    const COLLECTION: Collection = Collection::FocusTimer;
}

/// A distracting domain. `icon` is empty when no favicon is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockListEntry {
    pub domain: String,
    pub icon: String,
    pub list_type: BlockListType,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Record for BlockListEntry {
    const COLLECTION: Collection = Collection::BlockList;
}

/// Time spent focusing, per session type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDuration {
    #[serde(rename = "type")]
    pub session_type: SessionType,
    #[serde(alias = "duaration")]
    pub duration: f64,
}

/// Aggregated focus time for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusTimeSummary {
    pub user_id: i64,
    pub daily_total: f64,
    pub weekly_total: f64,
    pub lifetime_total: f64,
    pub daily: Vec<TypeDuration>,
    pub weekly: Vec<TypeDuration>,
}

impl Record for FocusTimeSummary {
    const COLLECTION: Collection = Collection::FocusTimeSummary;
}
