//! The literal FocusBuddy seed records.
//!
//! [`SeedFixture::focus_buddy`] holds the development dataset: one user, the
//! three enumeration tables, one focus timer, a two-entry block list, and one
//! focus-time summary. [`SeedFixture::batches`] renders it into the write
//! operations the seeder performs.

use std::fmt;
use std::str::FromStr;

use focusbuddy::Collection;
use focusbuddy::models::{
    BlockListEntry, BlockListType, Enumeration, FocusTimeSummary, FocusTimer, SessionStatus,
    SessionType, TypeDuration, User, UserStatus,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::macros::datetime;

/// Field names the dataset has always been written with, even though they
/// are misspelled: `(collection, JSON pointer to the object, correct, legacy)`.
const LEGACY_SPELLINGS: [(Collection, &str, &str, &str); 2] = [
    (Collection::FocusTimer, "", "duration", "duartion"),
    (Collection::FocusTimeSummary, "/weekly/1", "duration", "duaration"),
];

/// Whether to write the legacy misspelled field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    /// Field names exactly as the dataset has always had them.
    #[default]
    Verbatim,
    /// `duration` everywhere.
    Corrected,
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spelling::Verbatim => f.write_str("verbatim"),
            Spelling::Corrected => f.write_str("corrected"),
        }
    }
}

impl FromStr for Spelling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(Spelling::Verbatim),
            "corrected" => Ok(Spelling::Corrected),
            other => Err(format!("expected 'verbatim' or 'corrected', got '{other}'")),
        }
    }
}

/// Which insert call a batch maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    One,
    Many,
}

/// One write operation: documents bound for a single collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedBatch {
    pub collection: Collection,
    pub mode: InsertMode,
    pub documents: Vec<Value>,
}

impl SeedBatch {
    fn one(collection: Collection, document: Value) -> Self {
        Self {
            collection,
            mode: InsertMode::One,
            documents: vec![document],
        }
    }

    fn many(collection: Collection, documents: Vec<Value>) -> Self {
        Self {
            collection,
            mode: InsertMode::Many,
            documents,
        }
    }
}

/// The records written by a seed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedFixture {
    pub user: User,
    pub focus_timer: FocusTimer,
    pub block_list: Vec<BlockListEntry>,
    pub focus_time_summary: FocusTimeSummary,
}

impl SeedFixture {
    /// The FocusBuddy development dataset.
    pub fn focus_buddy() -> Self {
        Self {
            user: User {
                user_id: 1,
                user_status: UserStatus::Personal,
            },
            focus_timer: FocusTimer {
                user_id: 1,
                session_id: 1,
                session_status: SessionStatus::Upcoming,
                start_time: datetime!(2025-01-27 04:18:04.725 UTC),
                duration: 3600,
                break_time: 300,
                session_type: SessionType::Study,
                remaining_runtime: 1800,
                remaining_breaktime: 0,
            },
            block_list: vec![
                BlockListEntry {
                    domain: "https://facebook.com".to_string(),
                    icon: "https://static.xx.fbcdn.net/rsrc.php/y1/r/4lCu2zih0ca.svg".to_string(),
                    list_type: BlockListType::Permanent,
                    is_active: true,
                },
                BlockListEntry {
                    domain: "https://youtube.com".to_string(),
                    icon: String::new(),
                    list_type: BlockListType::Personal,
                    is_active: false,
                },
            ],
            focus_time_summary: FocusTimeSummary {
                user_id: 1,
                daily_total: 2.0,
                weekly_total: 7.0,
                lifetime_total: 43.5,
                daily: vec![TypeDuration {
                    session_type: SessionType::Work,
                    duration: 2.0,
                }],
                weekly: vec![
                    TypeDuration {
                        session_type: SessionType::Work,
                        duration: 37.5,
                    },
                    TypeDuration {
                        session_type: SessionType::Personal,
                        duration: 5.0,
                    },
                ],
            },
        }
    }

    /// Renders the write operations in seed order, one batch per collection.
    pub fn batches(&self, spelling: Spelling) -> Result<Vec<SeedBatch>, serde_json::Error> {
        let mut batches = vec![
            SeedBatch::one(Collection::User, serde_json::to_value(&self.user)?),
            SeedBatch::one(Collection::UserStatus, Value::Object(UserStatus::table())),
            SeedBatch::one(Collection::SessionType, Value::Object(SessionType::table())),
            SeedBatch::one(
                Collection::SessionStatus,
                Value::Object(SessionStatus::table()),
            ),
            SeedBatch::one(
                Collection::FocusTimer,
                serde_json::to_value(&self.focus_timer)?,
            ),
            SeedBatch::many(
                Collection::BlockList,
                self.block_list
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<_, _>>()?,
            ),
            SeedBatch::one(
                Collection::FocusTimeSummary,
                serde_json::to_value(&self.focus_time_summary)?,
            ),
        ];

        if spelling == Spelling::Verbatim {
            for batch in &mut batches {
                apply_legacy_spellings(batch);
            }
        }

        Ok(batches)
    }
}

impl Default for SeedFixture {
    fn default() -> Self {
        Self::focus_buddy()
    }
}

fn apply_legacy_spellings(batch: &mut SeedBatch) {
    for (collection, pointer, correct, legacy) in LEGACY_SPELLINGS {
        if collection != batch.collection {
            continue;
        }
        for document in &mut batch.documents {
            let Some(object) = document.pointer_mut(pointer).and_then(Value::as_object_mut) else {
                continue;
            };
            if let Some(value) = object.remove(correct) {
                object.insert(legacy.to_string(), value);
            }
        }
    }
}
