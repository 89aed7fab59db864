use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── HabitCategory ───────────────────────────────────────────────────────────

/// Fixed habit categories. Serialized as lowercase strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Health,
    Learning,
    Productivity,
    Mindfulness,
    Other,
}

impl HabitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Learning => "learning",
            Self::Productivity => "productivity",
            Self::Mindfulness => "mindfulness",
            Self::Other => "other",
        }
    }

    /// Parse from a request string; `None` for values outside the fixed set.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "health" => Some(Self::Health),
            "learning" => Some(Self::Learning),
            "productivity" => Some(Self::Productivity),
            "mindfulness" => Some(Self::Mindfulness),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

// ─── HabitSchedule ───────────────────────────────────────────────────────────

/// Fixed schedule kinds. Stored on the habit but never gates any operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitSchedule {
    Daily,
    Weekdays,
    Weekend,
}

impl HabitSchedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekdays => "weekdays",
            Self::Weekend => "weekend",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekdays" => Some(Self::Weekdays),
            "weekend" => Some(Self::Weekend),
            _ => None,
        }
    }
}

// ─── Habit ───────────────────────────────────────────────────────────────────

/// The sole persistent entity. Lives only in process memory; the table is
/// cleared and reseeded on every restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// UUID v4, generated at creation. Never reused, even after delete.
    pub id: String,
    pub name: String,
    pub category: HabitCategory,
    pub schedule: HabitSchedule,
    /// Free-form time string ("07:00"). Stored verbatim, never acted upon.
    pub reminder_time: Option<String>,
    /// Completion counter. +1 per complete call — no calendar logic,
    /// no reset, no upper bound.
    pub streak: u64,
    pub created_at: DateTime<Utc>,
}
