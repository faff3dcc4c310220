use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Unique identifier for a quest
pub type QuestId = u64;

/// Kind of task a quest asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestType {
    /// Scan the official QR code at the stadium
    ScanQr,
    Quiz,
    /// Guess a match result
    Prediction,
    Social,
    /// Check in at an event
    Attendance,
}

impl QuestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestType::ScanQr => "scan_qr",
            QuestType::Quiz => "quiz",
            QuestType::Prediction => "prediction",
            QuestType::Social => "social",
            QuestType::Attendance => "attendance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestType::ScanQr => "Scanner QR",
            QuestType::Quiz => "Quiz",
            QuestType::Prediction => "Palpite",
            QuestType::Social => "Social",
            QuestType::Attendance => "Presença",
        }
    }
}

/// Lifecycle status set by the quest operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestStatus {
    Active,
    Paused,
    Ended,
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestStatus::Active => "active",
            QuestStatus::Paused => "paused",
            QuestStatus::Ended => "ended",
        };
        write!(f, "{}", s)
    }
}

/// A completable task that yields XP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub quest_type: QuestType,
    pub xp_reward: u64,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: QuestStatus,
    pub is_repeatable: bool,
    pub max_completions: u32,
    /// Always <= max_completions
    pub current_completions: u32,
    /// Opaque proof reference checked by the verifier (QR payload hash etc.)
    #[serde(default)]
    pub verification_data: String,
}

impl Quest {
    /// True once the completion cap has been reached
    pub fn is_full(&self) -> bool {
        self.current_completions >= self.max_completions
    }

    /// Completions still available before the cap
    pub fn remaining_completions(&self) -> u32 {
        self.max_completions.saturating_sub(self.current_completions)
    }
}

/// Input for creating a quest through the admin surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuest {
    pub title: String,
    pub description: String,
    pub quest_type: QuestType,
    pub xp_reward: u64,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub is_repeatable: bool,
    pub max_completions: u32,
    #[serde(default)]
    pub verification_data: String,
}
