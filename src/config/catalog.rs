//! Catalog entries as written in the config file, and the demo seed catalog

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{Quest, QuestId, QuestStatus, QuestType, Reward, RewardId, RewardType, Tier};

/// A quest in `[[quests]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestEntry {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub quest_type: QuestType,
    pub xp_reward: u64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default = "default_quest_status")]
    pub status: QuestStatus,
    #[serde(default)]
    pub is_repeatable: bool,
    pub max_completions: u32,
    #[serde(default)]
    pub current_completions: u32,
    #[serde(default)]
    pub verification_data: String,
}

fn default_quest_status() -> QuestStatus {
    QuestStatus::Active
}

impl QuestEntry {
    pub fn to_quest(&self) -> Quest {
        Quest {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            quest_type: self.quest_type,
            xp_reward: self.xp_reward,
            start_time: self.starts_at.timestamp_millis(),
            end_time: self.ends_at.timestamp_millis(),
            status: self.status,
            is_repeatable: self.is_repeatable,
            max_completions: self.max_completions,
            current_completions: self.current_completions,
            verification_data: self.verification_data.clone(),
        }
    }
}

/// A reward in `[[rewards]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub id: RewardId,
    pub title: String,
    pub description: String,
    pub reward_type: RewardType,
    pub xp_required: u64,
    pub min_tier_required: Tier,
    pub total_supply: u32,
    #[serde(default)]
    pub claimed_supply: u32,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub metadata_uri: String,
    #[serde(default)]
    pub redeem_code: String,
}

fn default_true() -> bool {
    true
}

impl RewardEntry {
    pub fn to_reward(&self) -> Reward {
        Reward {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            reward_type: self.reward_type,
            xp_required: self.xp_required,
            min_tier_required: self.min_tier_required,
            total_supply: self.total_supply,
            claimed_supply: self.claimed_supply,
            valid_from: self.valid_from.timestamp_millis(),
            valid_until: self.valid_until.timestamp_millis(),
            is_active: self.is_active,
            metadata_uri: self.metadata_uri.clone(),
            redeem_code: self.redeem_code.clone(),
        }
    }
}

/// Demo quests, timed around `now`
pub fn seed_quests(now: DateTime<Utc>) -> Vec<QuestEntry> {
    vec![
        QuestEntry {
            id: 1,
            title: "Escanear no Estádio".to_string(),
            description: "Escaneie o QR code oficial no Morumbi durante o jogo".to_string(),
            quest_type: QuestType::ScanQr,
            xp_reward: 100,
            starts_at: now - Duration::days(1),
            ends_at: now + Duration::days(1),
            status: QuestStatus::Active,
            is_repeatable: false,
            max_completions: 1000,
            current_completions: 156,
            verification_data: "0x1234567890abcdef".to_string(),
        },
        QuestEntry {
            id: 2,
            title: "Palpite do Placar".to_string(),
            description: "Qual será o placar de SPFC x Palmeiras?".to_string(),
            quest_type: QuestType::Prediction,
            xp_reward: 75,
            starts_at: now - Duration::hours(1),
            ends_at: now + Duration::hours(24),
            status: QuestStatus::Active,
            is_repeatable: false,
            max_completions: 500,
            current_completions: 89,
            verification_data: "0xabcdef1234567890".to_string(),
        },
        QuestEntry {
            id: 3,
            title: "Quiz Relâmpago".to_string(),
            description: "Pergunta sobre a história do SPFC".to_string(),
            quest_type: QuestType::Quiz,
            xp_reward: 50,
            starts_at: now - Duration::hours(2),
            ends_at: now + Duration::minutes(45),
            status: QuestStatus::Active,
            is_repeatable: true,
            max_completions: 1000,
            current_completions: 234,
            verification_data: "0x567890abcdef1234".to_string(),
        },
    ]
}

/// Demo rewards, timed around `now`
pub fn seed_rewards(now: DateTime<Utc>) -> Vec<RewardEntry> {
    vec![
        RewardEntry {
            id: 1,
            title: "20% OFF Loja Oficial".to_string(),
            description: "Desconto em qualquer produto da loja oficial do SPFC".to_string(),
            reward_type: RewardType::DiscountCoupon,
            xp_required: 100,
            min_tier_required: Tier::Bronze,
            total_supply: 1000,
            claimed_supply: 234,
            valid_from: now - Duration::days(1),
            valid_until: now + Duration::days(90),
            is_active: true,
            metadata_uri: "https://tricolorpass.com/metadata/discount1".to_string(),
            redeem_code: "0x1234567890abcdef".to_string(),
        },
        RewardEntry {
            id: 2,
            title: "Experiência VIP".to_string(),
            description: "Tour exclusivo pelo CT da Barra Funda".to_string(),
            reward_type: RewardType::Experience,
            xp_required: 500,
            min_tier_required: Tier::Silver,
            total_supply: 50,
            claimed_supply: 12,
            valid_from: now - Duration::days(1),
            valid_until: now + Duration::days(60),
            is_active: true,
            metadata_uri: "https://tricolorpass.com/metadata/vip1".to_string(),
            redeem_code: "0xabcdef1234567890".to_string(),
        },
        RewardEntry {
            id: 3,
            title: "Ingresso Setor Especial".to_string(),
            description: "Ingresso para arquibancada especial no próximo jogo".to_string(),
            reward_type: RewardType::Merchandise,
            xp_required: 300,
            min_tier_required: Tier::Bronze,
            total_supply: 100,
            claimed_supply: 45,
            valid_from: now - Duration::days(1),
            valid_until: now + Duration::days(20),
            is_active: true,
            metadata_uri: "https://tricolorpass.com/metadata/ticket1".to_string(),
            redeem_code: "0x567890abcdef1234".to_string(),
        },
    ]
}
