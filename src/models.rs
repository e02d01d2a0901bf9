//! Data model for the strict card record

use serde::{Deserialize, Serialize};

/// The canonical record describing one card's game attributes.
///
/// Every string field defaults to empty and the stat fields to `None`, so the
/// record is always fully populated and downstream consumers never branch on
/// key presence. Instances are replaced wholesale on each acquisition cycle,
/// never field-mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardProtoData {
    pub id: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub effect: String,
    pub name: String,
    pub rarity: String,
    pub god: String,
    pub set: String,
    pub tribe: String,
    pub mana: String,
    pub attack: Option<i64>,
    pub health: Option<i64>,
    pub art_id: String,
}

/// Gameplay rarity that routes rendering through the mythic overlay branch.
pub const MYTHIC_RARITY: &str = "mythic";

impl CardProtoData {
    /// Whether this card renders through the mythic overlay branch.
    pub fn is_mythic(&self) -> bool {
        self.rarity == MYTHIC_RARITY
    }
}
