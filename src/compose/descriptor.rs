//! Layer descriptors handed to the template-rendering collaborator

use serde::Serialize;

use crate::models::CardProtoData;
use crate::sizing::SizeUnits;

/// A parameterized instruction for one visual layer of the card face.
///
/// Descriptors are emitted bottom-up: the first entry renders underneath the
/// rest. The template collaborator turns each into markup; the core never
/// interprets the `responsive_sizes` hint, it only forwards it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layer", rename_all = "snake_case")]
pub enum LayerDescriptor {
    /// Shown alone while card data is being acquired.
    Placeholder,
    /// Shown alone when acquisition failed. Distinct from the placeholder so
    /// downstream can tell "not yet loaded" from "failed to load".
    LoadFailed { message: String },
    /// The card's base artwork.
    BaseArt { art_id: String, responsive_sizes: String },
    /// Overlay set used when the card's gameplay rarity is mythic.
    MythicOverlay { data: CardProtoData, responsive_sizes: String },
    /// Overlay for every non-mythic rarity, parameterized by finish quality.
    QualityOverlay { quality_name: String, data: CardProtoData, responsive_sizes: String },
    /// Text overlay, sized proportionally to the host via the size units.
    Text { size_units: SizeUnits, data: CardProtoData, card_set: String },
}
