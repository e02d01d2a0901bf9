//! Layer composition - selecting the card face's visual layer stack

mod descriptor;
mod select;

// Re-export public API
pub use descriptor::LayerDescriptor;
pub use select::{select_layers, LoadPhase, RenderState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardProtoData;
    use crate::sizing::SizeUnits;

    fn ready_state<'a>(
        data: &'a CardProtoData,
        quality_name: &'a str,
        sizes: &'a str,
    ) -> RenderState<'a> {
        RenderState {
            phase: &LoadPhase::Ready,
            data,
            quality_name,
            size_units: SizeUnits { ch: 3.0, cw: 2.0 },
            responsive_sizes: sizes,
        }
    }

    fn mythic_card() -> CardProtoData {
        CardProtoData {
            name: "Demogorgon".to_string(),
            rarity: "mythic".to_string(),
            set: "core".to_string(),
            art_id: "C9000".to_string(),
            ..Default::default()
        }
    }

    fn rare_card() -> CardProtoData {
        CardProtoData {
            name: "Ember Oni".to_string(),
            rarity: "rare".to_string(),
            set: "genesis".to_string(),
            art_id: "C1287".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_emits_exactly_one_placeholder() {
        let data = mythic_card();
        let mut state = ready_state(&data, "gold", "20vw");
        let phase = LoadPhase::Loading;
        state.phase = &phase;

        let layers = select_layers(&state);
        // Rarity, quality and sizing are irrelevant while loading.
        assert_eq!(layers, vec![LayerDescriptor::Placeholder]);
    }

    #[test]
    fn test_failed_emits_exactly_one_failure_layer() {
        let data = rare_card();
        let mut state = ready_state(&data, "plain", "");
        let phase = LoadPhase::Failed("fetch failed".to_string());
        state.phase = &phase;

        let layers = select_layers(&state);
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0], LayerDescriptor::LoadFailed { message: "fetch failed".to_string() });
    }

    #[test]
    fn test_mythic_branch_layer_order() {
        let data = mythic_card();
        let layers = select_layers(&ready_state(&data, "plain", "20vw"));

        assert_eq!(layers.len(), 3);
        assert_eq!(
            layers[0],
            LayerDescriptor::BaseArt {
                art_id: "C9000".to_string(),
                responsive_sizes: "20vw".to_string()
            }
        );
        assert_eq!(
            layers[1],
            LayerDescriptor::MythicOverlay {
                data: data.clone(),
                responsive_sizes: "20vw".to_string()
            }
        );
        assert_eq!(
            layers[2],
            LayerDescriptor::Text {
                size_units: SizeUnits { ch: 3.0, cw: 2.0 },
                data: data.clone(),
                card_set: "core".to_string()
            }
        );
    }

    #[test]
    fn test_non_mythic_branch_layer_order() {
        let data = rare_card();
        let layers = select_layers(&ready_state(&data, "meteorite", "15vw"));

        assert_eq!(layers.len(), 3);
        assert!(matches!(layers[0], LayerDescriptor::BaseArt { .. }));
        assert_eq!(
            layers[1],
            LayerDescriptor::QualityOverlay {
                quality_name: "meteorite".to_string(),
                data: data.clone(),
                responsive_sizes: "15vw".to_string()
            }
        );
        assert!(matches!(&layers[2], LayerDescriptor::Text { card_set, .. } if card_set == "genesis"));
    }

    #[test]
    fn test_empty_rarity_takes_quality_branch() {
        // A freshly defaulted record is not mythic.
        let data = CardProtoData::default();
        let layers = select_layers(&ready_state(&data, "plain", ""));
        assert!(matches!(layers[1], LayerDescriptor::QualityOverlay { .. }));
    }

    #[test]
    fn test_selection_is_recomputed_not_cached() {
        // Same state twice yields equal stacks; a rarity change between
        // passes flips the overlay branch immediately.
        let mut data = rare_card();
        let first = select_layers(&ready_state(&data, "plain", ""));
        let again = select_layers(&ready_state(&data, "plain", ""));
        assert_eq!(first, again);

        data.rarity = "mythic".to_string();
        let flipped = select_layers(&ready_state(&data, "plain", ""));
        assert!(matches!(flipped[1], LayerDescriptor::MythicOverlay { .. }));
    }

    #[test]
    fn test_text_layer_carries_current_size_units() {
        let data = rare_card();
        let mut state = ready_state(&data, "plain", "");
        state.size_units = SizeUnits { ch: 4.0, cw: 3.0 };
        let layers = select_layers(&state);
        assert!(matches!(
            layers[2],
            LayerDescriptor::Text { size_units: SizeUnits { ch, cw }, .. } if ch == 4.0 && cw == 3.0
        ));
    }

    #[test]
    fn test_descriptor_json_shape() {
        let json = serde_json::to_string(&LayerDescriptor::Placeholder).unwrap();
        assert_eq!(json, r#"{"layer":"placeholder"}"#);

        let json = serde_json::to_string(&LayerDescriptor::BaseArt {
            art_id: "C1".to_string(),
            responsive_sizes: "20vw".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""layer":"base_art""#));
        assert!(json.contains(r#""art_id":"C1""#));
    }
}
