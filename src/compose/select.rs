//! Layer selection - a pure render function over current state

use crate::models::CardProtoData;
use crate::sizing::SizeUnits;

use super::descriptor::LayerDescriptor;

/// Where the component is in its data-acquisition cycle.
///
/// `Loading` transitions to `Ready` or `Failed` exactly once per cycle, the
/// instant normalization (or the transport) settles; only a fresh acquisition
/// trigger re-enters `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Everything layer selection reads. Borrowed from the orchestrator per
/// render pass; selection holds no state of its own.
#[derive(Debug, Clone)]
pub struct RenderState<'a> {
    pub phase: &'a LoadPhase,
    pub data: &'a CardProtoData,
    pub quality_name: &'a str,
    pub size_units: SizeUnits,
    pub responsive_sizes: &'a str,
}

/// Select the ordered layer stack for one render pass.
///
/// Recomputed fresh on every call - nothing is cached, so a rarity change in
/// freshly loaded data is reflected immediately:
/// - `Loading` emits exactly the placeholder layer,
/// - `Failed` emits exactly the failure layer,
/// - `Ready` emits base artwork, then the mythic or quality overlay, then
///   the text layer.
pub fn select_layers(state: &RenderState) -> Vec<LayerDescriptor> {
    match state.phase {
        LoadPhase::Loading => vec![LayerDescriptor::Placeholder],
        LoadPhase::Failed(message) => {
            vec![LayerDescriptor::LoadFailed { message: message.clone() }]
        }
        LoadPhase::Ready => {
            let overlay = if state.data.is_mythic() {
                LayerDescriptor::MythicOverlay {
                    data: state.data.clone(),
                    responsive_sizes: state.responsive_sizes.to_string(),
                }
            } else {
                LayerDescriptor::QualityOverlay {
                    quality_name: state.quality_name.to_string(),
                    data: state.data.clone(),
                    responsive_sizes: state.responsive_sizes.to_string(),
                }
            };
            vec![
                LayerDescriptor::BaseArt {
                    art_id: state.data.art_id.clone(),
                    responsive_sizes: state.responsive_sizes.to_string(),
                },
                overlay,
                LayerDescriptor::Text {
                    size_units: state.size_units,
                    data: state.data.clone(),
                    card_set: state.data.set.clone(),
                },
            ]
        }
    }
}
