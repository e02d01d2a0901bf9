//! Cardface - headless trading-card face compositor
//!
//! This library turns raw card data into an ordered stack of visual layer
//! descriptors and keeps layer sizing in step with the host container:
//! - Decode loosely-shaped proto payloads into a strict card record
//! - Resolve quality tiers to quality names (legacy and current mappings)
//! - Select the layer stack for a render pass (placeholder, artwork,
//!   rarity/quality overlays, text)
//! - Track host box size and derive 1% responsive sizing units
//!
//! Markup generation, asset loading, and network transport are external
//! collaborators; the crate owns only the compositing decisions and state.

pub mod cli;
pub mod component;
pub mod compose;
pub mod models;
pub mod proto;
pub mod quality;
pub mod sizing;
