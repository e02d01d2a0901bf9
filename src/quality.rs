//! Quality tier resolution
//!
//! A card's finish grade (plain, gold, diamond, ...) is independent of its
//! gameplay rarity. Two fixed mappings exist: the legacy 8-tier table and the
//! current 5-tier table, which is looked up reverse-order and 1-based (tier 1
//! is the last entry). Resolution is a pure function of the tier and the
//! mapping flag.

use thiserror::Error;

/// Legacy quality table, indices 0..=7. The duplicate "plain" at indices 0
/// and 1 is intentional and must be preserved.
pub const LEGACY_QUALITIES: [&str; 8] =
    ["plain", "plain", "bronze", "iron", "meteorite", "shadow", "gold", "diamond"];

/// Current quality table. Tier 1 maps to the last entry ("plain"), tier 5 to
/// the first ("diamond"); tier 0 is not a valid index.
pub const QUALITIES: [&str; 5] = ["diamond", "gold", "shadow", "meteorite", "plain"];

/// Error when a quality tier falls outside the active mapping's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quality tier {quality} out of range for the {mapping} mapping (valid {min}..={max})",
        mapping = if *.legacy { "legacy" } else { "current" })]
pub struct InvalidQualityIndex {
    pub quality: u8,
    pub legacy: bool,
    pub min: u8,
    pub max: u8,
}

/// Resolve a quality tier to its name.
///
/// Legacy mode accepts tiers 0..=7 (direct index); current mode accepts
/// 1..=5 (reverse-order, 1-based). Anything else is [`InvalidQualityIndex`] -
/// an out-of-range slot is never read.
pub fn resolve_quality_name(quality: u8, use_legacy: bool) -> Result<&'static str, InvalidQualityIndex> {
    if use_legacy {
        LEGACY_QUALITIES
            .get(quality as usize)
            .copied()
            .ok_or(InvalidQualityIndex { quality, legacy: true, min: 0, max: 7 })
    } else {
        match quality {
            1..=5 => Ok(QUALITIES[QUALITIES.len() - quality as usize]),
            _ => Err(InvalidQualityIndex { quality, legacy: false, min: 1, max: 5 }),
        }
    }
}

/// Resolve a quality tier, clamping out-of-range tiers to the nearest valid
/// one. Debug builds assert validity first so development fails fast;
/// release builds render the nearest tier instead of nothing.
pub fn resolve_quality_name_clamped(quality: u8, use_legacy: bool) -> &'static str {
    debug_assert!(
        resolve_quality_name(quality, use_legacy).is_ok(),
        "quality tier {quality} out of range (legacy={use_legacy})"
    );
    let clamped = if use_legacy { quality.min(7) } else { quality.clamp(1, 5) };
    resolve_quality_name(clamped, use_legacy).unwrap_or("plain")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_mapping_is_a_direct_index() {
        for q in 0..=7u8 {
            assert_eq!(resolve_quality_name(q, true).unwrap(), LEGACY_QUALITIES[q as usize]);
        }
    }

    #[test]
    fn test_legacy_plain_duplicate() {
        assert_eq!(resolve_quality_name(0, true).unwrap(), "plain");
        assert_eq!(resolve_quality_name(1, true).unwrap(), "plain");
    }

    #[test]
    fn test_current_mapping_is_reverse_one_based() {
        assert_eq!(resolve_quality_name(1, false).unwrap(), "plain");
        assert_eq!(resolve_quality_name(2, false).unwrap(), "meteorite");
        assert_eq!(resolve_quality_name(3, false).unwrap(), "shadow");
        assert_eq!(resolve_quality_name(4, false).unwrap(), "gold");
        assert_eq!(resolve_quality_name(5, false).unwrap(), "diamond");
    }

    #[test]
    fn test_current_mapping_rejects_tier_zero() {
        let err = resolve_quality_name(0, false).unwrap_err();
        assert_eq!(err, InvalidQualityIndex { quality: 0, legacy: false, min: 1, max: 5 });
    }

    #[test]
    fn test_out_of_range_tiers_rejected() {
        assert!(resolve_quality_name(8, true).is_err());
        assert!(resolve_quality_name(6, false).is_err());
        assert!(resolve_quality_name(7, false).is_err());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_clamp_policy() {
        assert_eq!(resolve_quality_name_clamped(0, false), "plain");
        assert_eq!(resolve_quality_name_clamped(7, false), "diamond");
        assert_eq!(resolve_quality_name_clamped(200, true), "diamond");
    }

    #[test]
    fn test_clamped_matches_strict_in_range() {
        for q in 0..=7u8 {
            assert_eq!(resolve_quality_name_clamped(q, true), resolve_quality_name(q, true).unwrap());
        }
        for q in 1..=5u8 {
            assert_eq!(
                resolve_quality_name_clamped(q, false),
                resolve_quality_name(q, false).unwrap()
            );
        }
    }
}
