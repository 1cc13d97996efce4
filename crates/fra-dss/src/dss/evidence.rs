use std::collections::BTreeSet;

use rust_decimal::{Decimal, RoundingStrategy};

use super::domain::{EvidenceKey, Scheme, Village};
use super::scoring::{is_degraded, is_high_poverty, is_low_water};

/// Evidence lines for the indicators the scheme asks about, in fixed check order.
///
/// Keys the engine does not recognize are skipped, and duplicate keys yield one line.
pub fn build_evidence(village: &Village, scheme: &Scheme) -> Vec<String> {
    let requested: BTreeSet<EvidenceKey> = scheme
        .evidence_keys
        .iter()
        .filter_map(|key| key.parse().ok())
        .collect();

    // BTreeSet iterates in declaration order of EvidenceKey, which is the check order.
    requested
        .into_iter()
        .map(|key| evidence_line(key, village))
        .collect()
}

fn evidence_line(key: EvidenceKey, village: &Village) -> String {
    match key {
        EvidenceKey::GroundwaterIndex => {
            let status = if is_low_water(village) { "Low" } else { "Adequate" };
            format!(
                "Groundwater Index: {} ({status})",
                fixed(village.groundwater_index, 2)
            )
        }
        EvidenceKey::AgriAreaHa => format!("Agricultural Area: {} ha", village.agri_area_ha),
        EvidenceKey::ForestDegradationLevel => {
            let level = if is_degraded(village) { "High" } else { "Moderate" };
            format!(
                "Forest Degradation: {}% ({level})",
                percent(village.forest_degradation_level)
            )
        }
        EvidenceKey::PovertyScore => {
            let level = if is_high_poverty(village) {
                "High"
            } else {
                "Moderate"
            };
            format!("Poverty Score: {}% ({level})", percent(village.poverty_score))
        }
        EvidenceKey::WaterBodiesCount => match water_bodies_per_hundred(village) {
            Some(ratio) => format!(
                "Water Bodies: {} ({ratio}% per 100 households)",
                village.water_bodies_count
            ),
            None => format!(
                "Water Bodies: {} (no households recorded)",
                village.water_bodies_count
            ),
        },
    }
}

/// Render `value` with `decimals` digits. Ties in the exact binary value round
/// away from zero, so 0.125 gives "0.13" while 0.235 (stored just below) gives "0.23".
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact
                .round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.decimals$}")
        }
        None => format!("{value:.decimals$}"),
    }
}

/// A 0..1 fraction as a whole-number percentage.
pub(crate) fn percent(fraction: f64) -> String {
    fixed(fraction * 100.0, 0)
}

fn water_bodies_per_hundred(village: &Village) -> Option<String> {
    if village.homestead_count == 0 {
        return None;
    }

    let ratio = f64::from(village.water_bodies_count) / f64::from(village.homestead_count);
    Some(fixed(ratio * 100.0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_halves_up() {
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(0.3, 2), "0.30");
        assert_eq!(fixed(62.5, 0), "63");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(1.0, 2), "1.00");
    }

    #[test]
    fn fixed_rounds_the_stored_binary_value() {
        assert_eq!(fixed(0.235, 2), "0.23");
        assert_eq!(fixed(0.015, 2), "0.01");
        assert_eq!(fixed(0.045, 2), "0.04");
        assert_eq!(fixed(1.005, 2), "1.00");
    }

    #[test]
    fn percent_drops_binary_noise() {
        assert_eq!(percent(0.6), "60");
        assert_eq!(percent(0.125), "13");
        assert_eq!(percent(0.0), "0");
    }
}
