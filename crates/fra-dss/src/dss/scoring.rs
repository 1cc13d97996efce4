use super::domain::{IndicatorFlags, Priority, Scheme, Village};

/// Groundwater index below this marks a water-stressed village.
pub const LOW_WATER_THRESHOLD: f64 = 0.4;
/// Hectares under agriculture at or above this mark an agricultural village.
pub const AGRI_AREA_THRESHOLD_HA: f64 = 50.0;
pub const DEGRADATION_THRESHOLD: f64 = 0.5;
pub const POVERTY_THRESHOLD: f64 = 0.5;

pub const HIGH_PRIORITY_MIN_SCORE: f64 = 3.0;
pub const MEDIUM_PRIORITY_SCORE: f64 = 2.0;

// NaN fails every comparison below, so a NaN indicator never raises its flag.

pub(crate) fn is_low_water(village: &Village) -> bool {
    village.groundwater_index < LOW_WATER_THRESHOLD
}

pub(crate) fn has_agriculture(village: &Village) -> bool {
    village.agri_area_ha >= AGRI_AREA_THRESHOLD_HA
}

pub(crate) fn is_degraded(village: &Village) -> bool {
    village.forest_degradation_level >= DEGRADATION_THRESHOLD
}

pub(crate) fn is_high_poverty(village: &Village) -> bool {
    village.poverty_score >= POVERTY_THRESHOLD
}

/// Threshold each continuous indicator into a 0/1 flag.
pub fn score_village(village: &Village) -> IndicatorFlags {
    IndicatorFlags {
        low_water: u8::from(is_low_water(village)),
        agri: u8::from(has_agriculture(village)),
        degradation: u8::from(is_degraded(village)),
        poverty: u8::from(is_high_poverty(village)),
    }
}

/// Weighted sum of the village's flags under the scheme's weights.
pub fn score_scheme(village: &Village, scheme: &Scheme) -> f64 {
    let flags = score_village(village);
    let weights = &scheme.weights;

    weights.low_water * f64::from(flags.low_water)
        + weights.agri * f64::from(flags.agri)
        + weights.degradation * f64::from(flags.degradation)
        + weights.poverty * f64::from(flags.poverty)
}

/// Map a score onto a priority tier.
///
/// Medium requires a score of exactly 2; anything strictly between 2 and 3 is Low.
#[allow(clippy::float_cmp)]
pub fn classify_priority(score: f64) -> Priority {
    if score >= HIGH_PRIORITY_MIN_SCORE {
        Priority::High
    } else if score == MEDIUM_PRIORITY_SCORE {
        Priority::Medium
    } else {
        Priority::Low
    }
}
