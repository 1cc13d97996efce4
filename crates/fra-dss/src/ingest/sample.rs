use crate::dss::{Scheme, SchemeWeights, Village};

use super::Dataset;

/// Demonstration dataset: the five national schemes and a handful of villages
/// spanning the eligibility flags.
pub fn sample_dataset() -> Dataset {
    Dataset {
        villages: sample_villages(),
        schemes: sample_schemes(),
    }
}

fn village(
    id: &str,
    name: &str,
    indicators: (f64, f64, f64, f64),
    water_bodies_count: u32,
    population: u32,
    homestead_count: u32,
) -> Village {
    let (groundwater_index, agri_area_ha, forest_degradation_level, poverty_score) = indicators;
    Village {
        id: id.to_string(),
        name: name.to_string(),
        groundwater_index,
        agri_area_ha,
        forest_degradation_level,
        poverty_score,
        water_bodies_count,
        population,
        homestead_count,
    }
}

fn sample_villages() -> Vec<Village> {
    vec![
        village("MH-GAD-001", "Khairwani", (0.28, 64.0, 0.62, 0.71), 4, 1240, 260),
        village("MH-GAD-002", "Mendha Lekha", (0.46, 82.5, 0.35, 0.58), 7, 980, 190),
        village("MH-GAD-003", "Badgaon", (0.22, 35.0, 0.41, 0.64), 1, 150, 12),
        village("MP-MDL-004", "Sarpanchwadi", (0.72, 22.5, 0.18, 0.31), 9, 960, 210),
        village("OD-KND-005", "Jamguda", (0.35, 48.0, 0.57, 0.83), 3, 610, 118),
        village("TR-DHL-006", "Kalachhara", (0.51, 55.0, 0.66, 0.47), 6, 720, 140),
    ]
}

fn scheme(
    id: &str,
    name: &str,
    eligibility: &[&str],
    evidence_keys: &[&str],
    weights: SchemeWeights,
) -> Scheme {
    Scheme {
        id: id.to_string(),
        name: name.to_string(),
        eligibility: eligibility.iter().map(|item| item.to_string()).collect(),
        evidence_keys: evidence_keys.iter().map(|item| item.to_string()).collect(),
        weights,
    }
}

fn sample_schemes() -> Vec<Scheme> {
    vec![
        scheme(
            "JJM",
            "Jal Jeevan Mission",
            &["Households without tap connection", "Water-stressed villages"],
            &["groundwaterIndex", "waterBodiesCount"],
            SchemeWeights {
                low_water: 2.0,
                agri: 0.0,
                degradation: 0.0,
                poverty: 1.0,
            },
        ),
        scheme(
            "PMKISAN",
            "PM-KISAN",
            &["Landholding farmer families", "FRA title holders"],
            &["agriAreaHa", "povertyScore"],
            SchemeWeights {
                low_water: 0.0,
                agri: 2.0,
                degradation: 0.0,
                poverty: 1.0,
            },
        ),
        scheme(
            "CAMPA",
            "Compensatory Afforestation (CAMPA)",
            &["Degraded forest land", "Community forest resource areas"],
            &["forestDegradationLevel"],
            SchemeWeights {
                low_water: 0.0,
                agri: 0.0,
                degradation: 2.0,
                poverty: 1.0,
            },
        ),
        scheme(
            "MGNREGA-WC",
            "MGNREGA Water Conservation",
            &["Job card holders", "Water conservation potential"],
            &["groundwaterIndex", "agriAreaHa", "waterBodiesCount"],
            SchemeWeights {
                low_water: 1.0,
                agri: 1.0,
                degradation: 0.0,
                poverty: 1.0,
            },
        ),
        scheme(
            "DAJGUA",
            "Dharti Aaba Janjatiya Gram Utkarsh Abhiyan",
            &["Tribal-majority villages"],
            &["povertyScore", "forestDegradationLevel"],
            SchemeWeights {
                low_water: 0.0,
                agri: 1.0,
                degradation: 1.0,
                poverty: 1.0,
            },
        ),
    ]
}
