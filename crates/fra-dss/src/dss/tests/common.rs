use crate::dss::domain::{Scheme, SchemeWeights, Village};

/// Village raising every eligibility flag; matches the documented worked example.
pub(crate) fn stressed_village() -> Village {
    Village {
        id: "V-KHW".to_string(),
        name: "Khairwani".to_string(),
        groundwater_index: 0.3,
        agri_area_ha: 60.0,
        forest_degradation_level: 0.6,
        poverty_score: 0.7,
        water_bodies_count: 4,
        population: 420,
        homestead_count: 80,
    }
}

/// Village raising no eligibility flag.
pub(crate) fn healthy_village() -> Village {
    Village {
        id: "V-SRP".to_string(),
        name: "Sarpanchwadi".to_string(),
        groundwater_index: 0.72,
        agri_area_ha: 22.5,
        forest_degradation_level: 0.18,
        poverty_score: 0.31,
        water_bodies_count: 9,
        population: 960,
        homestead_count: 210,
    }
}

/// Water stressed and poor, but little farmland and intact forest.
pub(crate) fn dry_village() -> Village {
    Village {
        id: "V-BDG".to_string(),
        name: "Badgaon".to_string(),
        groundwater_index: 0.22,
        agri_area_ha: 35.0,
        forest_degradation_level: 0.41,
        poverty_score: 0.64,
        water_bodies_count: 1,
        population: 150,
        homestead_count: 12,
    }
}

pub(crate) fn scheme_with_weights(
    id: &str,
    low_water: f64,
    agri: f64,
    degradation: f64,
    poverty: f64,
) -> Scheme {
    Scheme {
        id: id.to_string(),
        name: format!("{id} scheme"),
        eligibility: Vec::new(),
        evidence_keys: Vec::new(),
        weights: SchemeWeights {
            low_water,
            agri,
            degradation,
            poverty,
        },
    }
}

pub(crate) fn with_evidence_keys(mut scheme: Scheme, keys: &[&str]) -> Scheme {
    scheme.evidence_keys = keys.iter().map(|key| key.to_string()).collect();
    scheme
}

/// The five nationally known schemes with weights as configured in the dashboard dataset.
pub(crate) fn standard_schemes() -> Vec<Scheme> {
    vec![
        with_evidence_keys(
            scheme_with_weights("JJM", 2.0, 0.0, 0.0, 1.0),
            &["groundwaterIndex", "waterBodiesCount"],
        ),
        with_evidence_keys(
            scheme_with_weights("PMKISAN", 0.0, 2.0, 0.0, 1.0),
            &["agriAreaHa", "povertyScore"],
        ),
        with_evidence_keys(
            scheme_with_weights("CAMPA", 0.0, 0.0, 2.0, 0.0),
            &["forestDegradationLevel"],
        ),
        with_evidence_keys(
            scheme_with_weights("MGNREGA-WC", 1.0, 1.0, 0.0, 1.0),
            &["groundwaterIndex", "agriAreaHa", "povertyScore"],
        ),
        with_evidence_keys(
            scheme_with_weights("DAJGUA", 0.0, 0.0, 1.0, 1.0),
            &["povertyScore", "forestDegradationLevel"],
        ),
    ]
}

pub(crate) fn villages() -> Vec<Village> {
    vec![stressed_village(), healthy_village(), dry_village()]
}
