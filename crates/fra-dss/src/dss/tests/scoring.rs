use super::common::*;
use crate::dss::{classify_priority, score_scheme, score_village, IndicatorFlags, Priority};

#[test]
fn stressed_village_raises_every_flag() {
    let flags = score_village(&stressed_village());

    assert_eq!(
        flags,
        IndicatorFlags {
            low_water: 1,
            agri: 1,
            degradation: 1,
            poverty: 1,
        }
    );
}

#[test]
fn uniform_weights_score_four_and_rank_high() {
    let village = stressed_village();
    let scheme = scheme_with_weights("ALL", 1.0, 1.0, 1.0, 1.0);

    let score = score_scheme(&village, &scheme);

    assert_eq!(score, 4.0);
    assert_eq!(classify_priority(score), Priority::High);
}

#[test]
fn water_and_poverty_weights_rank_medium() {
    let village = stressed_village();
    let scheme = scheme_with_weights("WP", 1.0, 0.0, 0.0, 1.0);

    let score = score_scheme(&village, &scheme);

    assert_eq!(score, 2.0);
    assert_eq!(classify_priority(score), Priority::Medium);
}

#[test]
fn score_is_weighted_sum_of_flags() {
    let scheme = scheme_with_weights("MIX", 2.0, 0.5, 1.0, 3.0);

    for village in villages() {
        let flags = score_village(&village);
        let expected = 2.0 * f64::from(flags.low_water)
            + 0.5 * f64::from(flags.agri)
            + 1.0 * f64::from(flags.degradation)
            + 3.0 * f64::from(flags.poverty);
        assert_eq!(score_scheme(&village, &scheme), expected, "{}", village.id);
    }
}

#[test]
fn healthy_village_scores_zero_everywhere() {
    let village = healthy_village();
    for scheme in standard_schemes() {
        assert_eq!(score_scheme(&village, &scheme), 0.0, "{}", scheme.id);
    }
}

#[test]
fn eligibility_list_does_not_affect_score() {
    let village = dry_village();
    let plain = scheme_with_weights("JJM", 2.0, 0.0, 0.0, 1.0);
    let mut annotated = plain.clone();
    annotated.eligibility = vec!["Rural households".to_string(), "No tap".to_string()];

    assert_eq!(
        score_scheme(&village, &plain),
        score_scheme(&village, &annotated)
    );
}
