mod common;

use neo_guardian_lib::model::label_for_probability;
use neo_guardian_lib::{ObservationInput, SizeClass};

use common::logistic_assessor;

fn observation(h: f64, velocity: f64) -> ObservationInput {
    ObservationInput {
        absolute_magnitude: h,
        velocity_km_s: velocity,
        ..ObservationInput::default()
    }
}

#[test]
fn default_observation_is_safe_city_level() {
    let assessor = logistic_assessor();
    let result = assessor
        .assess(&ObservationInput::default())
        .expect("assessment succeeds");

    assert!(!result.is_hazardous);
    assert!((result.hazard_probability - 0.148_047_198).abs() < 1e-6);
    assert!((result.estimated_diameter_m - 136.609_012).abs() < 1e-3);
    assert_eq!(result.size_class, SizeClass::CityLevel);
}

#[test]
fn bright_fast_object_is_hazardous() {
    let assessor = logistic_assessor();
    let result = assessor
        .assess(&observation(18.0, 20.0))
        .expect("assessment succeeds");

    assert!(result.is_hazardous);
    assert!((result.hazard_probability - 0.622_459_331).abs() < 1e-6);
    assert!((result.estimated_diameter_m - 861.944_596).abs() < 1e-3);
    assert_eq!(result.size_class, SizeClass::PotentiallyHazardous);
}

#[test]
fn very_bright_object_is_planet_killer() {
    let result = logistic_assessor()
        .assess(&observation(12.0, 15.0))
        .expect("assessment succeeds");
    assert_eq!(result.size_class, SizeClass::PlanetKiller);
    assert!(result.is_hazardous);
}

#[test]
fn assessment_is_deterministic() {
    let assessor = logistic_assessor();
    let input = observation(20.3, 27.5);
    let first = assessor.assess(&input).expect("first assessment");
    let second = assessor.assess(&input).expect("second assessment");
    assert_eq!(first, second);
}

#[test]
fn label_and_probability_agree_across_input_grid() {
    let assessor = logistic_assessor();
    for h in [10.0, 14.0, 18.0, 20.0, 22.0, 26.0, 30.0] {
        for velocity in [0.0, 10.0, 40.0] {
            for moid in [0.0, 0.01, 0.05, 0.3] {
                let input = ObservationInput {
                    absolute_magnitude: h,
                    velocity_km_s: velocity,
                    orbit_intersection_au: moid,
                    ..ObservationInput::default()
                };
                let result = assessor.assess(&input).expect("assessment succeeds");
                assert!((0.0..=1.0).contains(&result.hazard_probability));
                assert_eq!(
                    result.is_hazardous,
                    label_for_probability(result.hazard_probability) == 1,
                    "label/probability disagreement for {input:?}"
                );
            }
        }
    }
}

#[test]
fn diameter_decreases_with_magnitude() {
    let assessor = logistic_assessor();
    let mut previous = f64::INFINITY;
    let mut h = 10.0;
    while h <= 30.0 {
        let result = assessor
            .assess(&observation(h, 15.0))
            .expect("assessment succeeds");
        assert!(
            result.estimated_diameter_m < previous,
            "diameter did not shrink at H={h}"
        );
        previous = result.estimated_diameter_m;
        h += 0.5;
    }
}
