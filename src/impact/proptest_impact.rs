//! Property-based tests for the impact calculator using proptest.
//!
//! These verify the calculator's contract invariants across wide input
//! ranges rather than single spot values.

use proptest::prelude::*;

use super::{compute_impact, severity, ImpactParameters};
use crate::types::{Composition, ImpactSurface, MitigationStrategy};

fn arb_composition() -> impl Strategy<Value = Composition> {
    prop_oneof![
        Just(Composition::Rocky),
        Just(Composition::Metallic),
        Just(Composition::Icy),
    ]
}

fn arb_mitigation() -> impl Strategy<Value = MitigationStrategy> {
    prop_oneof![
        Just(MitigationStrategy::None),
        Just(MitigationStrategy::Kinetic),
        Just(MitigationStrategy::Gravity),
        Just(MitigationStrategy::Nuclear),
        Just(MitigationStrategy::Laser),
    ]
}

fn arb_surface() -> impl Strategy<Value = ImpactSurface> {
    prop_oneof![Just(ImpactSurface::Land), Just(ImpactSurface::Ocean)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Two invocations with identical inputs return identical outputs,
    /// floats bit-exact and labels string-equal.
    #[test]
    fn prop_deterministic(
        size in 0.001f64..10.0,
        velocity in 1.0f64..80.0,
        angle in 1.0f64..90.0,
        composition in arb_composition(),
        mitigation in arb_mitigation(),
        surface in arb_surface(),
    ) {
        let params = ImpactParameters {
            size_km: size,
            velocity_km_s: velocity,
            angle_deg: angle,
            composition,
            mitigation,
            surface,
        };
        prop_assert_eq!(compute_impact(&params), compute_impact(&params));
    }

    /// Holding everything else fixed, a larger body delivers strictly more
    /// energy, digs a strictly larger crater, and blasts a strictly larger
    /// shockwave radius.
    #[test]
    fn prop_monotonic_in_size(
        size in 0.01f64..9.0,
        growth in 1.01f64..2.0,
        velocity in 1.0f64..80.0,
        angle in 1.0f64..90.0,
    ) {
        let small = compute_impact(&ImpactParameters {
            size_km: size,
            velocity_km_s: velocity,
            angle_deg: angle,
            ..ImpactParameters::default()
        });
        let large = compute_impact(&ImpactParameters {
            size_km: size * growth,
            velocity_km_s: velocity,
            angle_deg: angle,
            ..ImpactParameters::default()
        });

        prop_assert!(large.energy_joules > small.energy_joules);
        prop_assert!(large.crater_diameter_km > small.crater_diameter_km);
        prop_assert!(large.shockwave_radius_km > small.shockwave_radius_km);
    }

    /// Holding everything else fixed, a faster body delivers strictly more
    /// energy and a strictly larger shockwave radius.
    #[test]
    fn prop_monotonic_in_velocity(
        size in 0.01f64..10.0,
        velocity in 1.0f64..70.0,
        boost in 1.01f64..2.0,
    ) {
        let slow = compute_impact(&ImpactParameters {
            size_km: size,
            velocity_km_s: velocity,
            ..ImpactParameters::default()
        });
        let fast = compute_impact(&ImpactParameters {
            size_km: size,
            velocity_km_s: velocity * boost,
            ..ImpactParameters::default()
        });

        prop_assert!(fast.energy_joules > slow.energy_joules);
        prop_assert!(fast.shockwave_radius_km > slow.shockwave_radius_km);
    }

    /// The five strategies order post-mitigation energy exactly by their
    /// factors: nuclear < kinetic < gravity < laser < none.
    #[test]
    fn prop_mitigation_ordering(
        size in 0.01f64..10.0,
        velocity in 1.0f64..80.0,
    ) {
        let energy = |mitigation| {
            compute_impact(&ImpactParameters {
                size_km: size,
                velocity_km_s: velocity,
                mitigation,
                ..ImpactParameters::default()
            })
            .energy_joules
        };

        let nuclear = energy(MitigationStrategy::Nuclear);
        let kinetic = energy(MitigationStrategy::Kinetic);
        let gravity = energy(MitigationStrategy::Gravity);
        let laser = energy(MitigationStrategy::Laser);
        let none = energy(MitigationStrategy::None);

        prop_assert!(
            nuclear < kinetic && kinetic < gravity && gravity < laser && laser < none,
            "Ordering violated: {nuclear:e} {kinetic:e} {gravity:e} {laser:e} {none:e}"
        );
    }

    /// Seismic magnitude never exceeds 10 for any positive energy.
    #[test]
    fn prop_magnitude_clamp(
        size in 0.001f64..10.0,
        velocity in 1.0f64..80.0,
        composition in arb_composition(),
    ) {
        let result = compute_impact(&ImpactParameters {
            size_km: size,
            velocity_km_s: velocity,
            composition,
            ..ImpactParameters::default()
        });
        prop_assert!(
            result.seismic_magnitude <= 10.0,
            "Magnitude {} exceeds the clamp",
            result.seismic_magnitude
        );
    }

    /// A land surface always yields the land tsunami label, regardless of
    /// every other input.
    #[test]
    fn prop_land_tsunami_gating(
        size in 0.001f64..10.0,
        velocity in 1.0f64..80.0,
        angle in 1.0f64..90.0,
        mitigation in arb_mitigation(),
        composition in arb_composition(),
    ) {
        let result = compute_impact(&ImpactParameters {
            size_km: size,
            velocity_km_s: velocity,
            angle_deg: angle,
            composition,
            mitigation,
            surface: ImpactSurface::Land,
        });
        prop_assert_eq!(result.tsunami_risk, severity::TSUNAMI_LAND);
    }

    /// Ocean impacts always produce one of the six tsunami labels.
    #[test]
    fn prop_ocean_tsunami_label_in_contract_set(
        size in 0.001f64..10.0,
        velocity in 1.0f64..80.0,
        angle in 1.0f64..90.0,
    ) {
        let result = compute_impact(&ImpactParameters {
            size_km: size,
            velocity_km_s: velocity,
            angle_deg: angle,
            surface: ImpactSurface::Ocean,
            ..ImpactParameters::default()
        });
        let labels = [
            severity::TSUNAMI_NONE,
            severity::TSUNAMI_LOCAL_WAVES,
            severity::TSUNAMI_LOW,
            severity::TSUNAMI_MODERATE,
            severity::TSUNAMI_SEVERE,
            severity::TSUNAMI_CATASTROPHIC,
        ];
        prop_assert!(
            labels.contains(&result.tsunami_risk),
            "Unexpected tsunami label {:?}",
            result.tsunami_risk
        );
    }

    /// With any active mitigation the casualty string starts with the
    /// reduction prefix followed by exactly one base label; without it the
    /// string is a bare base label.
    #[test]
    fn prop_casualty_prefixing(
        size in 0.001f64..10.0,
        velocity in 1.0f64..80.0,
        mitigation in arb_mitigation(),
    ) {
        let result = compute_impact(&ImpactParameters {
            size_km: size,
            velocity_km_s: velocity,
            mitigation,
            ..ImpactParameters::default()
        });

        if mitigation == MitigationStrategy::None {
            prop_assert!(severity::CASUALTIES.contains(&result.casualties.as_str()));
        } else {
            prop_assert!(result.casualties.starts_with(severity::MITIGATED_PREFIX));
            let base = &result.casualties[severity::MITIGATED_PREFIX.len()..];
            prop_assert!(
                severity::CASUALTIES.contains(&base),
                "Casualty suffix {base:?} not in the base label set"
            );
        }
    }
}
