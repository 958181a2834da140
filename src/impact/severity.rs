//! Qualitative severity tiers derived from impact geometry and energy.
//!
//! All label strings are part of the observable contract and are matched
//! verbatim by downstream consumers; tier breakpoints use strict comparisons
//! deliberately, so a crater of exactly 15 km is "Severe", not "Catastrophic".

use crate::types::{ImpactSurface, MitigationStrategy};

/// Tsunami tier labels.
pub const TSUNAMI_LAND: &str = "N/A - Land Impact";
pub const TSUNAMI_NONE: &str = "None";
pub const TSUNAMI_LOCAL_WAVES: &str = "Low - Local waves";
pub const TSUNAMI_LOW: &str = "Low - Coastal waves <10m";
pub const TSUNAMI_MODERATE: &str = "Moderate - Local tsunamis 10-50m";
pub const TSUNAMI_SEVERE: &str = "Severe - Regional tsunamis 50-100m";
pub const TSUNAMI_CATASTROPHIC: &str = "Catastrophic - Global tsunamis over 100m";

/// Atmospheric tier labels.
pub const ATMOSPHERIC_LOCAL: &str = "Local dust clouds, minimal climate impact";
pub const ATMOSPHERIC_REGIONAL: &str =
    "Regional dust injection, temperature drop 1-3°C for months";
pub const ATMOSPHERIC_GLOBAL: &str =
    "Global dust cloud, nuclear winter scenario, temperature drop 5-15°C for years";

/// Casualty tier base labels, smallest tier first.
pub const CASUALTIES: [&str; 4] = [
    "Hundreds to thousands",
    "Tens of thousands",
    "Hundreds of thousands",
    "Millions to extinction-level",
];

/// Prefix applied to the casualty label when any mitigation is active.
pub const MITIGATED_PREFIX: &str = "Significantly reduced: ";

/// Classify tsunami risk from surface type, impactor size, and crater size.
///
/// Only ocean impacts are evaluated; land impacts always return
/// [`TSUNAMI_LAND`]. Ocean impacts at or below 0.1 km fall through to the
/// literal [`TSUNAMI_NONE`] default rather than a small-impact tier; that
/// fall-through is intentional and covered by tests.
pub fn tsunami_risk(
    surface: ImpactSurface,
    size_km: f64,
    crater_diameter_km: f64,
) -> &'static str {
    match surface {
        ImpactSurface::Land => TSUNAMI_LAND,
        ImpactSurface::Ocean => {
            if size_km > 0.5 {
                if crater_diameter_km > 15.0 {
                    TSUNAMI_CATASTROPHIC
                } else if crater_diameter_km > 8.0 {
                    TSUNAMI_SEVERE
                } else if crater_diameter_km > 3.0 {
                    TSUNAMI_MODERATE
                } else {
                    TSUNAMI_LOW
                }
            } else if size_km > 0.1 {
                TSUNAMI_LOCAL_WAVES
            } else {
                TSUNAMI_NONE
            }
        }
    }
}

/// Classify atmospheric/climate effects from impactor size alone.
pub fn atmospheric_effects(size_km: f64) -> &'static str {
    if size_km < 0.5 {
        ATMOSPHERIC_LOCAL
    } else if size_km < 2.0 {
        ATMOSPHERIC_REGIONAL
    } else {
        ATMOSPHERIC_GLOBAL
    }
}

/// Estimate a casualty band from the blast-affected area (km²).
///
/// Any active mitigation strategy prefixes the band with
/// [`MITIGATED_PREFIX`]; the base label set is unchanged.
pub fn casualty_estimate(affected_area_km2: f64, mitigation: MitigationStrategy) -> String {
    let base = if affected_area_km2 < 100.0 {
        CASUALTIES[0]
    } else if affected_area_km2 < 1000.0 {
        CASUALTIES[1]
    } else if affected_area_km2 < 10_000.0 {
        CASUALTIES[2]
    } else {
        CASUALTIES[3]
    };

    if mitigation != MitigationStrategy::None {
        format!("{MITIGATED_PREFIX}{base}")
    } else {
        base.to_string()
    }
}
