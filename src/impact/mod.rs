//! Impact-effect estimation from asteroid parameters.
//!
//! The calculator is a single pure function over six scalar/enumerated
//! inputs, using closed-form empirical formulas: spherical mass, kinetic
//! energy with a flat mitigation multiplier, a Collins-style crater scaling
//! law, and tiered severity classification. The formulas are illustrative,
//! not validated impact science.

pub mod severity;

#[cfg(test)]
mod proptest_impact;

use std::f64::consts::PI;

use crate::types::{Composition, ImpactSurface, MitigationStrategy};

/// Inputs to one impact calculation. Immutable per invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactParameters {
    /// Body diameter in kilometers.
    pub size_km: f64,
    /// Impact speed relative to Earth in km/s.
    pub velocity_km_s: f64,
    /// Impact angle from horizontal in degrees; enters only through its sine.
    pub angle_deg: f64,
    pub composition: Composition,
    pub mitigation: MitigationStrategy,
    pub surface: ImpactSurface,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            size_km: 1.0,
            velocity_km_s: 20.0,
            angle_deg: 45.0,
            composition: Composition::Rocky,
            mitigation: MitigationStrategy::None,
            surface: ImpactSurface::Land,
        }
    }
}

/// Derived impact estimates. An inert value object, replaced wholesale on
/// each calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactResult {
    /// Kinetic energy delivered after mitigation, joules.
    pub energy_joules: f64,
    pub crater_diameter_km: f64,
    pub crater_depth_km: f64,
    /// Blast-destruction radius.
    pub shockwave_radius_km: f64,
    /// One of the fixed tsunami tier labels in [`severity`].
    pub tsunami_risk: &'static str,
    /// Richter-like magnitude, clamped to at most 10. The lower end is
    /// unclamped: zero energy propagates `-inf` through the log.
    pub seismic_magnitude: f64,
    /// One of the three fixed atmospheric tier labels in [`severity`].
    pub atmospheric_effects: &'static str,
    /// One of the four casualty bands, optionally mitigation-prefixed.
    pub casualties: String,
    pub fireball_radius_km: f64,
    pub thermal_radiation_radius_km: f64,
    pub overpressure_radius_km: f64,
    pub debris_zone_km: f64,
}

impl ImpactResult {
    /// Energy expressed in megatons of TNT.
    pub fn energy_megatons(&self) -> f64 {
        self.energy_joules / crate::types::JOULES_PER_MEGATON
    }
}

/// Compute impact estimates from the given parameters.
///
/// Total over its declared domain: there are no error conditions, no I/O,
/// and no hidden state. Degenerate numeric inputs (zero or negative size,
/// velocity, or angle) produce non-physical but non-crashing outputs; the UI
/// sliders keep real inputs in sensible ranges.
pub fn compute_impact(params: &ImpactParameters) -> ImpactResult {
    let angle_rad = params.angle_deg.to_radians();

    // Sphere of the given diameter at the composition's bulk density
    let radius_m = params.size_km * 1000.0 / 2.0;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    let mass_kg = volume_m3 * params.composition.density_kg_m3();

    // E = ½mv², then scaled by the flat mitigation fraction
    let velocity_m_s = params.velocity_km_s * 1000.0;
    let energy_joules = 0.5 * mass_kg * velocity_m_s.powi(2) * params.mitigation.energy_factor();

    // Simplified Collins et al. (2005) crater scaling, D ∝ L^0.78, with a
    // fixed ×5 multiplier and the angle entering through its sine
    let crater_diameter_km = 1.161 * params.size_km.powf(0.78) * 5.0 * angle_rad.sin();
    let crater_depth_km = crater_diameter_km * 0.3;

    let shockwave_radius_km = (energy_joules / 1e18).powf(0.33) * 10.0;

    let tsunami_risk = severity::tsunami_risk(params.surface, params.size_km, crater_diameter_km);

    // Richter-scale approximation; only the upper bound is clamped, so
    // E = 0 yields -inf here by design
    let seismic_magnitude = f64::min(10.0, 4.0 + (energy_joules / 1e15).log10());

    let atmospheric_effects = severity::atmospheric_effects(params.size_km);

    let affected_area_km2 = PI * shockwave_radius_km.powi(2);
    let casualties = severity::casualty_estimate(affected_area_km2, params.mitigation);

    let fireball_radius_km = (energy_joules / 4.184e15).powf(0.4) * 0.5;
    let thermal_radiation_radius_km = fireball_radius_km * 2.5;
    let overpressure_radius_km = (energy_joules / 1e15).powf(0.33) * 3.0;
    let debris_zone_km = crater_diameter_km * 3.0;

    ImpactResult {
        energy_joules,
        crater_diameter_km,
        crater_depth_km,
        shockwave_radius_km,
        tsunami_risk,
        seismic_magnitude,
        atmospheric_effects,
        casualties,
        fireball_radius_km,
        thermal_radiation_radius_km,
        overpressure_radius_km,
        debris_zone_km,
    }
}
