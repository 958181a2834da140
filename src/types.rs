//! Shared domain types and constants for the impact simulator.

use bevy::prelude::*;

use crate::impact::ImpactResult;

/// Megatons of TNT per joule denominator (1 Mt TNT = 4.184e15 J).
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Bulk composition of the impactor. Selects a density for the mass estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Composition {
    /// Stony asteroid, 3000 kg/m³. The fallback for unrecognized tags.
    #[default]
    Rocky,
    /// Iron-nickel body, 7800 kg/m³.
    Metallic,
    /// Cometary ice, 1000 kg/m³.
    Icy,
}

impl Composition {
    /// All selectable compositions, in UI order.
    pub const ALL: [Composition; 3] = [
        Composition::Rocky,
        Composition::Metallic,
        Composition::Icy,
    ];

    /// Bulk density in kg/m³.
    pub fn density_kg_m3(self) -> f64 {
        match self {
            Composition::Rocky => 3000.0,
            Composition::Metallic => 7800.0,
            Composition::Icy => 1000.0,
        }
    }

    /// Parse a composition tag leniently.
    ///
    /// Unrecognized tags fall back to `Rocky`, so feed data and presets can
    /// never make the calculator fail.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "metallic" => Composition::Metallic,
            "icy" => Composition::Icy,
            _ => Composition::Rocky,
        }
    }

    /// Display label for UI selectors.
    pub fn label(self) -> &'static str {
        match self {
            Composition::Rocky => "Rocky",
            Composition::Metallic => "Metallic",
            Composition::Icy => "Icy",
        }
    }
}

/// Deflection strategy, modeled as a flat energy-reduction multiplier.
///
/// This is not a physical deflection model; each strategy simply scales the
/// delivered kinetic energy by a fixed fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MitigationStrategy {
    /// No mitigation, full energy delivered. The fallback for unrecognized tags.
    #[default]
    None,
    /// Kinetic impactor (DART-style), 30% of energy remains.
    Kinetic,
    /// Gravity tractor, 40% of energy remains.
    Gravity,
    /// Nuclear standoff, 10% of energy remains.
    Nuclear,
    /// Laser ablation, 50% of energy remains.
    Laser,
}

impl MitigationStrategy {
    /// All selectable strategies, in UI order.
    pub const ALL: [MitigationStrategy; 5] = [
        MitigationStrategy::None,
        MitigationStrategy::Kinetic,
        MitigationStrategy::Gravity,
        MitigationStrategy::Nuclear,
        MitigationStrategy::Laser,
    ];

    /// Fraction of kinetic energy remaining after this strategy is applied.
    pub fn energy_factor(self) -> f64 {
        match self {
            MitigationStrategy::None => 1.0,
            MitigationStrategy::Kinetic => 0.3,
            MitigationStrategy::Gravity => 0.4,
            MitigationStrategy::Nuclear => 0.1,
            MitigationStrategy::Laser => 0.5,
        }
    }

    /// Parse a strategy tag leniently; unrecognized tags fall back to `None`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "kinetic" => MitigationStrategy::Kinetic,
            "gravity" => MitigationStrategy::Gravity,
            "nuclear" => MitigationStrategy::Nuclear,
            "laser" => MitigationStrategy::Laser,
            _ => MitigationStrategy::None,
        }
    }

    /// Display label for UI selectors.
    pub fn label(self) -> &'static str {
        match self {
            MitigationStrategy::None => "None",
            MitigationStrategy::Kinetic => "Kinetic Impactor",
            MitigationStrategy::Gravity => "Gravity Tractor",
            MitigationStrategy::Nuclear => "Nuclear Device",
            MitigationStrategy::Laser => "Laser Ablation",
        }
    }
}

/// Surface type at the impact site. Gates tsunami-risk evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImpactSurface {
    #[default]
    Land,
    Ocean,
}

impl ImpactSurface {
    /// All selectable surfaces, in UI order.
    pub const ALL: [ImpactSurface; 2] = [ImpactSurface::Land, ImpactSurface::Ocean];

    /// Display label for UI selectors.
    pub fn label(self) -> &'static str {
        match self {
            ImpactSurface::Land => "Land",
            ImpactSurface::Ocean => "Ocean",
        }
    }
}

/// Current simulator inputs, owned by the presentation layer.
///
/// These are the slider/selector values; the calculator receives them by
/// value and holds no state of its own between calls.
#[derive(Resource, Clone, Debug)]
pub struct SimulatorParameters {
    /// Asteroid diameter in kilometers.
    pub size_km: f64,
    /// Impact velocity in km/s.
    pub velocity_km_s: f64,
    /// Impact angle from horizontal, degrees.
    pub angle_deg: f64,
    /// Orbit distance in AU. Drives the visualization only.
    pub distance_au: f64,
    pub composition: Composition,
    pub mitigation: MitigationStrategy,
    pub surface: ImpactSurface,
    /// Name of the NEO the parameters were loaded from, if any.
    pub source_name: Option<String>,
}

impl Default for SimulatorParameters {
    fn default() -> Self {
        Self {
            size_km: 1.0,
            velocity_km_s: 20.0,
            angle_deg: 45.0,
            distance_au: 1.0,
            composition: Composition::Rocky,
            mitigation: MitigationStrategy::None,
            surface: ImpactSurface::Land,
            source_name: None,
        }
    }
}

/// Most recently computed impact result, if any.
///
/// Replaced wholesale on every calculation; never mutated in place.
#[derive(Resource, Default)]
pub struct LatestImpact {
    pub result: Option<ImpactResult>,
}
