//! Preset impactor definitions.
//!
//! Six well-known bodies with plausible entry parameters, loadable into the
//! sliders as starting points. Values are rounded educational estimates, in
//! keeping with the rest of the model.

use crate::types::{Composition, ImpactSurface, MitigationStrategy};

/// A named, fixed set of simulator inputs.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioPreset {
    /// Unique identifier for the preset.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description shown in the UI.
    pub description: &'static str,
    pub size_km: f64,
    pub velocity_km_s: f64,
    pub angle_deg: f64,
    pub composition: Composition,
    pub mitigation: MitigationStrategy,
    pub surface: ImpactSurface,
}

/// All available presets, smallest body first.
pub static PRESETS: &[ScenarioPreset] = &[
    CHELYABINSK,
    TUNGUSKA,
    BARRINGER,
    APOPHIS,
    ELTANIN,
    CHICXULUB,
];

/// Chelyabinsk superbolide (2013): ~20 m stony body, shallow entry.
pub static CHELYABINSK: ScenarioPreset = ScenarioPreset {
    id: "chelyabinsk",
    name: "Chelyabinsk",
    description: "2013 airburst over Russia. ~20 m stony body, shallow entry.",
    size_km: 0.02,
    velocity_km_s: 19.0,
    angle_deg: 18.0,
    composition: Composition::Rocky,
    mitigation: MitigationStrategy::None,
    surface: ImpactSurface::Land,
};

/// Tunguska event (1908): ~60 m body, flattened 2000 km² of forest.
pub static TUNGUSKA: ScenarioPreset = ScenarioPreset {
    id: "tunguska",
    name: "Tunguska",
    description: "1908 Siberian airburst. ~60 m body over remote forest.",
    size_km: 0.06,
    velocity_km_s: 15.0,
    angle_deg: 30.0,
    composition: Composition::Icy,
    mitigation: MitigationStrategy::None,
    surface: ImpactSurface::Land,
};

/// Barringer crater impactor (~50,000 years ago): iron body, near-vertical.
pub static BARRINGER: ScenarioPreset = ScenarioPreset {
    id: "barringer",
    name: "Barringer",
    description: "Arizona's Meteor Crater. ~50 m iron body, steep impact.",
    size_km: 0.05,
    velocity_km_s: 12.8,
    angle_deg: 80.0,
    composition: Composition::Metallic,
    mitigation: MitigationStrategy::None,
    surface: ImpactSurface::Land,
};

/// Apophis-class stony asteroid in a hypothetical ocean impact.
pub static APOPHIS: ScenarioPreset = ScenarioPreset {
    id: "apophis",
    name: "Apophis",
    description: "~340 m stony asteroid, hypothetical ocean impact.",
    size_km: 0.34,
    velocity_km_s: 12.6,
    angle_deg: 45.0,
    composition: Composition::Rocky,
    mitigation: MitigationStrategy::None,
    surface: ImpactSurface::Ocean,
};

/// Eltanin impact (~2.5 Ma): the only known deep-ocean impact of a km-class body.
pub static ELTANIN: ScenarioPreset = ScenarioPreset {
    id: "eltanin",
    name: "Eltanin",
    description: "~1.5 km body into the Southern Ocean, megatsunami source.",
    size_km: 1.5,
    velocity_km_s: 20.0,
    angle_deg: 45.0,
    composition: Composition::Rocky,
    mitigation: MitigationStrategy::None,
    surface: ImpactSurface::Ocean,
};

/// Chicxulub impactor (66 Ma): the dinosaur-extinction event.
pub static CHICXULUB: ScenarioPreset = ScenarioPreset {
    id: "chicxulub",
    name: "Chicxulub",
    description: "~10 km body, end-Cretaceous extinction event.",
    size_km: 10.0,
    velocity_km_s: 20.0,
    angle_deg: 60.0,
    composition: Composition::Rocky,
    mitigation: MitigationStrategy::None,
    surface: ImpactSurface::Ocean,
};

/// Get a preset by id.
pub fn get_preset(id: &str) -> Option<&'static ScenarioPreset> {
    PRESETS.iter().find(|p| p.id == id)
}
