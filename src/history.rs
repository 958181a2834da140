//! Historical impact events shown in the history window.
//!
//! Static reference data; no computation is performed on it.

/// Qualitative severity tier for a historical event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Moderate,
    Major,
    Catastrophic,
}

impl Severity {
    /// Display label for badges.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Moderate => "MODERATE",
            Severity::Major => "MAJOR",
            Severity::Catastrophic => "CATASTROPHIC",
        }
    }
}

/// One historical impact record.
#[derive(Clone, Copy, Debug)]
pub struct HistoricalImpact {
    pub name: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    /// Estimated object diameter, as displayed text.
    pub diameter: &'static str,
    /// Resulting crater size, as displayed text.
    pub crater_size: &'static str,
    pub consequences: &'static str,
    pub severity: Severity,
}

/// All historical events, most severe categories interleaved chronologically
/// as in the source material.
pub static HISTORICAL_IMPACTS: &[HistoricalImpact] = &[
    HistoricalImpact {
        name: "Chicxulub Impact",
        location: "Yucatán Peninsula, Mexico",
        date: "66 million years ago",
        diameter: "10-15 km",
        crater_size: "180 km",
        consequences: "Mass extinction event (dinosaurs), created the Cretaceous-Paleogene \
                       boundary, global wildfires, tsunami waves up to 100m high",
        severity: Severity::Catastrophic,
    },
    HistoricalImpact {
        name: "Tunguska Event",
        location: "Siberia, Russia",
        date: "June 30, 1908",
        diameter: "50-60 m",
        crater_size: "No crater (airburst)",
        consequences: "Flattened 2,000 km² of forest, knocked down ~80 million trees, airburst \
                       explosion equivalent to 10-15 megatons of TNT",
        severity: Severity::Major,
    },
    HistoricalImpact {
        name: "Chelyabinsk Meteor",
        location: "Chelyabinsk Oblast, Russia",
        date: "February 15, 2013",
        diameter: "20 m",
        crater_size: "No crater (airburst)",
        consequences: "~1,500 people injured by glass from shattered windows, equivalent to \
                       ~500 kilotons of TNT, brightest superbolide since 1908",
        severity: Severity::Moderate,
    },
    HistoricalImpact {
        name: "Barringer Crater",
        location: "Arizona, USA",
        date: "~50,000 years ago",
        diameter: "50 m",
        crater_size: "1.2 km",
        consequences: "First confirmed impact crater on Earth, blast equivalent to 10 megatons \
                       of TNT, well-preserved crater",
        severity: Severity::Major,
    },
    HistoricalImpact {
        name: "Vredefort Impact",
        location: "Free State, South Africa",
        date: "2.023 billion years ago",
        diameter: "10-15 km",
        crater_size: "300 km (largest verified)",
        consequences: "Largest verified impact structure on Earth, created massive crater \
                       visible from space, significant geological changes",
        severity: Severity::Catastrophic,
    },
    HistoricalImpact {
        name: "Sudbury Basin",
        location: "Ontario, Canada",
        date: "1.849 billion years ago",
        diameter: "10-15 km",
        crater_size: "130 km",
        consequences: "One of the oldest impact structures, created rich ore deposits (nickel, \
                       copper, platinum), reshaped regional geology",
        severity: Severity::Catastrophic,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_count() {
        assert_eq!(HISTORICAL_IMPACTS.len(), 6);
    }

    #[test]
    fn test_records_are_complete() {
        for event in HISTORICAL_IMPACTS.iter() {
            assert!(!event.name.is_empty());
            assert!(!event.location.is_empty());
            assert!(!event.date.is_empty());
            assert!(!event.diameter.is_empty());
            assert!(!event.crater_size.is_empty());
            assert!(!event.consequences.is_empty());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = HISTORICAL_IMPACTS.iter().map(|e| e.name).collect();
        let original_len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), original_len);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Catastrophic.label(), "CATASTROPHIC");
        assert_eq!(Severity::Major.label(), "MAJOR");
        assert_eq!(Severity::Moderate.label(), "MODERATE");
    }
}
