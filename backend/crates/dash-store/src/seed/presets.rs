use dash_core::{PresetFields, PresetRecord};

type PresetRow = (&'static str, f64, f64, &'static str, &'static str, &'static str);

const SEED_PRESETS: [PresetRow; 12] = [
    ("Eiffel Tower", 48.858, 2.294, "landmark", "Paris, France", "infrastructure"),
    ("Colosseum", 41.890, 12.492, "landmark", "Rome, Italy", "infrastructure"),
    ("Sagrada Família", 41.404, 2.174, "landmark", "Barcelona, Spain", "infrastructure"),
    ("Brandenburg Gate", 52.516, 13.377, "landmark", "Berlin, Germany", "infrastructure"),
    ("Acropolis", 37.971, 23.726, "landmark", "Athens, Greece", "infrastructure"),
    ("Schiphol Airport", 52.310, 4.768, "airport", "Amsterdam, Netherlands", "logistics"),
    ("Heathrow Airport", 51.470, -0.454, "airport", "London, UK", "logistics"),
    ("Charles de Gaulle", 49.009, 2.548, "airport", "Paris, France", "logistics"),
    ("Port of Rotterdam", 51.900, 4.480, "port", "Rotterdam, Netherlands", "logistics"),
    ("Port of Antwerp", 51.260, 4.400, "port", "Antwerp, Belgium", "logistics"),
    ("CERN", 46.234, 6.055, "research", "Geneva, Switzerland", "research"),
    ("ESA HQ", 48.797, 2.223, "research", "Paris, France", "research"),
];

/// Twelve presets with ids 1..=12
pub fn presets() -> Vec<PresetRecord> {
    SEED_PRESETS
        .iter()
        .enumerate()
        .map(
            |(i, &(name, lat, lng, kind, description, project))| PresetRecord {
                id: i as i64 + 1,
                fields: PresetFields {
                    name: Some(name.to_string().into()),
                    lat: Some(lat.into()),
                    lng: Some(lng.into()),
                    kind: Some(kind.to_string().into()),
                    description: Some(description.to_string().into()),
                    project: Some(project.to_string().into()),
                    extra: Default::default(),
                },
            },
        )
        .collect()
}
