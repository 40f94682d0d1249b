use crate::seed;

use dash_core::{HistoryMarker, RegionFeatureCollection};

/// Read-only map fixtures, served unmodified
pub struct ReferenceData {
    pub history: Vec<HistoryMarker>,
    pub regions: RegionFeatureCollection,
}

impl ReferenceData {
    pub fn seeded() -> Self {
        Self {
            history: seed::history_markers(),
            regions: seed::regions(),
        }
    }
}
