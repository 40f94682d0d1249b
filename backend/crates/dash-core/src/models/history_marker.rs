use crate::RecordId;

use serde::{Deserialize, Serialize};

/// Financial-centre marker on the history map (static reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMarker {
    pub id: RecordId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub value: f64,
    /// Percentage change
    pub change: f64,
    pub project: String,
}
