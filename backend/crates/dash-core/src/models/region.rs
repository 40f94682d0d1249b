//! GeoJSON region polygons served as static reference data.

use crate::RecordId;

use serde::{Deserialize, Serialize};

const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURE: &str = "Feature";
const POLYGON: &str = "Polygon";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<RegionFeature>,
}

impl RegionFeatureCollection {
    pub fn new(features: Vec<RegionFeature>) -> Self {
        Self {
            kind: FEATURE_COLLECTION.to_string(),
            features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: RegionProperties,
    pub geometry: PolygonGeometry,
}

impl RegionFeature {
    pub fn new(properties: RegionProperties, geometry: PolygonGeometry) -> Self {
        Self {
            kind: FEATURE.to_string(),
            properties,
            geometry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProperties {
    pub id: RecordId,
    pub name: String,
    pub value: u32,
    pub population: String,
    pub gdp: String,
    pub growth: String,
    pub project: String,
}

/// GeoJSON polygon: a list of linear rings of `[lng, lat]` positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl PolygonGeometry {
    /// Axis-aligned rectangle as a closed ring
    pub fn rectangle(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            kind: POLYGON.to_string(),
            coordinates: vec![vec![
                [west, south],
                [east, south],
                [east, north],
                [west, north],
                [west, south],
            ]],
        }
    }
}
