use crate::{PolygonGeometry, RegionFeature, RegionFeatureCollection, RegionProperties};

#[test]
fn test_rectangle_is_closed_ring() {
    let geometry = PolygonGeometry::rectangle(-10.0, 36.0, 20.0, 55.0);

    let ring = &geometry.coordinates[0];
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(ring[1], [20.0, 36.0]);
}

#[test]
fn test_feature_collection_serializes_geojson_types() {
    let collection = RegionFeatureCollection::new(vec![RegionFeature::new(
        RegionProperties {
            id: 2,
            name: "Western Europe".to_string(),
            value: 92,
            population: "190M".to_string(),
            gdp: "$8.2T".to_string(),
            growth: "+1.8%".to_string(),
            project: "finance".to_string(),
        },
        PolygonGeometry::rectangle(-10.0, 36.0, 20.0, 55.0),
    )]);

    let value = serde_json::to_value(&collection).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"][0]["type"], "Feature");
    assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
    assert_eq!(value["features"][0]["properties"]["name"], "Western Europe");
}
