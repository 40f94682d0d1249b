use dash_core::{PolygonGeometry, RegionFeature, RegionFeatureCollection, RegionProperties};

struct RegionRow {
    name: &'static str,
    value: u32,
    population: &'static str,
    gdp: &'static str,
    growth: &'static str,
    project: &'static str,
    /// west, south, east, north
    bounds: [f64; 4],
}

const REGIONS: [RegionRow; 8] = [
    RegionRow {
        name: "North America",
        value: 88,
        population: "370M",
        gdp: "$28T",
        growth: "+2.3%",
        project: "analytics",
        bounds: [-130.0, 25.0, -60.0, 55.0],
    },
    RegionRow {
        name: "Western Europe",
        value: 92,
        population: "190M",
        gdp: "$8.2T",
        growth: "+1.8%",
        project: "finance",
        bounds: [-10.0, 36.0, 20.0, 55.0],
    },
    RegionRow {
        name: "Eastern Europe",
        value: 67,
        population: "120M",
        gdp: "$2.1T",
        growth: "+3.1%",
        project: "global",
        bounds: [20.0, 44.0, 40.0, 60.0],
    },
    RegionRow {
        name: "East Asia",
        value: 79,
        population: "1.6B",
        gdp: "$18T",
        growth: "+4.5%",
        project: "analytics",
        bounds: [100.0, 20.0, 145.0, 45.0],
    },
    RegionRow {
        name: "South Asia",
        value: 58,
        population: "1.9B",
        gdp: "$4.5T",
        growth: "+6.2%",
        project: "global",
        bounds: [60.0, 5.0, 100.0, 35.0],
    },
    RegionRow {
        name: "Sub-Saharan Africa",
        value: 41,
        population: "1.1B",
        gdp: "$1.8T",
        growth: "+3.7%",
        project: "global",
        bounds: [-20.0, -35.0, 50.0, 10.0],
    },
    RegionRow {
        name: "Latin America",
        value: 54,
        population: "430M",
        gdp: "$4.2T",
        growth: "+2.8%",
        project: "global",
        bounds: [-82.0, -55.0, -34.0, 14.0],
    },
    RegionRow {
        name: "Middle East",
        value: 73,
        population: "250M",
        gdp: "$3.9T",
        growth: "+3.4%",
        project: "finance",
        bounds: [32.0, 12.0, 65.0, 38.0],
    },
];

/// Eight rectangular world regions as a GeoJSON FeatureCollection
pub fn regions() -> RegionFeatureCollection {
    let features = REGIONS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let [west, south, east, north] = row.bounds;
            RegionFeature::new(
                RegionProperties {
                    id: i as i64 + 1,
                    name: row.name.to_string(),
                    value: row.value,
                    population: row.population.to_string(),
                    gdp: row.gdp.to_string(),
                    growth: row.growth.to_string(),
                    project: row.project.to_string(),
                },
                PolygonGeometry::rectangle(west, south, east, north),
            )
        })
        .collect();

    RegionFeatureCollection::new(features)
}
