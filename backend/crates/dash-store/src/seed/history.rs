use dash_core::HistoryMarker;

type MarkerRow = (&'static str, f64, f64, f64, f64, &'static str);

const MARKERS: [MarkerRow; 15] = [
    ("New York", 40.71, -74.01, 1.082, 0.15, "finance"),
    ("London", 51.51, -0.13, 0.856, -0.23, "finance"),
    ("Tokyo", 35.69, 139.69, 148.5, 0.85, "analytics"),
    ("Frankfurt", 50.11, 8.68, 1.082, 0.12, "finance"),
    ("Sydney", -33.87, 151.21, 1.534, -0.45, "global"),
    ("Toronto", 43.65, -79.38, 1.357, 0.08, "global"),
    ("Singapore", 1.35, 103.82, 1.341, -0.11, "analytics"),
    ("Zurich", 47.38, 8.54, 0.902, 0.33, "finance"),
    ("Hong Kong", 22.32, 114.17, 7.823, -0.62, "analytics"),
    ("Dubai", 25.20, 55.27, 3.673, 0.21, "global"),
    ("São Paulo", -23.55, -46.63, 5.013, 0.38, "global"),
    ("Mumbai", 19.08, 72.88, 83.5, 0.52, "analytics"),
    ("Shanghai", 31.23, 121.47, 7.254, -0.18, "analytics"),
    ("Johannesburg", -26.20, 28.04, 18.32, -0.41, "global"),
    ("Seoul", 37.57, 126.98, 1325.0, 1.24, "analytics"),
];

pub fn history_markers() -> Vec<HistoryMarker> {
    MARKERS
        .iter()
        .enumerate()
        .map(|(i, &(name, lat, lng, value, change, project))| HistoryMarker {
            id: i as i64 + 1,
            name: name.to_string(),
            lat,
            lng,
            value,
            change,
            project: project.to_string(),
        })
        .collect()
}
