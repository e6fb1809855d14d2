use std::env;

use anyhow::Result;
use ndarray::array;

use drawn_classifiers::chart::ChartDescription;
use drawn_classifiers::data_handling::Frame;
use drawn_classifiers::io::write_charts;
use drawn_classifiers::models::{
    PolygonFeaturizer, PolygonOutlierDetector, OUTLIER,
};

fn main() -> Result<()> {
    env_logger::init();

    // One chart marking the normal operating region of two sensors, drawn as
    // two overlapping rings around the steady state.
    let mut chart = ChartDescription::new("ops", "temperature_c", "pressure_kpa");
    chart.add_ring(
        "steady",
        &[20.0, 80.0, 80.0, 20.0],
        &[100.0, 100.0, 250.0, 250.0],
    );
    chart.add_ring(
        "steady",
        &[35.0, 65.0, 65.0, 35.0],
        &[140.0, 140.0, 210.0, 210.0],
    );
    let charts = vec![chart];

    let x = Frame::new(
        vec!["temperature_c".to_string(), "pressure_kpa".to_string()],
        array![
            [50.0, 175.0], // well inside the steady region
            [25.0, 115.0], // near the edge, one ring
            [90.0, 300.0], // clearly abnormal
            [10.0, 175.0], // cold excursion
        ],
    )?;

    let detector = PolygonOutlierDetector::new(charts.clone());
    let flags = detector.predict(&x)?;
    let scores = detector.score(&x)?;

    println!("--- Outlier screening (threshold {}) ---", detector.threshold());
    for row in 0..x.nrows() {
        println!(
            "temp {:5.1}  pressure {:5.1}  votes {}  -> {}",
            x.value(row, 0),
            x.value(row, 1),
            scores[[row, 0]],
            if flags[row] == OUTLIER { "OUTLIER" } else { "ok" }
        );
    }

    // The drawn description round-trips through disk unchanged.
    let path = env::temp_dir().join("ops_polygons.json");
    write_charts(&path, detector.charts())?;
    let reloaded = PolygonOutlierDetector::from_json(&path)?;
    println!(
        "Reloaded description from {} agrees: {}",
        path.display(),
        reloaded.predict(&x)? == flags
    );

    // The same chart doubles as a feature generator for a downstream model.
    let featurizer = PolygonFeaturizer::new(charts);
    let extended = featurizer.append_counts(&x)?;
    println!("--- Count features appended: {:?} ---", extended.names());
    for row in 0..extended.nrows() {
        println!(
            "temp {:5.1}  pressure {:5.1}  steady_votes {:1.0}",
            extended.value(row, 0),
            extended.value(row, 1),
            extended.value(row, 2),
        );
    }

    Ok(())
}
