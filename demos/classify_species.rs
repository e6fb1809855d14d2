use ndarray::array;

use drawn_classifiers::chart::ChartDescription;
use drawn_classifiers::data_handling::Frame;
use drawn_classifiers::models::{PolygonClassifier, PolygonEstimator};

fn main() {
    env_logger::init();

    // Two charts a person might draw over a penguin dataset: one on bill
    // measurements, one on flipper length vs body mass. Votes pool across
    // both charts.
    let mut bill_chart = ChartDescription::new("bill", "bill_length_mm", "bill_depth_mm");
    bill_chart.add_ring("adelie", &[32.0, 42.0, 42.0, 32.0], &[15.0, 15.0, 22.0, 22.0]);
    bill_chart.add_ring("gentoo", &[42.0, 52.0, 52.0, 42.0], &[13.0, 13.0, 16.5, 16.5]);
    bill_chart.add_ring("chinstrap", &[45.0, 55.0, 55.0, 45.0], &[16.5, 16.5, 21.0, 21.0]);

    let mut body_chart = ChartDescription::new("body", "flipper_length_mm", "body_mass_g");
    body_chart.add_ring("adelie", &[172.0, 196.0, 196.0, 172.0], &[2850.0, 2850.0, 4100.0, 4100.0]);
    body_chart.add_ring("gentoo", &[203.0, 231.0, 231.0, 203.0], &[4300.0, 4300.0, 6300.0, 6300.0]);
    body_chart.add_ring("chinstrap", &[178.0, 212.0, 212.0, 178.0], &[2700.0, 2700.0, 4150.0, 4150.0]);

    let x = Frame::new(
        vec![
            "bill_length_mm".to_string(),
            "bill_depth_mm".to_string(),
            "flipper_length_mm".to_string(),
            "body_mass_g".to_string(),
        ],
        array![
            [38.8, 18.3, 190.0, 3700.0], // adelie-looking
            [47.5, 15.0, 217.0, 5000.0], // gentoo-looking
            [49.9, 18.6, 196.0, 3733.0], // chinstrap-looking
            [44.0, 16.4, 205.0, 4300.0], // between gentoo and chinstrap
        ],
    )
    .expect("failed to create feature frame");

    let model = PolygonClassifier::new(vec![bill_chart, body_chart]);

    let counts = model.hit_counts(&x).expect("failed to count votes");
    let probs = model.predict_proba(&x).expect("failed to score");
    let labels = model.predict(&x).expect("failed to classify");
    let classes = model.classes().expect("model is fitted after scoring");

    println!("Classes: {:?}", classes);
    for row in 0..x.nrows() {
        print!("Row {}: votes [", row);
        for (i, class) in classes.iter().enumerate() {
            if i > 0 {
                print!(", ");
            }
            print!("{} {}", class, counts[[row, i]]);
        }
        print!("], probabilities [");
        for i in 0..classes.len() {
            if i > 0 {
                print!(", ");
            }
            print!("{:.3}", probs[[row, i]]);
        }
        println!("] -> {}", labels[row]);
    }
}
