use std::path::Path;

use kaloriku::net::{Activation, InputShape, Layer, Matrix, ModelMetadata, Network};
use kaloriku::{
    decode_upload, CalorieTable, Classifier, Error, Estimator, LabelSet, UploadedImage,
};

const REFERENCE: &str = "label,kalori_min_100g,kalori_max_100g\n\
                         bakso,80,150\n\
                         rendang,190,290\n\
                         sate,200,300\n";

fn layer(weights: Vec<Vec<f64>>, biases: Vec<f64>, activator: Activation) -> Layer {
    Layer {
        weights: Matrix::from_data(weights),
        biases: Matrix::from_data(vec![biases]),
        activator,
    }
}

/// 2x2 RGB input -> 3-class softmax with fixed weights.
fn tiny_network() -> Network {
    let weights: Vec<Vec<f64>> = (0..12)
        .map(|i| vec![0.3, 0.1 * i as f64, 0.05])
        .collect();
    Network {
        layers: vec![layer(weights, vec![0.0, 0.0, 0.0], Activation::Softmax)],
        metadata: ModelMetadata {
            input: InputShape {
                width: 2,
                height: 2,
            },
        },
    }
}

fn three_labels() -> LabelSet {
    LabelSet::new(vec![
        "bakso".to_owned(),
        "rendang".to_owned(),
        "sate".to_owned(),
    ])
    .unwrap()
}

fn sample_photo() -> kaloriku::DecodedImage {
    let img = image::RgbImage::from_fn(50, 40, |x, y| {
        image::Rgb([(x * 3 % 256) as u8, (y * 3 % 256) as u8, 200])
    });
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut buf),
            image::ImageOutputFormat::Png,
        )
        .unwrap();
    decode_upload(&UploadedImage::new("makanan.png", buf)).unwrap()
}

#[test]
fn analyze_produces_a_label_from_the_set_with_its_table_entry() {
    let table = CalorieTable::parse(REFERENCE.as_bytes()).unwrap();
    let labels = three_labels();
    let estimator =
        Estimator::from_parts(Classifier::new(tiny_network()), labels.clone(), table.clone())
            .unwrap();

    let estimate = estimator.analyze(&sample_photo()).unwrap();

    assert!(labels.names().contains(&estimate.label));
    assert!((0.0..=1.0).contains(&estimate.confidence));
    let entry = table.lookup(&estimate.label).unwrap();
    assert_eq!(estimate.min_kcal, entry.min_kcal);
    assert_eq!(estimate.max_kcal, entry.max_kcal);
    assert!(!estimate.display_name.contains('_'));
}

#[test]
fn label_count_must_match_the_network_output() {
    let table = CalorieTable::parse(REFERENCE.as_bytes()).unwrap();
    let labels = LabelSet::new(vec!["bakso".to_owned(), "rendang".to_owned()]).unwrap();

    match Estimator::from_parts(Classifier::new(tiny_network()), labels, table) {
        Err(Error::DataIntegrity(msg)) => assert!(msg.contains("mismatch"), "was: {}", msg),
        other => panic!("expected DataIntegrity, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn every_label_must_have_a_calorie_entry() {
    // "sate" is missing from this table.
    let table =
        CalorieTable::parse(b"label,kalori_min_100g,kalori_max_100g\nbakso,80,150\nrendang,190,290\n")
            .unwrap();

    match Estimator::from_parts(Classifier::new(tiny_network()), three_labels(), table) {
        Err(Error::DataIntegrity(msg)) => assert!(msg.contains("sate"), "was: {}", msg),
        other => panic!("expected DataIntegrity, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn non_softmax_output_is_rejected() {
    let mut network = tiny_network();
    network.layers.last_mut().unwrap().activator = Activation::Sigmoid;
    let table = CalorieTable::parse(REFERENCE.as_bytes()).unwrap();

    assert!(matches!(
        Estimator::from_parts(Classifier::new(network), three_labels(), table),
        Err(Error::DataIntegrity(_))
    ));
}

#[test]
fn missing_model_artifact_is_fatal_as_model_unavailable() {
    let missing = Path::new("does/not/exist/kaloriku_net.json");
    let result = Estimator::load(
        missing,
        Path::new("model/class_names.json"),
        Path::new("data/kalori_fatsecret.csv"),
    );
    assert!(matches!(result, Err(Error::ModelUnavailable { .. })));
}

#[test]
fn load_assembles_everything_from_disk() {
    let dir = std::env::temp_dir().join(format!("kaloriku-estimator-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let model_path = dir.join("net.json");
    let labels_path = dir.join("class_names.json");
    let csv_path = dir.join("kalori.csv");

    tiny_network().save_json(&model_path).unwrap();
    std::fs::write(&labels_path, r#"["bakso","rendang","sate"]"#).unwrap();
    std::fs::write(&csv_path, REFERENCE).unwrap();

    let estimator = Estimator::load(&model_path, &labels_path, &csv_path).unwrap();
    assert_eq!(estimator.labels().len(), 3);
    assert_eq!(estimator.input_shape().flat_len(), 12);

    let estimate = estimator.analyze(&sample_photo()).unwrap();
    assert!((0.0..=1.0).contains(&estimate.confidence));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn artifact_with_inconsistent_shapes_is_rejected() {
    let dir = std::env::temp_dir().join(format!("kaloriku-badnet-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let model_path = dir.join("net.json");

    // Declared 4x4 input (48 values) but the first layer only takes 12.
    let mut network = tiny_network();
    network.metadata.input = InputShape {
        width: 4,
        height: 4,
    };
    network.save_json(&model_path).unwrap();

    assert!(matches!(
        Network::load_json(&model_path),
        Err(Error::ModelUnavailable { .. })
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
