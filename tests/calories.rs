use kaloriku::{CalorieEntry, CalorieTable, Error, LabelSet};

const REFERENCE: &str = "label,kalori_min_100g,kalori_max_100g\n\
                         rendang,190,290\n\
                         nasi_goreng,160,250\n\
                         sate,200,300\n";

#[test]
fn parses_the_reference_format_and_looks_up_exact_matches() {
    let table = CalorieTable::parse(REFERENCE.as_bytes()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.lookup("rendang").unwrap(),
        CalorieEntry {
            min_kcal: 190,
            max_kcal: 290
        }
    );
    assert!(table.contains("sate"));
}

#[test]
fn unknown_label_is_a_typed_error() {
    let table = CalorieTable::parse(REFERENCE.as_bytes()).unwrap();
    match table.lookup("pizza") {
        Err(Error::UnknownLabel(label)) => assert_eq!(label, "pizza"),
        other => panic!("expected UnknownLabel, got {:?}", other),
    }
}

#[test]
fn header_is_optional() {
    let table = CalorieTable::parse(b"rendang,190,290\nsate,200,300\n").unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn quoted_labels_with_commas_are_handled() {
    let table =
        CalorieTable::parse(b"label,kalori_min_100g,kalori_max_100g\n\"nasi, uduk\",150,220\n")
            .unwrap();
    assert!(table.contains("nasi, uduk"));
}

#[test]
fn blank_lines_are_skipped() {
    let table =
        CalorieTable::parse(b"label,kalori_min_100g,kalori_max_100g\n\nrendang,190,290\n\n")
            .unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn malformed_rows_fail_loading() {
    // Wrong column count.
    assert!(CalorieTable::parse(b"rendang,190\n").is_err());
    // Non-numeric kcal outside the header row.
    assert!(CalorieTable::parse(b"rendang,190,290\nsate,banyak,300\n").is_err());
    // Inverted range.
    assert!(CalorieTable::parse(b"rendang,300,190\n").is_err());
    // Duplicate label.
    assert!(CalorieTable::parse(b"rendang,190,290\nrendang,100,200\n").is_err());
    // Nothing but a header.
    assert!(CalorieTable::parse(b"label,kalori_min_100g,kalori_max_100g\n").is_err());
}

#[test]
fn validation_names_every_missing_label() {
    let table = CalorieTable::parse(REFERENCE.as_bytes()).unwrap();
    let labels = LabelSet::new(vec![
        "rendang".to_owned(),
        "gudeg".to_owned(),
        "bakso".to_owned(),
    ])
    .unwrap();

    match table.validate_labels(&labels) {
        Err(Error::DataIntegrity(msg)) => {
            assert!(msg.contains("gudeg"), "message was: {}", msg);
            assert!(msg.contains("bakso"), "message was: {}", msg);
            assert!(!msg.contains("rendang"), "message was: {}", msg);
        }
        other => panic!("expected DataIntegrity, got {:?}", other),
    }
}

#[test]
fn validation_passes_when_every_label_is_covered() {
    let table = CalorieTable::parse(REFERENCE.as_bytes()).unwrap();
    let labels = LabelSet::new(vec!["rendang".to_owned(), "sate".to_owned()]).unwrap();
    assert!(table.validate_labels(&labels).is_ok());
}
