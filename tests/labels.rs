use kaloriku::labels::display_name;
use kaloriku::{Error, LabelSet};

#[test]
fn labels_keep_their_load_order() {
    let labels = LabelSet::new(vec![
        "bakso".to_owned(),
        "ayam_goreng".to_owned(),
        "rendang".to_owned(),
    ])
    .unwrap();

    assert_eq!(labels.len(), 3);
    assert_eq!(labels.get(0), Some("bakso"));
    assert_eq!(labels.get(1), Some("ayam_goreng"));
    assert_eq!(labels.get(2), Some("rendang"));
    assert_eq!(labels.get(3), None);
}

#[test]
fn empty_and_duplicate_labels_are_rejected() {
    assert!(matches!(
        LabelSet::new(vec![]),
        Err(Error::DataIntegrity(_))
    ));
    assert!(LabelSet::new(vec!["rendang".to_owned(), "  ".to_owned()]).is_err());
    assert!(LabelSet::new(vec!["rendang".to_owned(), "rendang".to_owned()]).is_err());
}

#[test]
fn display_names_are_prettified() {
    assert_eq!(display_name("nasi_goreng"), "Nasi Goreng");
    assert_eq!(display_name("rendang"), "Rendang");
    assert_eq!(display_name("gado_gado"), "Gado Gado");
    assert_eq!(display_name("telur_balado"), "Telur Balado");
}
