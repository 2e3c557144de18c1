use super::*;

#[test]
fn extents_take_the_largest_row_and_col() {
    let doc: GeometryDoc = serde_json::from_str(
        r#"{
            "1": { "Row": 0, "Col": 3, "Extra": true },
            "2": { "Row": 5, "Col": 1 },
            "3": { "Row": 2, "Col": 17 },
            "4": { "Col": -4 }
        }"#,
    )
    .unwrap();
    assert_eq!(doc.extents(), (5, 17));
    assert_eq!(GeometryDoc::default().extents(), (0, 0));
}

#[test]
fn from_documents_partitions_by_scan_code() {
    let config: KeyboardConfig = serde_json::from_str(
        r#"{
            "leds": [
                { "id": 3, "scanCode": "0x02" },
                { "id": 1, "scanCode": "0x01" },
                { "id": 9 },
                { "id": 7, "scanCode": null }
            ]
        }"#,
    )
    .unwrap();
    let doc: GeometryDoc = serde_json::from_str(r#"{ "1": { "Row": 1, "Col": 2 } }"#).unwrap();

    let geom = KeyboardGeometry::from_documents(&config, &doc);
    assert_eq!(geom.max_row, 1);
    assert_eq!(geom.max_col, 2);
    assert_eq!(geom.keyed, vec![1, 3]);
    assert_eq!(geom.blank, vec![7, 9]);
    assert_eq!(geom.all_ids(), vec![1, 3, 7, 9]);
    assert_eq!(geom.led_count(), 4);
}

#[test]
fn new_sorts_and_dedups() {
    let geom = KeyboardGeometry::new(0, 0, vec![5, 2, 5], vec![8, 8, 6]);
    assert_eq!(geom.keyed, vec![2, 5]);
    assert_eq!(geom.blank, vec![6, 8]);
}
