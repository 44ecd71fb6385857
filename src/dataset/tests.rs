//! Dataset Module Tests
//!
//! Validates how raw GeoJSON features become typed building records.
//!
//! ## Test Scopes
//! - **Parsing**: Document shape, ordering and skipped features.
//! - **Coercion**: Text and numeric properties stored in mixed JSON types.
//! - **Loading**: Reading from disk and reporting unreadable files.

#[cfg(test)]
mod tests {
    use crate::dataset::loader::{load_dataset, parse_dataset, record_from_feature};
    use crate::dataset::types::{DatasetError, Feature};
    use serde_json::json;
    use std::io::Write;
    use std::path::Path;

    fn feature(value: serde_json::Value) -> Feature {
        serde_json::from_value(value).unwrap()
    }

    // ============================================================
    // PARSING TESTS
    // ============================================================

    #[test]
    fn test_parse_dataset_keeps_file_order() {
        let raw = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"id": "B2", "street": "Main St"}, "geometry": null},
                {"type": "Feature", "properties": {"id": "B1", "street": "Elm St"}, "geometry": null},
                {"type": "Feature", "properties": {"id": "B2", "street": "Main St"}, "geometry": null}
            ]
        });

        let records = parse_dataset(raw.to_string().as_bytes()).unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["B2", "B1", "B2"]);
    }

    #[test]
    fn test_parse_dataset_without_features() {
        let records = parse_dataset(br#"{"type": "FeatureCollection"}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_dataset_rejects_invalid_json() {
        assert!(parse_dataset(b"{not json").is_err());
        assert!(parse_dataset(br#"{"features": 3}"#).is_err());
    }

    #[test]
    fn test_parse_dataset_skips_features_without_id() {
        let raw = json!({
            "features": [
                {"properties": {"street": "No Id St"}},
                {"properties": {"id": "", "street": "Blank Id St"}},
                {"properties": null},
                {"properties": {"id": "B1", "street": "Main St"}}
            ]
        });

        let records = parse_dataset(raw.to_string().as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "B1");
    }

    #[test]
    fn test_record_from_feature_missing_id_error() {
        let err = record_from_feature(7, feature(json!({"properties": {"street": "Main"}})))
            .unwrap_err();

        assert_eq!(err, DatasetError::MissingId { position: 7 });
        assert_eq!(err.to_string(), "feature #7 has no usable id");
    }

    // ============================================================
    // COERCION TESTS
    // ============================================================

    #[test]
    fn test_record_from_feature_full() {
        let record = record_from_feature(
            0,
            feature(json!({
                "type": "Feature",
                "properties": {
                    "id": "B1",
                    "number": "100",
                    "street": "Main St",
                    "postcode": "94105",
                    "height": 52.3,
                    "Percentage_vacant": 18.5,
                    "land_use": "office"
                },
                "geometry": {"type": "Polygon", "coordinates": [[[-122.4, 37.7], [-122.3, 37.7], [-122.4, 37.7]]]}
            })),
        )
        .unwrap();

        assert_eq!(record.id, "B1");
        assert_eq!(record.number.as_deref(), Some("100"));
        assert_eq!(record.street.as_deref(), Some("Main St"));
        assert_eq!(record.postcode.as_deref(), Some("94105"));
        assert_eq!(record.height_m, Some(52.3));
        assert_eq!(record.vacancy_pct, Some(18.5));
        assert_eq!(record.properties["land_use"], json!("office"));
        assert_eq!(record.geometry["type"], json!("Polygon"));
        assert_eq!(record.formatted_address(), "100 Main St 94105");
    }

    #[test]
    fn test_numeric_address_parts_become_text() {
        let record = record_from_feature(
            0,
            feature(json!({"properties": {"id": 42, "number": 100, "postcode": 94105}})),
        )
        .unwrap();

        assert_eq!(record.id, "42");
        assert_eq!(record.number.as_deref(), Some("100"));
        assert_eq!(record.postcode.as_deref(), Some("94105"));
        assert_eq!(record.street, None);
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let record = record_from_feature(
            0,
            feature(json!({"properties": {"id": "B1", "height": " 12.5 ", "Percentage_vacant": "7"}})),
        )
        .unwrap();

        assert_eq!(record.height_m, Some(12.5));
        assert_eq!(record.vacancy_pct, Some(7.0));
    }

    #[test]
    fn test_unusable_values_are_absent() {
        let record = record_from_feature(
            0,
            feature(json!({
                "properties": {
                    "id": "B1",
                    "number": null,
                    "street": ["Main"],
                    "height": "tall",
                    "Percentage_vacant": {"value": 3}
                }
            })),
        )
        .unwrap();

        assert_eq!(record.number, None);
        assert_eq!(record.street, None);
        assert_eq!(record.height_m, None);
        assert_eq!(record.vacancy_pct, None);
        assert!(record.geometry.is_null());
    }

    // ============================================================
    // LOADING TESTS
    // ============================================================

    #[tokio::test]
    async fn test_load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let raw = json!({
            "features": [
                {"properties": {"id": "B1", "number": "1", "street": "A St"}},
                {"properties": {"id": "B2", "number": "2", "street": "B St"}}
            ]
        });
        file.write_all(raw.to_string().as_bytes()).unwrap();

        let records = load_dataset(file.path()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].formatted_address(), "2 B St");
    }

    #[tokio::test]
    async fn test_load_dataset_missing_file() {
        let err = load_dataset(Path::new("/definitely/not/here.geojson"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to read dataset"));
    }

    #[tokio::test]
    async fn test_load_dataset_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3").unwrap();

        let err = load_dataset(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse dataset"));
    }
}
