use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use super::*;
use crate::model::ExportCategory;

const BUNDLE_JSON: &str = r#"{
    "traffic": { "requests": 120, "bytes": 2048 },
    "protocol": { "protocols": [ { "name": "HTTP/2", "requests": 7 } ] }
}"#;

fn fetch_request(category: ExportCategory) -> FetchRequest {
    FetchRequest {
        category,
        zone_id: "zone".to_string(),
        account_tag: None,
        start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    }
}

mod json_source_tests {
    use super::*;

    #[tokio::test]
    async fn serves_present_categories() {
        let source = JsonFileDataSource::from_json(BUNDLE_JSON).unwrap();

        let traffic = source.fetch(fetch_request(ExportCategory::Traffic)).await.unwrap();
        assert!(matches!(traffic, Some(CategoryRecord::Traffic(r)) if r.requests == 120));

        let protocol = source.fetch(fetch_request(ExportCategory::Protocol)).await.unwrap();
        match protocol {
            Some(CategoryRecord::Protocol(r)) => assert_eq!(r.protocols[0].count, 7),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn absent_category_is_none() {
        let source = JsonFileDataSource::from_json(BUNDLE_JSON).unwrap();
        let geo = source.fetch(fetch_request(ExportCategory::Geo)).await.unwrap();
        assert!(geo.is_none());
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, BUNDLE_JSON).unwrap();

        let source = JsonFileDataSource::load(&path).await.unwrap();
        assert!(source.bundle().has(ExportCategory::Traffic));
    }

    #[tokio::test]
    async fn missing_file_is_file_access_error() {
        let dir = TempDir::new().unwrap();
        let err = JsonFileDataSource::load(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReportError::FileAccess { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = JsonFileDataSource::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ReportError::JsonParse(_)));
    }
}

mod disk_tests {
    use super::*;

    #[test]
    fn longest_mount_point_wins() {
        let mounts = [
            (Path::new("/"), 10),
            (Path::new("/home"), 20),
            (Path::new("/home/user/data"), 30),
        ];
        let available = available_on(Path::new("/home/user/reports"), mounts);
        assert_eq!(available, Some(20));
    }

    #[test]
    fn no_matching_mount_is_unknown() {
        let mounts = [(Path::new("/mnt/usb"), 10)];
        assert_eq!(available_on(Path::new("/srv/out"), mounts), None);
    }

    #[test]
    fn missing_output_dir_resolves_to_existing_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        let resolved = existing_ancestor(&nested).unwrap();
        assert_eq!(resolved, dunce::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn zero_bytes_always_fit() {
        let dir = TempDir::new().unwrap();
        assert!(DiskSpaceChecker::new(dir.path()).has_free_space(0));
    }
}

mod renderer_tests {
    use super::*;

    #[tokio::test]
    async fn writes_into_created_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("reports");
        let renderer = HtmlFileRenderer::new(&out);

        let path = renderer.render("<html></html>", "r.html").await.unwrap();

        assert_eq!(path, out.join("r.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
        assert_eq!(renderer.extension(), "html");
    }
}
