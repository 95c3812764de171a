//! File locations shared by the dashboard and the `generate-sample` binary,
//! which pulls this file in with `#[path]`.

/// Location of the clustered dataset, relative to the working directory.
pub const ARTIFACT_PATH: &str = "reports/amazon_music_clusters.csv";

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_artifact_path_is_relative_csv_under_reports() {
        let path = Path::new(ARTIFACT_PATH);
        assert!(path.is_relative());
        assert_eq!(path.parent(), Some(Path::new("reports")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
    }
}
