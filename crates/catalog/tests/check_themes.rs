//! Descriptor checks over temporary theme directories.

#[cfg(test)]
mod tests {
    use std::fs;

    use catalog::{CheckConfig, Error, Finding, check_themes};
    use tempfile::TempDir;

    fn setup() -> (TempDir, CheckConfig) {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("themes")).unwrap();
        fs::create_dir(dir.path().join("previews")).unwrap();
        let config = CheckConfig {
            themes_dir: dir.path().join("themes"),
            previews_dir: dir.path().join("previews"),
        };
        (dir, config)
    }

    const FULL: &str = r##"{
        "manifest": {"name": "Dark", "author": "nixietab", "license": "MIT"},
        "palette": {"Window": "#1e1e1e", "Button": "#2d2d2d"},
        "stylesheet": "QPushButton { border-radius: 4px; }",
        "background_image_base64": "iVBORw0KGgo="
    }"##;

    #[test]
    fn complete_theme_with_preview_is_clean() {
        let (_dir, config) = setup();
        fs::write(config.themes_dir.join("Dark.json"), FULL).unwrap();
        fs::write(config.previews_dir.join("Dark.png"), b"png").unwrap();

        let report = check_themes(&config).unwrap();
        assert_eq!(report.themes.len(), 1);
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn missing_preview_is_a_warning() {
        let (_dir, config) = setup();
        fs::write(config.themes_dir.join("Dark.json"), FULL).unwrap();

        let report = check_themes(&config).unwrap();
        assert_eq!(report.error_count(), 0);
        let findings = &report.themes[0].findings;
        assert_eq!(findings.len(), 1);
        assert!(matches!(&findings[0], Finding::Warning(m) if m.contains("Dark.png")));
    }

    #[test]
    fn invalid_json_is_reported_not_fatal() {
        let (_dir, config) = setup();
        fs::write(config.themes_dir.join("Invalid.json"), "not json").unwrap();
        fs::write(config.themes_dir.join("Dark.json"), FULL).unwrap();
        fs::write(config.previews_dir.join("Dark.png"), b"png").unwrap();

        let report = check_themes(&config).unwrap();
        assert_eq!(report.themes.len(), 2);
        assert_eq!(report.error_count(), 1);
        assert!(report.themes[1].file.ends_with("Invalid.json"));
        assert!(report.themes[1].findings[0].is_error());
    }

    #[test]
    fn unpublished_theme_does_not_need_preview() {
        let (_dir, config) = setup();
        fs::write(
            config.themes_dir.join("Draft.json"),
            r#"{"palette": {}, "stylesheet": "", "background_image_base64": ""}"#,
        )
        .unwrap();

        let report = check_themes(&config).unwrap();
        let messages: Vec<_> = report.themes[0]
            .findings
            .iter()
            .map(Finding::message)
            .collect();
        assert_eq!(messages, vec!["no manifest; theme will not be published"]);
    }

    #[test]
    fn missing_themes_dir_is_not_found() {
        let dir = TempDir::new().unwrap();
        let config = CheckConfig {
            themes_dir: dir.path().join("nope"),
            previews_dir: dir.path().join("previews"),
        };
        assert!(matches!(
            check_themes(&config),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn non_object_document_is_a_schema_finding() {
        let (_dir, config) = setup();
        fs::write(config.themes_dir.join("List.json"), "[]").unwrap();

        let report = check_themes(&config).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.themes[0].findings,
            vec![Finding::Schema("theme document must be a JSON object".into())]
        );
    }
}
