#[cfg(test)]
mod tests {
    use ideadash::app::generator::{IdeaForm, CONFIG_FILE_NAME};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_export_import_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let form = IdeaForm::sample();
        form.save_to_path(&path).unwrap();

        let loaded = IdeaForm::load_from_file(&path).unwrap();
        assert_eq!(loaded, form);
    }

    #[test]
    fn test_exported_file_contains_exactly_the_config_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut form = IdeaForm::sample();
        // Session-only state must not leak into the exported file
        form.idea_input = "secret scratchpad".to_string();
        form.input_urls = vec!["https://example.com".to_string()];
        form.save_to_path(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "appType",
                "architecture",
                "complexity",
                "dataStorage",
                "framework",
                "includeAuth",
                "mainFunctionalities",
                "programmingLanguage",
                "targetAudience",
            ]
        );
        assert_eq!(object["appType"], "Web App");
        assert_eq!(object["complexity"], 7);
        assert_eq!(object["includeAuth"], true);
    }

    #[test]
    fn test_malformed_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let result = IdeaForm::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.json");
        assert!(IdeaForm::load_from_file(&path).is_err());
    }

    #[test]
    fn test_out_of_range_complexity_is_accepted_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("extreme.json");
        std::fs::write(
            &path,
            r#"{"appType":"Web App","complexity":50,"includeAuth":false}"#,
        )
        .unwrap();

        let loaded = IdeaForm::load_from_file(&path).unwrap();
        assert_eq!(loaded.complexity, 50);
        assert!(loaded.assemble_prompt().contains("50/10"));
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.json");
        std::fs::write(&path, r#"{"programmingLanguage":"Ruby"}"#).unwrap();

        let loaded = IdeaForm::load_from_file(&path).unwrap();
        assert_eq!(loaded.programming_language, "Ruby");
        assert_eq!(loaded.app_type, "");
        assert_eq!(loaded.complexity, 5);
        assert!(!loaded.include_auth);
        assert!(loaded.main_functionalities.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("extra.json");
        std::fs::write(
            &path,
            r#"{"appType":"IoT App","futureField":{"nested":true}}"#,
        )
        .unwrap();

        let loaded = IdeaForm::load_from_file(&path).unwrap();
        assert_eq!(loaded.app_type, "IoT App");
    }
}
