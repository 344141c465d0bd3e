//! Tests for configuration system

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::models::config::PartialSettings;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_partial_settings_merge() {
        let mut base = PartialSettings::default();
        base.root_path = Some(PathBuf::from("/base/path"));
        base.exclude_patterns = Some(vec!["base_exclude".to_string()]);

        let override_settings = PartialSettings {
            root_path: Some(PathBuf::from("/override/path")),
            max_depth: Some(5),
            ..Default::default()
        };

        base.merge_from(override_settings);

        assert_eq!(base.root_path, Some(PathBuf::from("/override/path")));
        assert_eq!(base.exclude_patterns, Some(vec!["base_exclude".to_string()]));
        assert_eq!(base.max_depth, Some(5));
    }

    #[test]
    fn test_partial_settings_to_settings() {
        let partial = PartialSettings {
            root_path: Some(PathBuf::from("/custom/path")),
            exclude_patterns: Some(vec!["custom_exclude".to_string()]),
            max_depth: Some(3),
            template: Some("detailed".to_string()),
            cache_enabled: Some(false),
            ..Default::default()
        };

        let settings = partial.to_settings();

        // Check that specified values are used
        assert_eq!(settings.root_path, PathBuf::from("/custom/path"));
        assert_eq!(settings.exclude_patterns, vec!["custom_exclude".to_string()]);
        assert_eq!(settings.max_depth, Some(3));
        assert_eq!(settings.template, "detailed");
        assert!(!settings.cache_enabled);

        // Check that default values are used for unspecified fields
        assert!(settings.parallel); // Default value
        assert_eq!(settings.structure_depth, 4); // Default value
    }

    #[test]
    fn test_config_builder() {
        let builder = ConfigBuilder::new();

        let partial1 = PartialSettings {
            root_path: Some(PathBuf::from("/path1")),
            exclude_patterns: Some(vec!["exclude1".to_string()]),
            ..Default::default()
        };

        let partial2 = PartialSettings {
            root_path: Some(PathBuf::from("/path2")),
            max_depth: Some(5),
            ..Default::default()
        };

        let settings = builder.merge(partial1).merge(partial2).build().unwrap();

        // Last merge wins for root_path
        assert_eq!(settings.root_path, PathBuf::from("/path2"));
        // First merge is preserved for exclude_patterns
        assert_eq!(settings.exclude_patterns, vec!["exclude1".to_string()]);
        // Second merge is applied for max_depth
        assert_eq!(settings.max_depth, Some(5));
    }

    #[test]
    fn test_config_builder_rejects_unknown_template() {
        let partial = PartialSettings {
            template: Some("glossy".to_string()),
            ..Default::default()
        };

        let err = ConfigBuilder::new().merge(partial).build().unwrap_err();
        assert!(matches!(
            err,
            crate::error::ScribeError::UnknownTemplate { .. }
        ));
    }

    #[test]
    fn test_file_config_source() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let config_content = r#"
            root_path = "/test/path"
            exclude_patterns = ["node_modules", "dist"]
            max_depth = 5
            template = "minimal"
            sections = ["overview", "license"]
            cache_enabled = false
            parallel = false
        "#;

        fs::write(&config_path, config_content).unwrap();

        let file_config = file::FileConfig::with_path(&config_path);
        assert!(file_config.is_available());
        assert_eq!(file_config.priority(), 20);

        let partial = file_config.load().unwrap();

        assert_eq!(partial.root_path, Some(PathBuf::from("/test/path")));
        assert_eq!(
            partial.exclude_patterns,
            Some(vec!["node_modules".to_string(), "dist".to_string()])
        );
        assert_eq!(partial.max_depth, Some(5));
        assert_eq!(partial.template.as_deref(), Some("minimal"));
        assert_eq!(
            partial.sections,
            Some(vec!["overview".to_string(), "license".to_string()])
        );
        assert_eq!(partial.cache_enabled, Some(false));
        assert_eq!(partial.parallel, Some(false));
    }

    #[test]
    fn test_file_config_not_found() {
        let file_config = file::FileConfig::with_path("/nonexistent/path/config.toml");
        assert!(!file_config.is_available());
        assert!(file_config.load().is_err());
    }

    #[test]
    fn test_cli_overrides_file_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "template = \"minimal\"\nmax_depth = 3\n").unwrap();

        let cli_partial = PartialSettings {
            template: Some("detailed".to_string()),
            ..Default::default()
        };

        let settings = ConfigBuilder::new()
            .add_config_file(&config_path)
            .unwrap()
            .merge(cli_partial)
            .build()
            .unwrap();

        assert_eq!(settings.template, "detailed");
        assert_eq!(settings.max_depth, Some(3));
    }
}
