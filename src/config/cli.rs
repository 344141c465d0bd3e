//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::PartialSettings;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub max_files: Option<usize>,
    pub max_file_size: Option<u64>,
    pub read_timeout_ms: Option<u64>,
    pub structure_depth: Option<usize>,
    pub template: Option<String>,
    pub sections: Option<Vec<String>>,
    pub output_file: Option<PathBuf>,
    pub no_cache: bool,
    pub cache_dir: Option<PathBuf>,
    pub no_parallel: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        let cli_args = CliArgs {
            path: args.path.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            max_depth: args.max_depth,
            max_files: args.max_files,
            max_file_size: args.max_file_size,
            read_timeout_ms: args.read_timeout,
            structure_depth: args.structure_depth,
            template: args.template.clone(),
            sections: if args.sections.is_empty() {
                None
            } else {
                Some(args.sections.clone())
            },
            output_file: args.output_file.clone(),
            no_cache: args.no_cache,
            cache_dir: args.cache_dir.clone(),
            no_parallel: args.no_parallel,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        };

        Self::new(cli_args)
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = &self.args.path {
            settings.root_path = Some(path.clone());
        }

        if let Some(exclude) = &self.args.exclude {
            settings.exclude_patterns = Some(exclude.clone());
        }

        if let Some(max_depth) = self.args.max_depth {
            settings.max_depth = Some(max_depth);
        }

        if let Some(max_files) = self.args.max_files {
            settings.max_files = Some(max_files);
        }

        if let Some(max_file_size) = self.args.max_file_size {
            settings.max_file_size = Some(max_file_size);
        }

        if let Some(read_timeout_ms) = self.args.read_timeout_ms {
            settings.read_timeout_ms = Some(read_timeout_ms);
        }

        if let Some(structure_depth) = self.args.structure_depth {
            settings.structure_depth = Some(structure_depth);
        }

        if let Some(template) = &self.args.template {
            settings.template = Some(template.clone());
        }

        if let Some(sections) = &self.args.sections {
            settings.sections = Some(sections.clone());
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        // Boolean flags
        if self.args.no_cache {
            settings.cache_enabled = Some(false);
        }

        if let Some(cache_dir) = &self.args.cache_dir {
            settings.cache_dir = Some(cache_dir.clone());
        }

        if self.args.no_parallel {
            settings.parallel = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_config_source() {
        let args = CliArgs {
            path: Some(PathBuf::from("/cli/path")),
            exclude: Some(vec!["cli_exclude".to_string()]),
            max_depth: Some(10),
            template: Some("detailed".to_string()),
            no_cache: true,
            verbose: true,
            ..Default::default()
        };

        let cli_config = CliConfig::new(args);
        assert!(cli_config.is_available());
        assert_eq!(cli_config.priority(), 30);

        let settings = cli_config.load().unwrap();

        assert_eq!(settings.root_path, Some(PathBuf::from("/cli/path")));
        assert_eq!(
            settings.exclude_patterns,
            Some(vec!["cli_exclude".to_string()])
        );
        assert_eq!(settings.max_depth, Some(10));
        assert_eq!(settings.template.as_deref(), Some("detailed"));
        assert_eq!(settings.cache_enabled, Some(false));
        assert_eq!(settings.verbose, Some(true));
    }

    #[test]
    fn test_empty_sections_stay_unset() {
        let cli_config = CliConfig::new(CliArgs::default());
        let settings = cli_config.load().unwrap();
        assert!(settings.sections.is_none());
        assert!(settings.root_path.is_none());
    }
}
