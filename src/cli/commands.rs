//! Command implementations

use super::Args;
use crate::config::{cli::CliConfig, ConfigBuilder, ConfigSource};
use crate::core::{CancelToken, Generator};
use crate::error::Result;
use crate::models::Settings;
use crate::output::{create_writer, report_warnings, ProgressReporter};
use crate::render::Template;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze the project and generate the document
    Generate(Args),
    /// Initialize a default configuration file
    Init,
    /// List the available templates
    Templates,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        if args.list_templates {
            return Command::Templates;
        }
        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Generate(args) => generate(args),
            Command::Init => init(),
            Command::Templates => templates(),
        }
    }

    /// Run the command and map errors to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(_) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());

                match err.severity() {
                    crate::error::ErrorSeverity::Warning => 0,
                    crate::error::ErrorSeverity::Error => 1,
                    crate::error::ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}

/// Resolve settings and run the full generation pipeline
fn generate(args: &Args) -> Result<()> {
    let cli_config = CliConfig::from_args(args);
    let partial_settings = cli_config.load()?;

    let config_builder = ConfigBuilder::new();
    let config_builder = if let Some(config_path) = cli_config.config_path() {
        config_builder.add_config_file(config_path)?
    } else {
        config_builder.try_add_default_config_file()
    };

    // CLI settings win over file and environment sources
    let settings = config_builder.merge(partial_settings).build()?;

    run_generation(settings)
}

/// Run the generator with progress reporting and write the output
fn run_generation(settings: Settings) -> Result<()> {
    let generator = Generator::new(settings.clone())?;

    if !settings.quiet {
        eprintln!(
            "{} v{} - analyzing {}",
            crate::NAME,
            crate::VERSION,
            settings.root_path.display()
        );
    }

    let cancel = CancelToken::new();
    let show_progress = settings.show_progress && !settings.quiet;

    let generated = if show_progress {
        let reporter = ProgressReporter::new(false, settings.verbose);
        let generated = generator.generate_with_progress(&cancel, |current, total, message| {
            reporter.update(current, total, message);
        })?;
        reporter.finish(&format!(
            "analyzed {} files",
            generated.analysis.provenance.files_visited
        ));
        generated
    } else {
        generator.generate(&cancel)?
    };

    let writer = create_writer(settings.output_file.as_ref());
    writer.write(&generated.document)?;

    // Warnings go to stderr, separate from the document body
    report_warnings(&generated.analysis.warnings, settings.use_colors);

    if !settings.quiet {
        let provenance = &generated.analysis.provenance;
        eprintln!();
        eprintln!("Files visited: {}", provenance.files_visited);
        eprintln!(
            "Cache hit ratio: {:.0}%",
            provenance.cache_hit_ratio * 100.0
        );
        eprintln!("Duration: {} ms", provenance.duration.as_millis());
        if !provenance.complete {
            eprintln!("Analysis was cancelled before completion; the document is partial.");
        }
        if let Some(output_file) = &settings.output_file {
            eprintln!("Document written to {}", output_file.display());
        }
    }

    Ok(())
}

/// Create a default configuration file in the current directory
fn init() -> Result<()> {
    let config_path = std::path::PathBuf::from(".scribe.toml");

    if config_path.exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    crate::config::parser::create_default_config(&config_path)?;

    println!("Created default configuration file at: {}", config_path.display());
    println!("\nEdit this file to configure Scribe. Common options:");
    println!("  - root_path: project directory to analyze");
    println!("  - exclude_patterns: paths to skip during the walk");
    println!("  - template: document template (standard, minimal, detailed)");
    println!("  - sections: ordered list of sections to render");
    println!("  - output_file: where to write the document");

    Ok(())
}

/// Print the available templates and their default sections
fn templates() -> Result<()> {
    println!("Available templates:\n");
    for name in Template::AVAILABLE {
        let template = Template::builtin(name)?;
        let sections: Vec<&str> = template
            .default_sections()
            .iter()
            .map(|section| section.as_str())
            .collect();
        println!("  {:<10} {}", name, sections.join(", "));
    }
    Ok(())
}
