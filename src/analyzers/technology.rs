//! Technology detection from extensions and marker files
//!
//! Classification applies an ordered rule set: extension rules map a file to
//! at most one language (first match wins), marker-file rules map well-known
//! file names to frameworks and tooling. A file contributes to exactly one
//! language but to any number of framework markers.

use super::{Contribution, FileAnalyzer};
use crate::models::FileDescriptor;

/// Ordered extension -> language rules; first match wins
const EXTENSION_RULES: &[(&str, &str)] = &[
    ("rs", "Rust"),
    ("py", "Python"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("js", "JavaScript"),
    ("jsx", "JavaScript"),
    ("mjs", "JavaScript"),
    ("cjs", "JavaScript"),
    ("go", "Go"),
    ("java", "Java"),
    ("kt", "Kotlin"),
    ("kts", "Kotlin"),
    ("rb", "Ruby"),
    ("php", "PHP"),
    ("cs", "C#"),
    ("cpp", "C++"),
    ("cc", "C++"),
    ("cxx", "C++"),
    ("hpp", "C++"),
    ("c", "C"),
    ("h", "C"),
    ("swift", "Swift"),
    ("scala", "Scala"),
    ("dart", "Dart"),
    ("ex", "Elixir"),
    ("exs", "Elixir"),
    ("erl", "Erlang"),
    ("hs", "Haskell"),
    ("lua", "Lua"),
    ("r", "R"),
    ("jl", "Julia"),
    ("zig", "Zig"),
    ("vue", "Vue"),
    ("svelte", "Svelte"),
    ("sh", "Shell"),
    ("bash", "Shell"),
    ("ps1", "PowerShell"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("css", "CSS"),
    ("scss", "CSS"),
    ("less", "CSS"),
    ("sql", "SQL"),
];

/// Marker file name -> framework/tooling rules
const MARKER_RULES: &[(&str, &str)] = &[
    ("package.json", "Node.js"),
    ("Cargo.toml", "Cargo"),
    ("pyproject.toml", "Python Packaging"),
    ("requirements.txt", "pip"),
    ("go.mod", "Go Modules"),
    ("manage.py", "Django"),
    ("next.config.js", "Next.js"),
    ("next.config.mjs", "Next.js"),
    ("nuxt.config.js", "Nuxt.js"),
    ("angular.json", "Angular"),
    ("vue.config.js", "Vue.js"),
    ("svelte.config.js", "Svelte"),
    ("gatsby-config.js", "Gatsby"),
    ("tailwind.config.js", "Tailwind CSS"),
    ("tsconfig.json", "TypeScript"),
    ("Dockerfile", "Docker"),
    ("docker-compose.yml", "Docker Compose"),
    ("docker-compose.yaml", "Docker Compose"),
    ("Makefile", "Make"),
    ("CMakeLists.txt", "CMake"),
    ("pom.xml", "Maven"),
    ("build.gradle", "Gradle"),
    ("build.gradle.kts", "Gradle"),
    ("Gemfile", "Bundler"),
    ("mix.exs", "Mix"),
    (".gitlab-ci.yml", "GitLab CI"),
    ("Jenkinsfile", "Jenkins"),
];

/// Detector for languages and framework markers
pub struct TechnologyDetector;

impl TechnologyDetector {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }

    /// Map an extension to a language via the ordered rule table
    pub fn language_for_extension(extension: &str) -> Option<&'static str> {
        EXTENSION_RULES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, language)| *language)
    }

    /// All framework markers implied by a file name
    pub fn frameworks_for_file(file_name: &str) -> Vec<&'static str> {
        MARKER_RULES
            .iter()
            .filter(|(marker, _)| *marker == file_name)
            .map(|(_, framework)| *framework)
            .collect()
    }
}

impl Default for TechnologyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAnalyzer for TechnologyDetector {
    fn name(&self) -> &'static str {
        "technology"
    }

    fn needs_content(&self, _descriptor: &FileDescriptor) -> bool {
        // Extension and marker rules only look at the path
        false
    }

    fn analyze(&self, descriptor: &FileDescriptor, _content: Option<&[u8]>) -> Contribution {
        let language = descriptor
            .extension
            .as_deref()
            .and_then(Self::language_for_extension)
            .map(|language| language.to_string());

        let frameworks = Self::frameworks_for_file(descriptor.file_name())
            .into_iter()
            .map(|framework| framework.to_string())
            .collect();

        Contribution {
            language,
            frameworks,
            ..Contribution::default()
        }
    }
}
