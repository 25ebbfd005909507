use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "cucumber-results",
    version,
    about = "Ingest Cucumber JSON test results and render build reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding ingested builds
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Path to config file (default: cucumber-results.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a Cucumber JSON payload as a new build
    Ingest {
        /// Path to the Cucumber JSON file
        #[arg(short, long)]
        input: String,

        /// CI job name
        #[arg(long)]
        job_name: String,

        /// CI build number
        #[arg(long)]
        build_number: String,

        /// Link back to the CI build page
        #[arg(long)]
        build_url: Option<String>,

        /// Branch under test
        #[arg(long)]
        branch: Option<String>,

        /// Commit under test
        #[arg(long)]
        commit: Option<String>,
    },

    /// List ingested builds, oldest first
    List {
        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Show one build in full detail
    Show {
        /// Build id
        #[arg(long)]
        id: String,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Render a report for one build
    Report {
        /// Build id
        #[arg(long)]
        id: String,

        /// Output format: console, html, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render the HTML index page over all builds
    ReportIndex {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `cucumber-results.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_console(),
        }
    }
}

// Serde default helpers
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_console() -> String {
    "console".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("cucumber-results.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the data directory: CLI flag > config file > default.
pub fn resolve_data_dir(cli_value: Option<&str>, config: &AppConfig) -> String {
    cli_value
        .map(str::to_string)
        .unwrap_or_else(|| config.storage.data_dir.clone())
}

/// Resolve an output format: CLI flag > config file > default.
pub fn resolve_format(cli_value: Option<&str>, config: &AppConfig) -> String {
    cli_value
        .map(str::to_string)
        .unwrap_or_else(|| config.report.format.clone())
}
