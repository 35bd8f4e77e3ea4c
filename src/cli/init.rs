//! Init command implementation
//!
//! Writes a ready-to-run `khouse.toml` and `.env.example`.

use super::output::Output;
use super::InitVariant;
use std::fs;
use std::path::Path;

/// Result of the init operation
#[derive(Debug)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// khouse.toml already exists
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: std::path::PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
    /// Widgets to enable
    pub variant: InitVariant,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing K-House 71 site");

    let base_path = &config.path;
    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.error(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
        output.created("directory", &base_path.display().to_string());
    }

    let config_path = base_path.join("khouse.toml");
    if config_path.exists() && !config.force {
        output.warning("khouse.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    output.subheader("Creating configuration files");

    let toml_content = generate_khouse_toml(&config);
    if let Err(e) = write_file(&config_path, &toml_content, config.force) {
        output.error(&format!("Failed to create khouse.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", "khouse.toml");

    let env_example_path = base_path.join(".env.example");
    if env_example_path.exists() && !config.force {
        output.skipped(".env.example", "already exists");
    } else if let Err(e) = write_file(&env_example_path, &generate_env_example(), config.force) {
        output.error(&format!("Failed to create .env.example: {}", e));
        return InitResult::Error(e.to_string());
    } else {
        output.created("env", ".env.example");
    }

    let gitignore_path = base_path.join(".gitignore");
    if !gitignore_path.exists() {
        if let Err(e) = write_file(&gitignore_path, &generate_gitignore(), false) {
            output.warning(&format!("Failed to create .gitignore: {}", e));
        } else {
            output.created("file", ".gitignore");
        }
    }

    output.complete("K-House 71 site initialized successfully!");

    output.header("Next Steps");
    output.newline();
    if config.variant.uses_ai() {
        output.info("1. Add your Gemini API key:");
        output.command("cp .env.example .env");
        output.command("# Edit .env and set GEMINI_API_KEY");
        output.newline();
        output.info("2. Start the server:");
    } else {
        output.info("1. Start the server:");
    }
    output.command("khouse-server");
    output.newline();

    output.hint(&format!(
        "Site will be available at http://{}:{}",
        config.host, config.port
    ));
    output.hint("Without an API key the AI widgets answer with a fixed error message");

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(());
    }
    fs::write(path, content)
}

fn generate_khouse_toml(config: &InitConfig) -> String {
    let (room_matcher, chatbot, reservation) = config.variant.features();

    format!(
        r#"# K-House 71 site configuration
# Changes to [site] are picked up while the server runs.

[server]
host = "{host}"
port = {port}
log_level = "info"
# plain or json
log_format = "plain"

[ai]
enabled = {ai}
api_base = "https://generativelanguage.googleapis.com/v1beta"
model = "gemini-2.5-flash-preview-09-2025"
# Name of the environment variable holding the key
api_key_env = "GEMINI_API_KEY"
# timeout_secs = 30

[site]
# th, en, jp, cn or ar
default_language = "en"
promo_delay_ms = 2000
reservation_delay_ms = 1500

[site.features]
room_matcher = {room_matcher}
chatbot = {chatbot}
reservation = {reservation}

[session]
cookie_name = "khouse_session"
idle_minutes = 60
secure = false
max_visitors = 10000
"#,
        host = config.host,
        port = config.port,
        ai = config.variant.uses_ai(),
        room_matcher = room_matcher,
        chatbot = chatbot,
        reservation = reservation,
    )
}

fn generate_env_example() -> String {
    r#"# K-House 71 Environment Variables
# =================================
# Copy this file to .env and fill in the values.

# Gemini API key for the room matcher and chatbot
GEMINI_API_KEY=

# Optional: Logging level, overrides server.log_level
# RUST_LOG=info,khouse=debug
"#
    .to_string()
}

fn generate_gitignore() -> String {
    r#"# Environment
.env
.env.local

# Rust
/target/

# OS
.DS_Store
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::toml_config::KHouseConfig;
    use tempfile::TempDir;

    fn create_test_config(temp_dir: &TempDir, variant: InitVariant) -> InitConfig {
        InitConfig {
            path: temp_dir.path().to_path_buf(),
            force: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
            variant,
        }
    }

    #[test]
    fn test_generated_toml_parses() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(&temp_dir, InitVariant::All);
        let parsed: KHouseConfig = toml::from_str(&generate_khouse_toml(&config)).unwrap();

        assert_eq!(parsed.server.port, 3000);
        assert!(parsed.ai.enabled);
        assert_eq!(parsed.ai.api_key_env, "GEMINI_API_KEY");
        assert!(parsed.site.features.room_matcher);
        assert!(parsed.site.features.chatbot);
        assert!(parsed.site.features.reservation);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_reservation_variant_disables_ai() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(&temp_dir, InitVariant::Reservation);
        let parsed: KHouseConfig = toml::from_str(&generate_khouse_toml(&config)).unwrap();

        assert!(!parsed.ai.enabled);
        assert!(!parsed.site.features.room_matcher);
        assert!(!parsed.site.features.chatbot);
        assert!(parsed.site.features.reservation);
    }

    #[test]
    fn test_init_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(&temp_dir, InitVariant::All);

        let result = run(config, &Output::no_color());
        assert!(matches!(result, InitResult::Success));
        assert!(temp_dir.path().join("khouse.toml").exists());
        assert!(temp_dir.path().join(".env.example").exists());
        assert!(temp_dir.path().join(".gitignore").exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("khouse.toml"), "# mine").unwrap();

        let result = run(create_test_config(&temp_dir, InitVariant::All), &Output::no_color());
        assert!(matches!(result, InitResult::AlreadyExists));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("khouse.toml")).unwrap(),
            "# mine"
        );

        let mut config = create_test_config(&temp_dir, InitVariant::All);
        config.force = true;
        assert!(matches!(run(config, &Output::no_color()), InitResult::Success));
        assert!(fs::read_to_string(temp_dir.path().join("khouse.toml"))
            .unwrap()
            .contains("[site.features]"));
    }
}
