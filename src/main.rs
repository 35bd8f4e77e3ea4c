//! khouse-server entry point
//!
//! - `khouse-server` - start the site server (default)
//! - `khouse-server init` - write a khouse.toml and .env.example
//! - `khouse-server config` - show or validate the configuration
//! - `khouse-server catalog check|show` - inspect the content catalog
//! - `khouse-server ask <text>` - send one question through the AI bridge

use anyhow::{bail, Context};
use khouse::cli::init::{self, InitConfig, InitResult};
use khouse::cli::output::Output;
use khouse::cli::{catalog, CatalogCommands, Cli, Commands};
use khouse::utils::toml_config::{ConfigError, KHouseConfig, LogFormat, ServerConfig};
use khouse::{create_app, AiBridge, AppState, KHouseConfigManager, LLMClientFactory, Provider, Widget};
use khouse_content::Catalog;
use owo_colors::OwoColorize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How often idle visitors are swept from memory.
const CLEANUP_PERIOD: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        None => serve(&cli.config, cli.verbose, &output).await,
        Some(Commands::Init {
            path,
            force,
            host,
            port,
            variant,
        }) => {
            let config = InitConfig {
                path,
                force,
                host,
                port,
                variant,
            };
            match init::run(config, &output) {
                InitResult::Success | InitResult::AlreadyExists => Ok(()),
                InitResult::Error(e) => bail!("Initialization failed: {}", e),
            }
        }
        Some(Commands::Config { full, validate }) => show_config(&cli.config, full, validate, &output),
        Some(Commands::Catalog(CatalogCommands::Check)) => {
            if catalog::check(&output) {
                output.complete("Catalog is consistent");
                Ok(())
            } else {
                bail!("Catalog check failed")
            }
        }
        Some(Commands::Catalog(CatalogCommands::Show { lang })) => {
            catalog::show(&lang, &output);
            Ok(())
        }
        Some(Commands::Ask { text, chat }) => ask(&cli.config, &text, chat, &output).await,
    }
}

fn init_tracing(server: &ServerConfig, verbose: bool) {
    let level = if verbose { "debug" } else { server.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("khouse={level},khouse_server={level},tower_http={level}"))
    });

    match server.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init(),
        LogFormat::Plain => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init(),
    }
}

fn build_bridge(config: &KHouseConfig) -> anyhow::Result<AiBridge> {
    let factory = LLMClientFactory::new(Provider::from_config(&config.ai, config.api_key()));
    let client = factory
        .create_default()
        .context("Failed to create the AI client")?;
    Ok(AiBridge::new(
        Arc::from(client),
        factory.default_provider().name(),
    ))
}

/// Configuration for one-shot commands; defaults when the file is absent.
fn load_or_default(path: &Path, output: &Output) -> anyhow::Result<KHouseConfig> {
    match KHouseConfig::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            output.warning(&format!(
                "{} not found, using default settings",
                path.display()
            ));
            Ok(KHouseConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

async fn serve(config_path: &Path, verbose: bool, output: &Output) -> anyhow::Result<()> {
    let mut manager = match KHouseConfigManager::new(config_path) {
        Ok(manager) => manager,
        Err(ConfigError::FileNotFound(path)) => {
            output.error(&format!("Configuration file {} not found", path.display()));
            output.hint("Create one with:");
            output.command("khouse-server init");
            bail!("Missing configuration file");
        }
        Err(e) => return Err(e).context("Failed to load configuration"),
    };

    let config = manager.config();
    init_tracing(&config.server, verbose);

    for warning in config.validate_with_warnings()? {
        tracing::warn!(kind = ?warning.kind, "{}", warning);
    }

    Catalog::validate().context("Content catalog is inconsistent")?;

    manager
        .start_watching()
        .context("Failed to watch the configuration file")?;

    let bridge = build_bridge(&config)?;
    tracing::info!(
        provider = bridge.provider_name(),
        model = bridge.model_name(),
        "AI bridge ready"
    );

    let session = config.session.clone();
    let state = AppState::new(manager, bridge);
    let cleanup = state.spawn_cleanup(CLEANUP_PERIOD);
    let app = create_app(state, &session);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        addr = %addr,
        default_language = %config.site.default_language,
        "K-House 71 site listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    cleanup.abort();
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

fn show_config(path: &Path, full: bool, validate: bool, output: &Output) -> anyhow::Result<()> {
    let config = KHouseConfig::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if validate {
        output.header("Validating configuration");
        let warnings = config.validate_with_warnings()?;
        output.success(&format!("{} is valid", path.display()));
        for warning in &warnings {
            output.warning(&warning.message);
        }
        return Ok(());
    }

    if full {
        let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
        println!("{}", rendered);
        return Ok(());
    }

    output.header("Configuration");
    output.kv("File", &path.display().to_string());
    output.kv("Listen", &config.bind_addr());
    output.kv("Default language", &config.site.default_language);

    output.subheader("AI");
    output.kv("Enabled", &config.ai.enabled.to_string());
    output.kv("Model", &config.ai.model);
    let key_state = if config.api_key().is_some() { "set" } else { "not set" };
    output.kv(&config.ai.api_key_env, key_state);

    output.subheader("Features");
    let features = config.site.features;
    output.kv("Room matcher", &features.room_matcher.to_string());
    output.kv("Chatbot", &features.chatbot.to_string());
    output.kv("Reservation", &features.reservation.to_string());

    output.hint("Use --full to print the whole file, --validate to check it");
    Ok(())
}

async fn ask(path: &Path, text: &str, chat: bool, output: &Output) -> anyhow::Result<()> {
    let config = load_or_default(path, output)?;
    let bridge = build_bridge(&config)?;
    let widget = if chat { Widget::Chat } else { Widget::Matcher };

    output.kv("Provider", bridge.provider_name());
    output.kv("Model", bridge.model_name());

    match bridge.ask(widget, text).await {
        Some(reply) => {
            output.kv("Outcome", &format!("{:?}", reply.outcome));
            output.newline();
            println!("{}", reply.text);
            Ok(())
        }
        None => bail!("The question is empty"),
    }
}
