//! WebTerm - A terminal window backed by a remote command executor
//!
//! Opens the terminal window and forwards every submitted command to the
//! executor named by `client.endpoint`.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context as _;
use eframe::egui;
use tracing::{debug, error, info};

use webterm::config::Config;
use webterm::{init, init_with_config, WebTermApp};

/// Command-line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Executor endpoint override
    endpoint: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let path = args.get(i + 1).context("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                "--endpoint" | "-e" => {
                    let endpoint = args.get(i + 1).context("Missing endpoint URL")?;
                    app_args.endpoint = Some(endpoint.clone());
                    i += 1;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("WebTerm v{}", webterm::VERSION);
                    process::exit(0);
                }
                arg => anyhow::bail!("Unknown option: {}", arg),
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("WebTerm - {}", webterm::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    webterm [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>      Path to configuration file");
    println!("    -e, --endpoint <URL>     Executor base URL");
    println!("    -d, --debug              Enable debug logging");
    println!("    -h, --help               Print this help message");
    println!("    -V, --version            Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    WebTerm looks for config.toml (or config.json) in:");
    println!("    1. Path specified with --config or WEBTERM_CONFIG");
    println!("    2. <config dir>/webterm/");
    println!("    3. $XDG_CONFIG_HOME/webterm/");
    println!("    4. ~/.webterm/");
    println!("    5. ./.webterm/");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    WEBTERM_CONFIG      Path to configuration file");
    println!("    WEBTERM_ENDPOINT    Executor base URL");
    println!("    WEBTERM_DEBUG       Enable debug logging (1 or true)");
    println!("    RUST_LOG            Set logging level (error, warn, info, debug, trace)");
}

/// Install the tracing subscriber
fn init_logging(debug: bool) {
    let debug = debug
        || env::var("WEBTERM_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let log_level = if debug { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .compact()
        .init();
}

fn load_configuration(args: &AppArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config_path {
        Some(path) => init_with_config(path).map_err(|e| {
            eprintln!("{}", webterm::handle_startup_error(&e));
            e
        })?,
        None => init()?,
    };

    if let Some(endpoint) = &args.endpoint {
        debug!("Endpoint overridden on the command line: {}", endpoint);
        config.client.endpoint = endpoint.clone();
        config.validate()?;
    }

    Ok(config)
}

fn create_native_options(config: &Config) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("WebTerm")
            .with_app_id("webterm")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([320.0, 200.0]),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

fn main() -> anyhow::Result<()> {
    let args = match AppArgs::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            process::exit(1);
        }
    };

    init_logging(args.debug);
    info!("Starting WebTerm v{}", webterm::VERSION);

    let config = load_configuration(&args)?;
    let app = WebTermApp::new(&config)?;
    let native_options = create_native_options(&config);

    if let Err(e) = eframe::run_native(
        "WebTerm",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        error!("Application failed: {}", e);
        process::exit(1);
    }

    Ok(())
}
