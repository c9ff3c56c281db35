//! WebTerm executor service
//!
//! Serves `POST /api/command` over a sandboxed workspace directory, or
//! with `--repl` runs the same commands in a local shell.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context as _;
use tracing::info;

use webterm::config::Config;
use webterm::server::{repl, CommandExecutor, CommandServer};
use webterm::{init, init_with_config};

#[derive(Debug, Default)]
struct ServerArgs {
    config_path: Option<PathBuf>,
    bind: Option<String>,
    workspace: Option<PathBuf>,
    debug: bool,
    repl: bool,
}

impl ServerArgs {
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut server_args = ServerArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let path = args.get(i + 1).context("Missing config file path")?;
                    server_args.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                "--bind" | "-b" => {
                    let bind = args.get(i + 1).context("Missing bind address")?;
                    server_args.bind = Some(bind.clone());
                    i += 1;
                }
                "--workspace" | "-w" => {
                    let dir = args.get(i + 1).context("Missing workspace directory")?;
                    server_args.workspace = Some(PathBuf::from(dir));
                    i += 1;
                }
                "--debug" | "-d" => {
                    server_args.debug = true;
                }
                "--repl" | "-r" => {
                    server_args.repl = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("webterm-server v{}", webterm::VERSION);
                    process::exit(0);
                }
                arg => anyhow::bail!("Unknown option: {}", arg),
            }
            i += 1;
        }

        Ok(server_args)
    }
}

fn print_help() {
    println!("webterm-server - sandboxed command executor for WebTerm");
    println!();
    println!("USAGE:");
    println!("    webterm-server [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>       Path to configuration file");
    println!("    -b, --bind <ADDR>         Listen address (default 127.0.0.1:5000)");
    println!("    -w, --workspace <DIR>     Sandbox directory (default ./workspace)");
    println!("    -r, --repl                Run commands from stdin instead of serving");
    println!("    -d, --debug               Enable debug logging");
    println!("    -h, --help                Print this help message");
    println!("    -V, --version             Print version information");
}

fn load_configuration(args: &ServerArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config_path {
        Some(path) => init_with_config(path)?,
        None => init()?,
    };
    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
    if let Some(workspace) = &args.workspace {
        config.server.workspace = workspace.clone();
    }
    config.validate()?;
    Ok(config)
}

fn run_repl(config: &Config) -> anyhow::Result<()> {
    let mut executor = CommandExecutor::from_config(&config.server)
        .map_err(|e| anyhow::anyhow!(webterm::handle_startup_error(&e)))?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(async {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        repl::run(&mut executor, stdin, tokio::io::stdout()).await
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = match ServerArgs::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            process::exit(1);
        }
    };

    let debug = args.debug
        || env::var("WEBTERM_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let env_filter =
        env::var("RUST_LOG").unwrap_or_else(|_| if debug { "debug" } else { "info" }.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Starting webterm-server v{}", webterm::VERSION);
    let config = load_configuration(&args)?;
    if args.repl {
        return run_repl(&config);
    }
    let server = CommandServer::from_config(&config.server)
        .map_err(|e| anyhow::anyhow!(webterm::handle_startup_error(&e)))?;
    server.run()?;
    Ok(())
}
