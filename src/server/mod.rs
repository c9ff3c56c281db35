//! Bundled executor service
//!
//! A small HTTP service answering `POST /api/command` by running the
//! command inside a sandboxed [`Workspace`]. The terminal client talks to
//! it through [`crate::execution::http::HttpDispatcher`], but any service
//! honouring the same request/response shapes works.

pub mod nl;
pub mod repl;
pub mod system;
pub mod workspace;

use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tiny_http::{Header, Method, Request, Response, Server};

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::execution::{CommandRequest, CommandResponse, COMMAND_PATH};
pub use workspace::{Workspace, WorkspaceError, WorkspaceResult};

const HELP_TEXT: &str = "Available commands:
ls [path]        list directory contents
pwd              print the current directory
cd <path>        change directory
mkdir <path>     create a directory
rm <path>        remove a file or directory
cat <file>       print a file
touch <file>     create an empty file
mv <src> <dst>   move a file or directory
cp <src> <dst>   copy a file or directory
ps               show the busiest processes
stats            show CPU and memory usage
run <cmd...>     run a program in the current directory
help             show this help";

/// Runs commands against a workspace
pub struct CommandExecutor {
    workspace: Workspace,
    run_timeout: Duration,
}

impl CommandExecutor {
    /// Create an executor over `workspace`
    pub fn new(workspace: Workspace, run_timeout: Duration) -> Self {
        Self {
            workspace,
            run_timeout,
        }
    }

    /// Open the configured workspace
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let workspace = Self::open_workspace(&config.workspace)?;
        Ok(Self::new(
            workspace,
            Duration::from_secs(config.run_timeout_secs),
        ))
    }

    fn open_workspace(root: &Path) -> Result<Workspace> {
        Workspace::open(root).map_err(|e| Error::ServerStartFailed {
            bind: root.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// The sandbox commands run in
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Execute raw request text
    ///
    /// Natural-language phrasings are rewritten first; outputs of the
    /// resulting commands are joined with newlines.
    pub async fn execute(&mut self, raw: &str) -> String {
        let mut outputs = Vec::new();
        for command in nl::rewrite(raw) {
            outputs.push(self.execute_one(&command).await);
        }
        outputs.join("\n")
    }

    async fn execute_one(&mut self, command: &str) -> String {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some((&name, args)) = parts.split_first() else {
            return String::new();
        };
        debug!("Executing '{}' with {} argument(s)", name, args.len());

        let result = match name {
            "ls" => self.workspace.list_dir(args.first().copied().unwrap_or(".")),
            "pwd" => Ok(self.workspace.print_pwd()),
            "cd" => Ok(self
                .workspace
                .change_dir(args.first().copied().unwrap_or("."))),
            "mkdir" => arg(args, 0, "mkdir").and_then(|p| self.workspace.make_dir(p)),
            "rm" => arg(args, 0, "rm").and_then(|p| self.workspace.remove_path(p)),
            "cat" => arg(args, 0, "cat").and_then(|p| self.workspace.read_file(p)),
            "touch" => arg(args, 0, "touch").and_then(|p| self.workspace.touch_file(p)),
            "mv" => arg(args, 0, "mv")
                .and_then(|src| Ok((src, arg(args, 1, "mv")?)))
                .and_then(|(src, dst)| self.workspace.move_path(src, dst)),
            "cp" => arg(args, 0, "cp")
                .and_then(|src| Ok((src, arg(args, 1, "cp")?)))
                .and_then(|(src, dst)| self.workspace.copy_path(src, dst)),
            "ps" => Ok(system::list_processes(system::PROCESS_LIMIT).await),
            "stats" => Ok(system::system_stats().await),
            "run" => Ok(self
                .workspace
                .run_subprocess(&args.join(" "), self.run_timeout)
                .await),
            "help" => Ok(HELP_TEXT.to_string()),
            other => Ok(format!("Unknown command {}", other)),
        };

        result.unwrap_or_else(|e| {
            warn!("Command '{}' failed: {}", name, e);
            format!("Error: {}", e)
        })
    }
}

fn arg<'a>(args: &[&'a str], index: usize, command: &'static str) -> WorkspaceResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(WorkspaceError::MissingOperand(command))
}

/// HTTP front end for a [`CommandExecutor`]
pub struct CommandServer {
    server: Arc<Server>,
    executor: CommandExecutor,
}

impl CommandServer {
    /// Bind to `bind` and serve `executor`
    pub fn bind(bind: &str, executor: CommandExecutor) -> Result<Self> {
        let server = Server::http(bind).map_err(|e| Error::ServerStartFailed {
            bind: bind.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            server: Arc::new(server),
            executor,
        })
    }

    /// Bind using the `[server]` configuration section
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let executor = CommandExecutor::from_config(config)?;
        Self::bind(&config.bind, executor)
    }

    /// Address actually bound, useful with port 0
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests on the current thread until unblocked
    pub fn run(mut self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        if let Some(addr) = self.local_addr() {
            info!(
                "Executor listening on http://{} (workspace {})",
                addr,
                self.executor.workspace().root().display()
            );
        }

        let server = Arc::clone(&self.server);
        for request in server.incoming_requests() {
            self.handle_request(&runtime, request);
        }

        info!("Executor stopped");
        Ok(())
    }

    /// Serve on a background thread
    pub fn spawn(self) -> Result<ServerHandle> {
        let addr = self.local_addr().ok_or_else(|| Error::ServerStartFailed {
            bind: "unknown".to_string(),
            reason: "listener has no IP address".to_string(),
        })?;
        let server = Arc::clone(&self.server);
        let thread = std::thread::spawn(move || {
            if let Err(e) = self.run() {
                error!("Executor thread failed: {}", e);
            }
        });

        Ok(ServerHandle {
            addr,
            server,
            thread: Some(thread),
        })
    }

    fn handle_request(&mut self, runtime: &tokio::runtime::Runtime, mut request: Request) {
        let (status, body) = if *request.method() == Method::Post && request.url() == COMMAND_PATH
        {
            self.handle_command(runtime, &mut request)
        } else {
            debug!("No route for {} {}", request.method(), request.url());
            (404, CommandResponse::new(false, "Not found"))
        };

        let json = match serde_json::to_string(&body) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to encode response: {}", e);
                return;
            }
        };

        let mut response = Response::from_string(json).with_status_code(status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
            response.add_header(header);
        }
        if let Ok(header) = Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..]) {
            response.add_header(header);
        }

        if let Err(e) = request.respond(response) {
            warn!("Failed to send response: {}", e);
        }
    }

    fn handle_command(
        &mut self,
        runtime: &tokio::runtime::Runtime,
        request: &mut Request,
    ) -> (u16, CommandResponse) {
        let mut body = String::new();
        if let Err(e) = request.as_reader().read_to_string(&mut body) {
            return (400, CommandResponse::new(false, format!("Error: {}", e)));
        }

        let parsed: CommandRequest = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Rejecting malformed request body: {}", e);
                return (400, CommandResponse::new(false, "Invalid JSON body"));
            }
        };

        let command = parsed.command.trim();
        if command.is_empty() {
            return (400, CommandResponse::new(false, "No command provided"));
        }

        info!("Running: {}", command);
        let output = runtime.block_on(self.executor.execute(command));
        (200, CommandResponse::new(true, output))
    }
}

/// Handle to a server running on a background thread
pub struct ServerHandle {
    addr: SocketAddr,
    server: Arc<Server>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// Bound address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL suitable for `client.endpoint`
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop serving and wait for the thread to exit
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.server.unblock();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Executor thread panicked");
            }
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
