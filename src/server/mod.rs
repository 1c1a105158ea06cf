mod handler;
mod mime;
pub mod utils;

pub use handler::RequestHandler;
pub use mime::MimeTable;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tiny_http::Server;

use crate::debug_println;
use crate::error::{Result, ServerError, WasmserveError};

/// Number of worker threads pulling requests off the shared listener. Each
/// worker handles one request at a time, so a slow transfer on one connection
/// never blocks the others.
const WORKER_THREADS: usize = 8;

/// Server configuration, fixed for the process lifetime.
#[derive(Debug)]
pub struct ServerConfig {
    /// Document root all request paths are resolved against
    pub root: PathBuf,
    /// Listen port; 0 asks the OS for a free port
    pub port: u16,
    /// Open the browser once the server is up
    pub open: bool,
}

/// A bound static file server.
///
/// Binding and serving are separate steps so callers can learn the actual
/// listen address (port 0 binds an OS-assigned port) before the serve loop
/// takes over the thread.
pub struct StaticServer {
    server: Arc<Server>,
    handler: Arc<RequestHandler>,
}

impl StaticServer {
    /// Bind the listener and prepare the request handler. A bind failure is
    /// fatal: there is no fallback port probing.
    pub fn bind(config: ServerConfig) -> Result<Self> {
        if !config.root.exists() {
            return Err(WasmserveError::directory_not_found(
                config.root.display().to_string(),
            ));
        }
        if !config.root.is_dir() {
            return Err(WasmserveError::path(format!(
                "Not a directory: {}",
                config.root.display()
            )));
        }
        let root = fs::canonicalize(&config.root)?;

        let server = Server::http(format!("0.0.0.0:{}", config.port))
            .map_err(|e| ServerError::startup_failed(config.port, e.to_string()))?;

        debug_println!("Listener bound on port {}", config.port);

        Ok(Self {
            server: Arc::new(server),
            handler: Arc::new(RequestHandler::new(root, MimeTable::default())),
        })
    }

    /// Port the listener is actually bound to
    pub fn port(&self) -> u16 {
        self.server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .unwrap_or(0)
    }

    /// Canonicalized document root
    pub fn root(&self) -> &Path {
        self.handler.root()
    }

    /// Serve requests until the process is terminated. Blocks the calling
    /// thread; there is no graceful drain, in-flight requests are dropped
    /// when the process exits.
    pub fn serve(self) -> Result<()> {
        let mut workers = Vec::with_capacity(WORKER_THREADS);

        for _ in 0..WORKER_THREADS {
            let server = Arc::clone(&self.server);
            let handler = Arc::clone(&self.handler);

            workers.push(thread::spawn(move || {
                for request in server.incoming_requests() {
                    handler.handle(request);
                }
            }));
        }

        for worker in workers {
            let _ = worker.join();
        }

        Ok(())
    }
}
