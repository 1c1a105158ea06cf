use std::path::Path;

/// Server information displayed at startup
pub struct ServerInfo {
    pub url: String,
    pub port: u16,
    pub root: String,
    pub server_pid: u32,
}

impl ServerInfo {
    pub fn new(port: u16, root: &Path) -> Self {
        Self {
            url: format!("http://localhost:{port}"),
            port,
            root: root.display().to_string(),
            server_pid: std::process::id(),
        }
    }

    /// Print server startup details
    pub fn print_server_startup(&self) {
        println!("\n\x1b[1;34m╭\x1b[0m");
        println!("  🅦 \x1b[1;36mWasmserve\x1b[0m cross-origin isolated static server\n");
        println!("  🚀 \x1b[1;34mServer URL:\x1b[0m \x1b[4;36m{}\x1b[0m", self.url);
        println!(
            "  🔌 \x1b[1;34mListening on port:\x1b[0m \x1b[1;33m{}\x1b[0m",
            self.port
        );
        println!(
            "  📁 \x1b[1;34mDocument root:\x1b[0m \x1b[0;37m{}\x1b[0m",
            self.root
        );
        println!(
            "  ℹ️ \x1b[1;34mServer PID:\x1b[0m \x1b[0;37m{}\x1b[0m",
            self.server_pid
        );
        println!("\n  \x1b[0;90mPress Ctrl+C to stop the server\x1b[0m");
        println!("\x1b[1;34m╰\x1b[0m");
    }

    /// Open the served URL in the default browser
    pub fn open_browser(&self) {
        println!("\n🌐 \x1b[1;36mOpening browser...\x1b[0m");

        if let Err(e) = webbrowser::open(&self.url) {
            println!("❗ \x1b[1;33mFailed to open browser automatically: {e}\x1b[0m");
            println!(
                "🔗 \x1b[1;34mManually open:\x1b[0m \x1b[4;36m{}\x1b[0m",
                self.url
            );
        }
    }
}
