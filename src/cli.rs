use clap::Parser;

/// Wasmserve - static file server for cross-origin isolated WebAssembly apps
#[derive(Parser, Debug)]
#[command(
    name = "wasmserve",
    author,
    version,
    about = "A local static file server with COOP/COEP headers",
    long_about = "Wasmserve serves a directory over HTTP and adds the Cross-Origin-Opener-Policy \
and Cross-Origin-Embedder-Policy headers browsers require before enabling SharedArrayBuffer \
for WebAssembly applications."
)]
pub struct Args {
    /// Directory to serve (default: current directory)
    #[arg(
        index = 1,
        default_value = ".",
        value_hint = clap::ValueHint::DirPath,
        help = "Document root directory"
    )]
    pub root: String,

    /// Port to serve (default: 8000)
    #[arg(
        short = 'P',
        long,
        default_value_t = 8000,
        value_parser = clap::value_parser!(u16).range(1..=65535),
        help = "Server port number"
    )]
    pub port: u16,

    /// Open the served URL in the default browser once the server is up
    #[arg(short = 'o', long, help = "Open the browser after startup")]
    pub open: bool,

    /// Enable debug logging of request handling
    #[arg(short = 'd', long, help = "Show debug output")]
    pub debug: bool,
}

pub fn get_args() -> Args {
    Args::parse()
}
