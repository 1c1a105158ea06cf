mod cli;
mod debug;
mod error;
mod server;

use cli::get_args;
use debug::enable_debug;
use error::Result;
use server::utils::ServerInfo;
use server::{ServerConfig, StaticServer};
use std::error::Error;

fn main() {
    let args = get_args();

    if args.debug {
        enable_debug();
    }

    if let Err(e) = run(ServerConfig {
        root: args.root.into(),
        port: args.port,
        open: args.open,
    }) {
        let mut error_source: &dyn Error = &e;
        eprintln!("❌ {error_source}");

        while let Some(source) = error_source.source() {
            eprintln!("   Caused by: {source}");
            error_source = source;
        }

        std::process::exit(1);
    }
}

fn run(config: ServerConfig) -> Result<()> {
    let open = config.open;
    let server = StaticServer::bind(config)?;

    let info = ServerInfo::new(server.port(), server.root());
    info.print_server_startup();

    if open {
        info.open_browser();
    }

    server.serve()
}
