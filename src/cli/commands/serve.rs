//! Serve command - run the web server

use polls::server;

use super::Overrides;

/// Start the HTTP server with the config plus command-line overrides
pub fn serve(
    overrides: &Overrides,
    host: Option<String>,
    port: Option<u16>,
    workers: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = overrides.load_config()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(workers) = workers {
        config.server.workers = workers;
    }

    let ctx = super::open_context(&config)?;
    server::serve(ctx, &config.server.address(), config.server.workers)
}
