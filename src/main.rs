//! Device Login gateway
//!
//! ```text
//! ┌──────────┐  GET /challenge   ┌──────────┐   sign    ┌──────────┐
//! │  Client  │──────────────────▶│ Gateway  │           │  Device  │
//! │          │◀──────────────────│          │           │          │
//! │          │─────────────────────────────────────────▶│          │
//! │          │◀─────────────────────────────────────────│          │
//! │          │  POST /login      │          │           └──────────┘
//! │          │──────────────────▶│ (verify) │
//! └──────────┘   201 / 400       └──────────┘
//! ```
//!
//! Usage: `device_login [--env dev] [--port 5050]`

use device_login::config::AppConfig;
use device_login::gateway;
use device_login::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    let _log_guard = init_logging(&app_config);
    tracing::info!("Starting device login gateway in {} mode", env);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(gateway::run_server(&app_config.listen_addr()))
}
