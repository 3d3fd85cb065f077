//! serve サブコマンド
//!
//! HTTPサーバーを起動します。

use super::ProbeArgs;
use crate::config::ServerConfig;
use clap::Args;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "5000", env = "SAFEPING_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SAFEPING_HOST")]
    pub host: String,

    /// Probe options
    #[command(flatten)]
    pub probe: ProbeArgs,
}

impl ServeArgs {
    /// Listener configuration from the parsed arguments
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }
}
