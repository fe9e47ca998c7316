use std::{env, path::PathBuf, sync::OnceLock};

use clap::Parser;
use types::{
    consts::{
        DEFAULT_BIND_ADDRESS, DEFAULT_PASSWORD, DEFAULT_POOL_CONNECTION_RETRY_DELAY,
        DEFAULT_POOL_RECONNECT_STABILITY_PERIOD, DEFAULT_REST_LISTEN_PORT,
        DEFAULT_STRATUM_LISTEN_PORT, DEFAULT_USERNAME,
    },
    PoolConfig,
};

/// The startup options of the proxy, parsed from the command line.
///
/// Pool attributes are given as parallel space-separated lists, one value per
/// pool, so N pools take one flag per attribute instead of N flag groups. The
/// host list alone decides how many pools exist; every other list may be
/// shorter or missing and the gaps are filled with defaults.
#[derive(Debug, Parser)]
#[command(version, about = "A proxy for the stratum mining protocol")]
pub struct Options {
    /// Names of the pools, space separated. Defaults to the pool host.
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub pool_names: Vec<String>,

    /// Hosts of the stratum servers (only the host, not the protocol), space
    /// separated.
    #[arg(long, num_args = 1.., value_name = "HOST")]
    pub pool_hosts: Vec<String>,

    /// User names used to connect to the pools, space separated.
    #[arg(long, num_args = 1.., value_name = "USER")]
    pub pool_users: Vec<String>,

    /// Passwords used for the users, space separated.
    #[arg(long, num_args = 1.., value_name = "PASSWORD")]
    pub pool_passwords: Vec<String>,

    /// Enable/disable the extranonce subscribe request per pool, space
    /// separated. Defaults to true.
    #[arg(long, num_args = 1.., value_name = "BOOL")]
    pub extranonce_subscribe_flags: Vec<bool>,

    /// The number of submits for each share. Only for debug use.
    #[arg(long, default_value_t = 1, value_name = "NUMBER")]
    pub number_of_submit: u32,

    /// Delay in seconds before retrying to connect to a dead pool.
    #[arg(long, default_value_t = DEFAULT_POOL_CONNECTION_RETRY_DELAY, value_name = "SECONDS")]
    pub pool_connection_retry_delay: u64,

    /// Delay in seconds before a reconnected pool is declared stable and
    /// workers may be moved back onto it.
    #[arg(long, default_value_t = DEFAULT_POOL_RECONNECT_STABILITY_PERIOD, value_name = "SECONDS")]
    pub pool_reconnect_stability_period: u64,

    /// The directory where logs are written.
    #[arg(long, value_name = "DIRECTORY")]
    pub log_directory: Option<PathBuf>,

    /// The level of log: off, error, warn, info, debug or trace.
    #[arg(long, default_value_t = log::LevelFilter::Info, value_name = "LEVEL")]
    pub log_level: log::LevelFilter,

    /// The port to listen for incoming stratum connections.
    #[arg(long, default_value_t = DEFAULT_STRATUM_LISTEN_PORT, value_name = "PORT")]
    pub stratum_listen_port: u16,

    /// The address to bind the stratum listener to.
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS, value_name = "ADDRESS")]
    pub stratum_listen_address: String,

    /// The port to listen for REST requests.
    #[arg(long, default_value_t = DEFAULT_REST_LISTEN_PORT, value_name = "PORT")]
    pub rest_listen_port: u16,

    /// The address to bind the REST listener to.
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS, value_name = "ADDRESS")]
    pub rest_listen_address: String,

    // Derived once from the lists above on first access.
    #[arg(skip)]
    pools: OnceLock<Vec<PoolConfig>>,
}

impl Options {
    /// The list of pools given through the command line, in priority order.
    ///
    /// Resolved on first call and cached; later calls return the same slice.
    pub fn pools(&self) -> &[PoolConfig] {
        self.pools.get_or_init(|| self.resolve_pools())
    }

    fn resolve_pools(&self) -> Vec<PoolConfig> {
        self.pool_hosts
            .iter()
            .enumerate()
            .map(|(priority, host)| PoolConfig {
                name: self
                    .pool_names
                    .get(priority)
                    .cloned()
                    .unwrap_or_else(|| host.clone()),
                host: host.clone(),
                username: self
                    .pool_users
                    .get(priority)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
                password: self
                    .pool_passwords
                    .get(priority)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
                extranonce_subscribe_enabled: self
                    .extranonce_subscribe_flags
                    .get(priority)
                    .copied()
                    .unwrap_or(true),
                number_of_submit: self.number_of_submit,
                priority,
                connection_retry_delay: self.pool_connection_retry_delay,
                reconnect_stability_period: self.pool_reconnect_stability_period,
            })
            .collect()
    }

    /// The effective directory for log output.
    ///
    /// Keeps the configured directory when it exists; otherwise warns and
    /// falls back to the OS temp directory. Never fails.
    pub fn effective_log_directory(&self) -> PathBuf {
        match &self.log_directory {
            Some(dir) if dir.is_dir() => dir.clone(),
            Some(dir) => {
                log::warn!(
                    "log directory {} is not an existing directory, using the OS temp directory",
                    dir.display()
                );
                env::temp_dir()
            }
            None => {
                log::warn!("log directory not set, using the OS temp directory");
                env::temp_dir()
            }
        }
    }
}
