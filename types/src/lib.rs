pub mod consts;

use serde::{Deserialize, Serialize};

/// A fully resolved upstream pool configuration.
///
/// One record per entry in the pool host list given at startup. The record is
/// immutable once derived; the connection layer reads it, never writes it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// The display name of the pool.
    pub name: String,

    /// The host of the stratum server, without the protocol scheme.
    pub host: String,

    // The worker credentials used to authorize with the pool.
    pub username: String,
    pub password: String,

    /// Whether the extranonce subscribe request is sent on this pool.
    pub extranonce_subscribe_enabled: bool,

    // The number of submits for each share. Debug use only.
    pub number_of_submit: u32,

    /// Selection rank of the pool. 0 is tried first.
    pub priority: usize,

    /// Seconds to wait before retrying to connect to a dead pool.
    pub connection_retry_delay: u64,

    /// Seconds a reconnected pool must stay up before it is declared stable
    /// and workers may be moved back onto it.
    pub reconnect_stability_period: u64,
}
