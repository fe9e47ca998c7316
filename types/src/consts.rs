/// The username used for pools with no configured user.
pub const DEFAULT_USERNAME: &str = "unknown";

/// The password used for pools with no configured password.
pub const DEFAULT_PASSWORD: &str = "x";

/// The port the stratum listener binds when none is given.
pub const DEFAULT_STRATUM_LISTEN_PORT: u16 = 3333;

/// The port the REST listener binds when none is given.
pub const DEFAULT_REST_LISTEN_PORT: u16 = 8888;

/// The address both listeners bind when none is given.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Seconds to wait before retrying to connect to a dead pool.
pub const DEFAULT_POOL_CONNECTION_RETRY_DELAY: u64 = 5;

/// Seconds a reconnected pool must stay up before it is declared stable.
pub const DEFAULT_POOL_RECONNECT_STABILITY_PERIOD: u64 = 30;
