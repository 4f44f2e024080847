pub const SERVER_PORT: u16 = 8080;

/// sent verbatim to every client that connects, after which the connection is closed.
pub const GREETING: &str = "PongC server response";

/// anything longer than this coming back from a server is not a greeting.
pub const MAX_GREETING_SIZE: usize = 256;
