/// Protocol tag carried by every JSON-RPC envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Payload emitted in place of a `telemetry/event` notification.
pub const TELEMETRY_UNSUPPORTED_MESSAGE: &str = "telemetry/event is not currently supported.";

/// Log filter used by the `lsp-wire` binary when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Largest integer a wire number carries without losing precision (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
