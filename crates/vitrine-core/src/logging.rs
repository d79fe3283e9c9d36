//! Logging facilities for Vitrine.
//!
//! Vitrine uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Stores log mutations at `debug`, and signals log each emission at `trace`.
//! Use the constants in [`targets`] with `tracing` filter directives to
//! narrow output to a single subsystem, e.g.
//! `RUST_LOG=vitrine::store=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "vitrine_core";
    /// Signal/subscription system target.
    pub const SIGNAL: &str = "vitrine_core::signal";
    /// Indexed store target.
    pub const STORE: &str = "vitrine::store";
    /// Observable store target.
    pub const OBSERVABLE_STORE: &str = "vitrine::observable_store";
    /// Paginator and virtual list target.
    pub const PAGINATOR: &str = "vitrine::paginator";
}
