//! Logging targets and span names.
//!
//! Casement instruments itself with the `tracing` crate and never installs a
//! subscriber. Applications decide where logs go:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("casement::menu_bar=debug,casement::accelerator=trace")
//!     .init();
//! ```

/// Span names used throughout Casement for tracing.
pub mod span_names {
    /// Window construction.
    pub const WINDOW_CREATE: &str = "casement::window_create";
    /// Layout pass.
    pub const LAYOUT: &str = "casement::layout";
    /// Accelerator table rebuild.
    pub const REGISTER_ACCELERATORS: &str = "casement::register_accelerators";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Window lifecycle and setters.
    pub const WINDOW: &str = "casement::window";
    /// Menu bar visibility and the Alt-tap detector.
    pub const MENU_BAR: &str = "casement::menu_bar";
    /// Accelerator registration and dispatch.
    pub const ACCELERATOR: &str = "casement::accelerator";
    /// Draggable regions and hit testing.
    pub const HIT_TEST: &str = "casement::hit_test";
    /// Signal emission.
    pub const SIGNAL: &str = "casement::signal";
}
