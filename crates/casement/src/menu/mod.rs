//! Menus, the in-window menu bar, and accelerator bindings.
//!
//! The embedding application supplies a [`MenuModel`]; the window reads it
//! to derive an [`AcceleratorTable`] and to drive the [`MenuBarController`]
//! state machine:
//!
//! ```text
//!            set_menu (auto-hide)           Alt tap / set_visible
//!   NoBar ------------------------> BarHiddenAutoHide <----------> BarVisible
//!     |                                                              ^
//!     +-------------------- set_menu (no auto-hide) -----------------+
//! ```
//!
//! Blur and a mouse-down on the content force `BarVisible` back to
//! `BarHiddenAutoHide` while auto-hide is enabled. A bar, once present, is
//! never removed.

mod accelerator_table;
mod menu_bar;
mod menu_model;

pub use accelerator_table::{
    AcceleratorBinding, AcceleratorConflict, AcceleratorPriority, AcceleratorTable,
};
pub use menu_bar::{MenuBarController, MenuBarMode, MenuBarState};
pub use menu_model::{CommandId, MenuItem, MenuModel};
