//! Casement - native window state and interaction for embedded content.
//!
//! Casement drives a native top-level window that hosts an embedded content
//! surface. It owns the parts of a window that sit between the OS and the
//! content:
//!
//! - an in-window menu bar that can auto-hide and reappear on an Alt tap
//! - keyboard accelerators bound to menu commands
//! - draggable regions and resize borders for frameless windows
//! - conversion between content bounds and window bounds
//!
//! The host window is reached through the [`window::HostWidget`] trait;
//! [`window::WinitHost`] implements it on top of winit.
//!
//! # Example
//!
//! ```ignore
//! use casement::prelude::*;
//!
//! let config = WindowConfig::new("Editor").with_auto_hide_menu_bar(true);
//! let mut window = WindowController::new(config, WinitHostFactory::new(event_loop), surface)?;
//!
//! let menu = MenuModel::new()
//!     .with_item(MenuItem::new(1, "Save").with_accelerator_str("CmdOrCtrl+S")?);
//! window.set_menu(menu);
//! window.command_activated().connect(|id| println!("command {id}"));
//! ```

pub use casement_core::*;

pub mod keyboard;
pub mod menu;
pub mod prelude;
pub mod window;
