//! Core types for Casement.
//!
//! This crate provides the leaf building blocks shared by the window layer:
//!
//! - **Geometry**: Integer screen-space points, sizes, rectangles and insets
//! - **Signals**: A small observer primitive for window notifications
//! - **Errors**: The top-level [`CasementError`] and its [`Result`] alias
//! - **Logging**: Target and span names used with `tracing`
//!
//! # Signal Example
//!
//! ```
//! use casement_core::Signal;
//!
//! let focused = Signal::<()>::new();
//! let id = focused.connect(|_| println!("window focused"));
//! focused.emit(());
//! focused.disconnect(id);
//! ```
//!
//! # Geometry Example
//!
//! ```
//! use casement_core::{Insets, Rect};
//!
//! let client = Rect::new(100, 100, 800, 600);
//! let frame = Insets::new(31, 8, 8, 8);
//! let window = client.outset(frame);
//! assert_eq!(window, Rect::new(92, 69, 816, 639));
//! assert_eq!(window.inset(frame), client);
//! ```

mod error;
pub mod geometry;
pub mod logging;
pub mod signal;

pub use error::{CasementError, Result};
pub use geometry::{Insets, Point, Rect, Size};
pub use signal::{ConnectionId, Signal};
