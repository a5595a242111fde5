//! Native window management.
//!
//! This module provides the window state and interaction engine and its
//! winit host:
//!
//! - [`WindowController`]: lifecycle, bounds, menu, accelerators, hit testing
//! - [`BoundsConverter`]: content bounds to window bounds and back
//! - [`DraggableRegionMask`]: drag areas of frameless windows
//! - [`DecorationProvider`]: native frames and frameless resize borders
//! - [`Platform`], [`KeyClassifier`], [`DesktopEnvironment`]: platform
//!   capabilities chosen at construction
//! - [`HostWidget`], [`EmbeddedSurface`], [`GlobalMenuSurface`]: the
//!   collaborators the controller drives
//! - [`WinitHost`] and [`WindowEventRouter`]: the winit integration
//!
//! # Creating a Window
//!
//! ```ignore
//! use casement::window::{WindowConfig, WindowController, WinitHostFactory};
//!
//! let config = WindowConfig::new("My App")
//!     .with_size(1024, 768)
//!     .with_auto_hide_menu_bar(true);
//!
//! let window = WindowController::new(config, WinitHostFactory::new(event_loop), surface)?;
//! ```
//!
//! # Frameless Windows
//!
//! ```ignore
//! use casement::window::{DraggableRegion, WindowConfig};
//!
//! let config = WindowConfig::new("Splash").with_frame(false);
//! let mut window = WindowController::new(config, factory, surface)?;
//!
//! // A custom title bar with a close button cut out of it
//! window.update_draggable_regions(&[
//!     DraggableRegion::draggable(Rect::new(0, 0, 800, 32)),
//!     DraggableRegion::no_drag(Rect::new(768, 0, 32, 32)),
//! ]);
//! ```

mod bounds;
mod controller;
mod decoration;
mod draggable_region;
mod event_router;
mod host;
mod native_window;
mod options;
mod platform;

pub use bounds::BoundsConverter;
pub use controller::{WindowCapabilities, WindowController};
pub use decoration::{
    select_decoration, DecorationProvider, FramelessFrame, HitTestResult, NativeFrame,
    ResizeDirection,
};
pub use draggable_region::{DraggableRegion, DraggableRegionMask};
pub use event_router::WindowEventRouter;
pub use host::{
    ContentLayout, EmbeddedSurface, GlobalMenuSurface, HostError, HostWidget, HostWidgetFactory,
    WidgetDelegate, WidgetParams, WindowStyle,
};
pub use native_window::{WinitHost, WinitHostFactory};
pub use options::{OptionsError, WindowConfig, WindowOptions, UNCONSTRAINED_DIMENSION};
pub use platform::{
    DesktopEnvironment, KeyClassifier, LogicalKeyClassifier, Platform, VirtualKeyClassifier,
};
