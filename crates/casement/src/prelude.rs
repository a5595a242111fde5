//! Prelude module for Casement.
//!
//! ```ignore
//! use casement::prelude::*;
//! ```

// ============================================================================
// Core
// ============================================================================

pub use crate::{CasementError, Insets, Point, Rect, Result, Signal, Size};

// ============================================================================
// Keyboard
// ============================================================================

pub use crate::keyboard::{Key, KeyCombination, KeyEvent, KeyboardModifiers};

// ============================================================================
// Menu
// ============================================================================

pub use crate::menu::{AcceleratorTable, CommandId, MenuBarMode, MenuItem, MenuModel};

// ============================================================================
// Window
// ============================================================================

pub use crate::window::{
    DraggableRegion, EmbeddedSurface, GlobalMenuSurface, HitTestResult, HostWidget,
    WindowCapabilities, WindowConfig, WindowController, WindowEventRouter, WindowOptions,
    WinitHost, WinitHostFactory,
};
