//! Window construction options and configuration.
//!
//! [`WindowOptions`] is the loosely typed input an embedding application
//! passes in (usually JSON with camelCase keys). [`WindowConfig`] is the
//! validated configuration the controller owns.
//!
//! ```ignore
//! use casement::window::{WindowConfig, WindowOptions};
//!
//! let options = WindowOptions::from_json(r#"{"width": 1024, "autoHideMenuBar": true}"#)?;
//! let config = WindowConfig::from_options(&options)?;
//!
//! // Or with the builder
//! let config = WindowConfig::new("Editor")
//!     .with_size(1024, 768)
//!     .with_auto_hide_menu_bar(true);
//! ```

use casement_core::{Point, Rect, Size};
use serde::Deserialize;
use thiserror::Error;

/// Maximum window dimension when none is configured.
pub const UNCONSTRAINED_DIMENSION: i32 = i32::MAX / 10;

/// Errors raised while reading window options.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The options are not valid JSON or have the wrong shape.
    #[error("malformed window options: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A width or height is zero or negative.
    #[error("invalid {name}: {value} (must be positive)")]
    InvalidDimension { name: &'static str, value: i32 },
    /// A dimension is larger than the maximum size allows.
    #[error("{name} {value} exceeds the maximum of {max}")]
    ExceedsMaximum {
        name: &'static str,
        value: i32,
        max: i32,
    },
    /// The minimum size exceeds the maximum size.
    #[error("minimum size {min_width}x{min_height} exceeds maximum size {max_width}x{max_height}")]
    MinExceedsMax {
        min_width: i32,
        min_height: i32,
        max_width: i32,
        max_height: i32,
    },
}

impl From<OptionsError> for casement_core::CasementError {
    fn from(err: OptionsError) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

/// Construction options with their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowOptions {
    pub width: i32,
    pub height: i32,
    /// Horizontal position; the window is centered when either coordinate
    /// is missing.
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub resizable: bool,
    /// `false` creates a frameless window.
    pub frame: bool,
    pub title: String,
    pub auto_hide_menu_bar: bool,
    /// Interpret `width`/`height` as the content size instead of the
    /// window size.
    pub use_content_size: bool,
    pub skip_taskbar: bool,
    pub always_on_top: bool,
    pub fullscreen: bool,
    pub kiosk: bool,
    /// Show the window once created.
    pub show: bool,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            x: None,
            y: None,
            resizable: true,
            frame: true,
            title: String::new(),
            auto_hide_menu_bar: false,
            use_content_size: false,
            skip_taskbar: false,
            always_on_top: false,
            fullscreen: false,
            kiosk: false,
            show: true,
            min_width: 0,
            min_height: 0,
            max_width: None,
            max_height: None,
        }
    }
}

impl WindowOptions {
    /// Parse options from JSON. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check dimensions and size constraints.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value <= 0 {
                return Err(OptionsError::InvalidDimension { name, value });
            }
        }
        for (name, value) in [("minWidth", self.min_width), ("minHeight", self.min_height)] {
            if value < 0 {
                return Err(OptionsError::InvalidDimension { name, value });
            }
        }
        for (name, value) in [("maxWidth", self.max_width), ("maxHeight", self.max_height)] {
            if let Some(value) = value
                && value <= 0
            {
                return Err(OptionsError::InvalidDimension { name, value });
            }
        }

        for (name, value) in [("maxWidth", self.max_width), ("maxHeight", self.max_height)] {
            if let Some(value) = value
                && value > UNCONSTRAINED_DIMENSION
            {
                return Err(OptionsError::ExceedsMaximum {
                    name,
                    value,
                    max: UNCONSTRAINED_DIMENSION,
                });
            }
        }

        let max = self.maximum_size();
        for (name, value, max) in [
            ("width", self.width, max.width),
            ("height", self.height, max.height),
        ] {
            if value > max {
                return Err(OptionsError::ExceedsMaximum { name, value, max });
            }
        }
        if self.min_width > max.width || self.min_height > max.height {
            return Err(OptionsError::MinExceedsMax {
                min_width: self.min_width,
                min_height: self.min_height,
                max_width: max.width,
                max_height: max.height,
            });
        }
        Ok(())
    }

    fn maximum_size(&self) -> Size {
        Size::new(
            self.max_width.unwrap_or(UNCONSTRAINED_DIMENSION),
            self.max_height.unwrap_or(UNCONSTRAINED_DIMENSION),
        )
    }
}

/// Validated window configuration.
///
/// Immutable after construction except through the controller's setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    title: String,
    size: Size,
    /// Initial position; `None` centers the window.
    position: Option<Point>,
    has_frame: bool,
    resizable: bool,
    use_content_size: bool,
    menu_bar_auto_hide: bool,
    skip_taskbar: bool,
    always_on_top: bool,
    fullscreen: bool,
    visible: bool,
    min_size: Size,
    max_size: Size,
}

impl WindowConfig {
    /// Create a configuration with the given title and default options.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: Size::new(800, 600),
            position: None,
            has_frame: true,
            resizable: true,
            use_content_size: false,
            menu_bar_auto_hide: false,
            skip_taskbar: false,
            always_on_top: false,
            fullscreen: false,
            visible: true,
            min_size: Size::ZERO,
            max_size: Size::new(UNCONSTRAINED_DIMENSION, UNCONSTRAINED_DIMENSION),
        }
    }

    /// Build a configuration from validated options.
    pub fn from_options(options: &WindowOptions) -> Result<Self, OptionsError> {
        options.validate()?;

        let position = match (options.x, options.y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        };

        Ok(Self {
            title: options.title.clone(),
            size: Size::new(options.width, options.height),
            position,
            has_frame: options.frame,
            resizable: options.resizable,
            use_content_size: options.use_content_size,
            menu_bar_auto_hide: options.auto_hide_menu_bar,
            skip_taskbar: options.skip_taskbar,
            always_on_top: options.always_on_top,
            // Kiosk mode is fullscreen on this layer
            fullscreen: options.fullscreen || options.kiosk,
            visible: options.show,
            min_size: Size::new(options.min_width, options.min_height),
            max_size: options.maximum_size(),
        })
    }

    /// Set the initial size (window or content size, see
    /// [`with_use_content_size`](Self::with_use_content_size)).
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Set the initial position. Without one the window is centered.
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    /// Set whether the window has an OS frame.
    pub fn with_frame(mut self, has_frame: bool) -> Self {
        self.has_frame = has_frame;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Treat the size as the content size.
    pub fn with_use_content_size(mut self, use_content_size: bool) -> Self {
        self.use_content_size = use_content_size;
        self
    }

    pub fn with_auto_hide_menu_bar(mut self, auto_hide: bool) -> Self {
        self.menu_bar_auto_hide = auto_hide;
        self
    }

    pub fn with_skip_taskbar(mut self, skip: bool) -> Self {
        self.skip_taskbar = skip;
        self
    }

    pub fn with_always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = always_on_top;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Set whether the window is shown on creation.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_size = Size::new(width, height);
        self
    }

    pub fn with_max_size(mut self, width: i32, height: i32) -> Self {
        self.max_size = Size::new(width, height);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Initial bounds; the origin is zero when the window will be centered.
    pub fn initial_bounds(&self) -> Rect {
        Rect::from_origin_size(self.position.unwrap_or(Point::ZERO), self.size)
    }

    pub fn has_frame(&self) -> bool {
        self.has_frame
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn use_content_size(&self) -> bool {
        self.use_content_size
    }

    pub fn menu_bar_auto_hide(&self) -> bool {
        self.menu_bar_auto_hide
    }

    pub fn skip_taskbar(&self) -> bool {
        self.skip_taskbar
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn max_size(&self) -> Size {
        self.max_size
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    pub(crate) fn set_menu_bar_auto_hide(&mut self, auto_hide: bool) {
        self.menu_bar_auto_hide = auto_hide;
    }

    pub(crate) fn set_skip_taskbar(&mut self, skip: bool) {
        self.skip_taskbar = skip;
    }

    pub(crate) fn set_min_size(&mut self, size: Size) {
        self.min_size = size;
    }

    pub(crate) fn set_max_size(&mut self, size: Size) {
        self.max_size = size;
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("")
    }
}
