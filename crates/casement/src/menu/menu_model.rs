//! Read-only menu model supplied by the embedding application.

use std::fmt;

use crate::keyboard::{AcceleratorParseError, KeyCombination};

/// Identifier of the command a menu item triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CommandId(pub u32);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CommandId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single entry in a [`MenuModel`].
///
/// An item is a command, a separator, or a submenu. Only enabled commands
/// carrying an accelerator produce keyboard bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    command_id: CommandId,
    label: String,
    enabled: bool,
    separator: bool,
    accelerator: Option<KeyCombination>,
    submenu: Option<MenuModel>,
}

impl MenuItem {
    /// Create an enabled command item.
    pub fn new(command_id: impl Into<CommandId>, label: impl Into<String>) -> Self {
        Self {
            command_id: command_id.into(),
            label: label.into(),
            enabled: true,
            separator: false,
            accelerator: None,
            submenu: None,
        }
    }

    /// Create a separator.
    pub fn separator() -> Self {
        Self {
            command_id: CommandId::default(),
            label: String::new(),
            enabled: true,
            separator: true,
            accelerator: None,
            submenu: None,
        }
    }

    /// Create an item that opens a submenu.
    pub fn submenu(label: impl Into<String>, submenu: MenuModel) -> Self {
        Self {
            command_id: CommandId::default(),
            label: label.into(),
            enabled: true,
            separator: false,
            accelerator: None,
            submenu: Some(submenu),
        }
    }

    /// Attach an accelerator.
    pub fn with_accelerator(mut self, accelerator: KeyCombination) -> Self {
        self.accelerator = Some(accelerator);
        self
    }

    /// Attach an accelerator parsed from a string such as `"CmdOrCtrl+S"`.
    pub fn with_accelerator_str(self, accelerator: &str) -> Result<Self, AcceleratorParseError> {
        Ok(self.with_accelerator(accelerator.parse()?))
    }

    /// Set whether the item is enabled.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn command_id(&self) -> CommandId {
        self.command_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_separator(&self) -> bool {
        self.separator
    }

    pub fn accelerator(&self) -> Option<KeyCombination> {
        self.accelerator
    }

    pub fn submenu_model(&self) -> Option<&MenuModel> {
        self.submenu.as_ref()
    }
}

/// An ordered sequence of menu items.
///
/// # Example
///
/// ```ignore
/// use casement::menu::{MenuItem, MenuModel};
///
/// let file = MenuModel::new()
///     .with_item(MenuItem::new(1, "Save").with_accelerator_str("CmdOrCtrl+S")?)
///     .with_item(MenuItem::separator())
///     .with_item(MenuItem::new(2, "Quit").with_accelerator_str("CmdOrCtrl+Q")?);
///
/// let menu = MenuModel::new().with_item(MenuItem::submenu("File", file));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuModel {
    items: Vec<MenuItem>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, builder style.
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Append an item.
    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<MenuItem> for MenuModel {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Key;

    #[test]
    fn test_item_builder() {
        let item = MenuItem::new(7, "Save")
            .with_accelerator_str("Ctrl+S")
            .unwrap()
            .with_enabled(false);

        assert_eq!(item.command_id(), CommandId(7));
        assert_eq!(item.label(), "Save");
        assert!(!item.is_enabled());
        assert_eq!(item.accelerator(), Some(KeyCombination::ctrl(Key::S)));
        assert!(item.submenu_model().is_none());
    }

    #[test]
    fn test_bad_accelerator_string() {
        assert!(MenuItem::new(1, "Broken").with_accelerator_str("Ctrl+").is_err());
    }

    #[test]
    fn test_model_from_iter() {
        let model: MenuModel = (1..=3).map(|id| MenuItem::new(id, format!("Item {id}"))).collect();
        assert_eq!(model.len(), 3);
        assert_eq!(model.items()[2].command_id(), CommandId(3));
        assert!(MenuModel::new().is_empty());
    }

    #[test]
    fn test_separator_and_submenu() {
        let sub = MenuModel::new().with_item(MenuItem::new(1, "Undo"));
        let item = MenuItem::submenu("Edit", sub.clone());
        assert_eq!(item.submenu_model(), Some(&sub));
        assert!(MenuItem::separator().is_separator());
    }
}
