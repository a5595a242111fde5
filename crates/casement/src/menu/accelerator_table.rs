//! Keyboard accelerators derived from a menu model.
//!
//! The table is rebuilt wholesale from the model on every `set_menu`. The
//! host dispatcher is cleared before the new bindings are registered, so a
//! binding never outlives the model it came from and registering the same
//! model twice leaves exactly one registration per key combination.

use std::collections::HashMap;

use casement_core::logging::{span_names, targets};
use tracing::{debug, trace, warn};

use super::menu_model::{CommandId, MenuModel};
use crate::keyboard::KeyCombination;
use crate::window::HostWidget;

/// Priority of an accelerator registration with the host dispatcher.
///
/// Menu accelerators always register at normal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AcceleratorPriority {
    /// Ordinary menu accelerators.
    #[default]
    Normal,
}

/// A key combination bound to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcceleratorBinding {
    pub combination: KeyCombination,
    pub command_id: CommandId,
}

/// Two menu items claiming the same key combination.
///
/// The later item in model order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratorConflict {
    pub combination: KeyCombination,
    /// The command that lost the combination.
    pub replaced: CommandId,
    /// The command now bound to it.
    pub winner: CommandId,
}

/// Mapping from key combination to command id.
#[derive(Debug, Default)]
pub struct AcceleratorTable {
    /// Bindings in order of first appearance in the model.
    bindings: Vec<AcceleratorBinding>,
    /// Index into `bindings` by combination.
    index: HashMap<KeyCombination, usize>,
    /// Conflicts found during the last rebuild.
    conflicts: Vec<AcceleratorConflict>,
    /// Whether the bindings are currently registered with a host.
    registered: bool,
}

impl AcceleratorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a model without registering it anywhere.
    pub fn from_model(model: &MenuModel) -> Self {
        let mut table = Self::new();
        table.rebuild(model);
        table
    }

    /// Replace the bindings with those derived from `model`.
    ///
    /// Every enabled item carrying an accelerator contributes one binding.
    /// Enabled submenus are walked in order; disabled items and disabled
    /// submenus contribute nothing.
    pub fn rebuild(&mut self, model: &MenuModel) {
        self.bindings.clear();
        self.index.clear();
        self.conflicts.clear();
        self.collect(model);

        for conflict in &self.conflicts {
            warn!(
                target: targets::ACCELERATOR,
                accelerator = %conflict.combination,
                replaced = %conflict.replaced,
                winner = %conflict.winner,
                "duplicate accelerator in menu model, last item wins"
            );
        }
    }

    fn collect(&mut self, model: &MenuModel) {
        for item in model.items() {
            if !item.is_enabled() || item.is_separator() {
                continue;
            }

            if let Some(submenu) = item.submenu_model() {
                self.collect(submenu);
                continue;
            }

            let Some(combination) = item.accelerator() else {
                continue;
            };
            let command_id = item.command_id();

            match self.index.get(&combination) {
                Some(&slot) => {
                    let binding = &mut self.bindings[slot];
                    if binding.command_id != command_id {
                        self.conflicts.push(AcceleratorConflict {
                            combination,
                            replaced: binding.command_id,
                            winner: command_id,
                        });
                    }
                    binding.command_id = command_id;
                }
                None => {
                    self.index.insert(combination, self.bindings.len());
                    self.bindings.push(AcceleratorBinding {
                        combination,
                        command_id,
                    });
                }
            }
        }
    }

    /// Rebuild from `model` and register every binding with `host`.
    ///
    /// All previous registrations are cleared first.
    pub fn register(&mut self, model: &MenuModel, host: &mut dyn HostWidget) {
        let _span = tracing::debug_span!(span_names::REGISTER_ACCELERATORS).entered();

        host.unregister_accelerators();
        self.rebuild(model);

        for binding in &self.bindings {
            host.register_accelerator(binding.combination, AcceleratorPriority::Normal);
        }
        self.registered = true;

        debug!(
            target: targets::ACCELERATOR,
            count = self.bindings.len(),
            conflicts = self.conflicts.len(),
            "registered accelerators"
        );
    }

    /// Clear the host registrations and the bindings.
    pub fn unregister(&mut self, host: &mut dyn HostWidget) {
        if !self.registered {
            return;
        }
        host.unregister_accelerators();
        self.bindings.clear();
        self.index.clear();
        self.conflicts.clear();
        self.registered = false;
        debug!(target: targets::ACCELERATOR, "unregistered accelerators");
    }

    /// Whether the bindings are registered with a host.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// The command bound to `combination`, if any.
    pub fn lookup(&self, combination: KeyCombination) -> Option<CommandId> {
        self.index
            .get(&combination)
            .map(|&slot| self.bindings[slot].command_id)
    }

    /// Invoke the command bound to `combination`.
    ///
    /// Returns `true` if the combination was bound and `invoke` ran, or
    /// `false` so the caller can fall back to default handling.
    pub fn dispatch(&self, combination: KeyCombination, invoke: impl FnOnce(CommandId)) -> bool {
        match self.lookup(combination) {
            Some(command_id) => {
                trace!(
                    target: targets::ACCELERATOR,
                    accelerator = %combination,
                    command = %command_id,
                    "accelerator dispatched"
                );
                invoke(command_id);
                true
            }
            None => false,
        }
    }

    /// All bindings, in order of first appearance in the model.
    pub fn bindings(&self) -> &[AcceleratorBinding] {
        &self.bindings
    }

    /// Conflicts found by the last rebuild.
    pub fn conflicts(&self) -> &[AcceleratorConflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Key;
    use crate::menu::MenuItem;

    fn item(id: u32, accel: &str) -> MenuItem {
        MenuItem::new(id, format!("Item {id}"))
            .with_accelerator_str(accel)
            .unwrap()
    }

    #[test]
    fn test_enabled_items_with_shortcuts_only() {
        let model = MenuModel::new()
            .with_item(item(1, "Ctrl+N"))
            .with_item(MenuItem::new(2, "No shortcut"))
            .with_item(item(3, "Ctrl+O").with_enabled(false))
            .with_item(MenuItem::separator());

        let table = AcceleratorTable::from_model(&model);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(KeyCombination::ctrl(Key::N)), Some(CommandId(1)));
        assert_eq!(table.lookup(KeyCombination::ctrl(Key::O)), None);
    }

    #[test]
    fn test_submenus() {
        let file = MenuModel::new().with_item(item(1, "Ctrl+S"));
        let hidden = MenuModel::new().with_item(item(2, "Ctrl+H"));
        let model = MenuModel::new()
            .with_item(MenuItem::submenu("File", file))
            .with_item(MenuItem::submenu("Debug", hidden).with_enabled(false));

        let table = AcceleratorTable::from_model(&model);
        assert_eq!(table.lookup(KeyCombination::ctrl(Key::S)), Some(CommandId(1)));
        assert_eq!(table.lookup(KeyCombination::ctrl(Key::H)), None);
    }

    #[test]
    fn test_last_item_wins() {
        let model = MenuModel::new()
            .with_item(item(1, "Ctrl+S"))
            .with_item(item(2, "Ctrl+P"))
            .with_item(item(3, "Ctrl+S"));

        let table = AcceleratorTable::from_model(&model);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(KeyCombination::ctrl(Key::S)), Some(CommandId(3)));
        // First-appearance order is kept
        assert_eq!(table.bindings()[0].combination, KeyCombination::ctrl(Key::S));
        assert_eq!(
            table.conflicts(),
            &[AcceleratorConflict {
                combination: KeyCombination::ctrl(Key::S),
                replaced: CommandId(1),
                winner: CommandId(3),
            }]
        );
    }

    #[test]
    fn test_same_command_twice_is_not_a_conflict() {
        let model = MenuModel::new()
            .with_item(item(1, "Ctrl+S"))
            .with_item(item(1, "Ctrl+S"));

        let table = AcceleratorTable::from_model(&model);
        assert_eq!(table.len(), 1);
        assert!(table.conflicts().is_empty());
    }

    #[test]
    fn test_dispatch() {
        let model = MenuModel::new().with_item(item(9, "Alt+F4"));
        let table = AcceleratorTable::from_model(&model);

        let mut invoked = Vec::new();
        assert!(table.dispatch(KeyCombination::alt(Key::F4), |id| invoked.push(id)));
        assert!(!table.dispatch(KeyCombination::key_only(Key::F4), |id| invoked.push(id)));
        assert_eq!(invoked, vec![CommandId(9)]);
    }

    #[test]
    fn test_rebuild_replaces_everything() {
        let mut table = AcceleratorTable::from_model(&MenuModel::new().with_item(item(1, "Ctrl+A")));
        table.rebuild(&MenuModel::new().with_item(item(2, "Ctrl+B")));

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(KeyCombination::ctrl(Key::A)), None);
        assert_eq!(table.lookup(KeyCombination::ctrl(Key::B)), Some(CommandId(2)));
    }
}
