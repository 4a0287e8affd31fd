//! Type-safe key bindings with help metadata.
//!
//! This module provides the key binding system used by the crate's
//! components. A [`Binding`] couples one or more key codes with the help
//! text shown in help views, and the [`KeyMap`] trait lets components
//! expose their bindings in a uniform way.
//!
//! # Examples
//!
//! ```rust
//! use datatable_widgets::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! struct MyKeyMap {
//!     next: Binding,
//!     prev: Binding,
//! }
//!
//! impl KeyMap for MyKeyMap {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.prev, &self.next]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.prev, &self.next]]
//!     }
//! }
//!
//! let keymap = MyKeyMap {
//!     next: Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next"),
//!     prev: Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]).with_help("←/h", "prev"),
//! };
//! assert_eq!(keymap.short_help().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text for a key binding: the key label and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the keys, e.g. `"←/h"`.
    pub key: String,
    /// Short description of the action, e.g. `"prev page"`.
    pub desc: String,
}

/// A key binding: one or more key codes that trigger a single action.
///
/// Bindings are matched against incoming [`KeyMsg`] events by key code.
/// A disabled binding never matches, which lets components switch off
/// actions (e.g. "next page" on the last page) without rebuilding their
/// keymap.
///
/// # Examples
///
/// ```rust
/// use datatable_widgets::key::Binding;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next page");
/// let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::empty() };
/// assert!(next.matches(&msg));
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger this binding.
    pub keys: Vec<KeyCode>,
    /// Help text shown in help views.
    pub help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns true if this binding is currently enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the binding. Disabled bindings never match
    /// and are skipped by help views.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled && self.keys.contains(&msg.key)
    }
}

/// Trait for keymaps that can describe their bindings to help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
