// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap Selection: the at-most-one selected map target.
//!
//! A map viewer highlights a single thing at a time: a cell in chunk mode, a
//! point in point mode. [`Selection`] tracks that target plus a revision
//! counter that bumps only when the selection actually changes, so renderers
//! and observers can cheaply ask "did anything change?".
//!
//! The container knows nothing about hit testing. Callers decide which target
//! a click lands on and then call [`Selection::toggle`] (click semantics),
//! [`Selection::select_only`] (programmatic selection, e.g. after a search),
//! or [`Selection::clear`] (deselect, seed change, reset).
//!
//! ## Example
//!
//! ```rust
//! use chunkmap_selection::Selection;
//!
//! let mut selection = Selection::<(i32, i32)>::new();
//!
//! // Click a cell: it becomes the selection.
//! selection.toggle((3, -2));
//! assert_eq!(selection.get(), Some(&(3, -2)));
//!
//! // Click a different cell: it replaces the selection.
//! selection.toggle((4, 0));
//! assert!(selection.is_selected(&(4, 0)));
//!
//! // Click it again: deselected.
//! selection.toggle((4, 0));
//! assert!(selection.is_empty());
//! assert_eq!(selection.revision(), 3);
//! ```

/// Holds at most one selected target and a change revision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection<T> {
    target: Option<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: None,
            revision: 0,
        }
    }

    /// Returns the selected target, if any.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }

    /// Returns the current revision counter.
    ///
    /// The counter is local to this instance and bumps only when the selected
    /// target changes. Re-selecting the current target or clearing an empty
    /// selection leaves it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects, returning the previous target.
    pub fn clear(&mut self) -> Option<T> {
        let previous = self.target.take();
        if previous.is_some() {
            self.bump_revision();
        }
        previous
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` if `target` is the selected target.
    #[must_use]
    pub fn is_selected(&self, target: &T) -> bool {
        self.target.as_ref() == Some(target)
    }

    /// Makes `target` the selection, replacing any previous one.
    ///
    /// Returns `true` if the selection changed.
    pub fn select_only(&mut self, target: T) -> bool {
        if self.is_selected(&target) {
            return false;
        }
        self.target = Some(target);
        self.bump_revision();
        true
    }

    /// Click semantics: selecting the current target deselects it, any other
    /// target replaces the selection.
    ///
    /// Returns the selection after the toggle.
    pub fn toggle(&mut self, target: T) -> Option<&T> {
        if self.is_selected(&target) {
            self.target = None;
        } else {
            self.target = Some(target);
        }
        self.bump_revision();
        self.target.as_ref()
    }

    /// Sets the selection to `target`, clearing it for `None`.
    ///
    /// Returns `true` if the selection changed.
    pub fn set(&mut self, target: Option<T>) -> bool {
        match target {
            Some(target) => self.select_only(target),
            None => self.clear().is_some(),
        }
    }
}
