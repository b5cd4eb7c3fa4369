/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crate::{Item, SelectionMode};

/// All the mutable state for one blocking list invocation. Created at function entry,
/// dropped when a result (or error) is produced. Nothing is persisted across
/// invocations.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct State {
    /// Fixed for the lifetime of one invocation.
    pub items: Vec<Item>,
    /// Invariant: `0 <= caret_row_index < items.len()` whenever `items` is non-empty.
    pub caret_row_index: usize,
    /// Ids toggled on in [SelectionMode::Multiple]. Kept duplicate-free by
    /// [State::toggle_focused].
    pub selected_ids: Vec<String>,
    pub selection_mode: SelectionMode,
    /// In [SelectionMode::Multiple]: when true, confirm is a no-op while
    /// `selected_ids` is empty.
    pub require_non_empty: bool,
    /// Rows longer than this many characters are clipped. 0 disables clipping.
    pub max_display_width: usize,
}

impl State {
    /// Move the caret one row up. Clamped at the top, does not wrap.
    pub fn caret_up(&mut self) {
        self.caret_row_index = self.caret_row_index.saturating_sub(1);
    }

    /// Move the caret one row down. Clamped at the bottom, does not wrap.
    pub fn caret_down(&mut self) {
        if self.caret_row_index + 1 < self.items.len() {
            self.caret_row_index += 1;
        }
    }

    /// The row that currently has keyboard focus.
    pub fn focused_item(&self) -> Option<&Item> { self.items.get(self.caret_row_index) }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|it| it == id)
    }

    /// Flip membership of the focused item's id in the toggle set: add if absent,
    /// remove if present. Self-inverse.
    pub fn toggle_focused(&mut self) {
        let maybe_item = self.items.get(self.caret_row_index);
        let maybe_index = maybe_item
            .and_then(|item| self.selected_ids.iter().position(|it| it == &item.id));
        match (maybe_item, maybe_index) {
            // No row has focus (empty list).
            (None, _) => (),
            // Id already in selected_ids so remove it.
            (Some(_), Some(index)) => {
                self.selected_ids.remove(index);
            }
            // Id not found in selected_ids so add it.
            (Some(item), None) => self.selected_ids.push(item.id.clone()),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_state() -> State {
        State {
            items: vec![
                Item::new("Choice 1", "1"),
                Item::new("Choice 2", "2"),
                Item::new("Choice 3", "3"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_caret_is_clamped_at_the_top() {
        let mut state = create_state();
        for _ in 0..10 {
            state.caret_up();
            assert_eq!(state.caret_row_index, 0);
        }
    }

    #[test]
    fn test_caret_is_clamped_at_the_bottom() {
        let mut state = create_state();
        for _ in 0..10 {
            state.caret_down();
        }
        assert_eq!(state.caret_row_index, 2);
    }

    #[test]
    fn test_caret_stays_in_bounds_for_any_up_down_sequence() {
        let mut state = create_state();
        let moves = [0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1];
        for down in moves {
            if down == 1 {
                state.caret_down();
            } else {
                state.caret_up();
            }
            assert!(state.caret_row_index < state.items.len());
        }
    }

    #[test]
    fn test_focused_item_follows_the_caret() {
        let mut state = create_state();
        assert_eq!(state.focused_item().unwrap().id, "1");
        state.caret_down();
        state.caret_down();
        assert_eq!(state.focused_item().unwrap().id, "3");
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut state = create_state();
        state.toggle_focused();
        assert_eq!(state.selected_ids, vec!["1".to_string()]);
        state.toggle_focused();
        assert_eq!(state.selected_ids, Vec::<String>::new());
    }

    #[test]
    fn test_toggle_never_duplicates_an_id() {
        let mut state = create_state();
        state.toggle_focused();
        state.caret_down();
        state.toggle_focused();
        state.caret_up();
        // "1" is already toggled on; a second toggle removes it rather than adding a
        // duplicate.
        state.toggle_focused();
        assert_eq!(state.selected_ids, vec!["2".to_string()]);
    }

    #[test]
    fn test_toggle_on_empty_list_is_a_noop() {
        let mut state = State::default();
        state.toggle_focused();
        assert!(state.selected_ids.is_empty());
    }
}
