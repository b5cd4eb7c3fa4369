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

use std::io::stdout;

use clap::ValueEnum;

use crate::{enter_event_loop,
            get_terminal_width,
            is_fully_uninteractive_terminal,
            CrosstermKeyPressReader,
            EventLoopResult,
            Item,
            KeyPress,
            RawModeGuard,
            SelectComponent,
            SelectError,
            SelectResult,
            State,
            StyleSheet,
            TTYResult};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default, Hash,
)]
pub enum SelectionMode {
    /// Select only one option from list.
    #[default]
    Single,
    /// Select multiple options from list.
    Multiple,
}

/// Show the list and block until the user confirms exactly one item.
///
/// Arrow keys move the focus (clamped at both ends); space or enter confirms and
/// returns the focused item's id. There is no cancel key: the call returns only on a
/// confirmation or on a failure.
///
/// The terminal is put into raw mode for the duration of the call and restored on
/// every exit path. Fails fast with [SelectError::EmptyItems] on an empty list and
/// [SelectError::NotInteractive] when there is no TTY to draw on.
pub fn select_one_from_list(
    items: Vec<Item>,
    style: StyleSheet,
) -> SelectResult<String> {
    let mut state = build_state(items, SelectionMode::Single, false)?;
    let mut function_component = SelectComponent {
        write: stdout(),
        style,
    };
    let mut key_press_reader = CrosstermKeyPressReader;

    let _raw_mode = RawModeGuard::acquire()?;
    enter_event_loop(
        &mut state,
        &mut function_component,
        single_select_keypress_handler,
        &mut key_press_reader,
    )
}

/// Show the list and block until the user confirms a (possibly empty) set of items.
///
/// Arrow keys move the focus, space toggles the focused item, enter confirms and
/// returns the toggled ids. With `require_non_empty` set, enter is ignored until at
/// least one item is toggled, so the caller gets its "pick at least one" constraint
/// enforced inline instead of re-prompting.
///
/// The returned ids are deduplicated by construction; their order is an
/// implementation detail, not a contract.
pub fn select_many_from_list(
    items: Vec<Item>,
    require_non_empty: bool,
    style: StyleSheet,
) -> SelectResult<Vec<String>> {
    let mut state = build_state(items, SelectionMode::Multiple, require_non_empty)?;
    let mut function_component = SelectComponent {
        write: stdout(),
        style,
    };
    let mut key_press_reader = CrosstermKeyPressReader;

    let _raw_mode = RawModeGuard::acquire()?;
    enter_event_loop(
        &mut state,
        &mut function_component,
        multi_select_keypress_handler,
        &mut key_press_reader,
    )
}

/// Validate the input contract before any terminal state is touched.
fn build_state(
    items: Vec<Item>,
    selection_mode: SelectionMode,
    require_non_empty: bool,
) -> SelectResult<State> {
    if items.is_empty() {
        return Err(SelectError::EmptyItems);
    }
    if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
        return Err(SelectError::NotInteractive);
    }
    Ok(State {
        items,
        selection_mode,
        require_non_empty,
        max_display_width: get_terminal_width(),
        ..Default::default()
    })
}

fn single_select_keypress_handler(
    state: &mut State,
    key_press: KeyPress,
) -> EventLoopResult<String> {
    match key_press {
        KeyPress::Up => {
            state.caret_up();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Down => {
            state.caret_down();
            EventLoopResult::ContinueAndRerender
        }
        // Space and enter are equivalent confirm triggers in single selection mode.
        KeyPress::Space | KeyPress::Enter => match state.focused_item() {
            Some(item) => {
                tracing::debug!(id = %item.id, "confirm single selection");
                EventLoopResult::ExitWithResult(item.id.clone())
            }
            None => EventLoopResult::Continue,
        },
        KeyPress::Noop => EventLoopResult::Continue,
    }
}

fn multi_select_keypress_handler(
    state: &mut State,
    key_press: KeyPress,
) -> EventLoopResult<Vec<String>> {
    match key_press {
        KeyPress::Up => {
            state.caret_up();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Down => {
            state.caret_down();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Space => {
            state.toggle_focused();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Enter => {
            if state.require_non_empty && state.selected_ids.is_empty() {
                // Confirm is a no-op until something is toggled; the list stays open.
                EventLoopResult::Continue
            } else {
                tracing::debug!(ids = ?state.selected_ids, "confirm multiple selection");
                EventLoopResult::ExitWithResult(state.selected_ids.clone())
            }
        }
        KeyPress::Noop => EventLoopResult::Continue,
    }
}

#[cfg(test)]
mod test_select_from_list {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{TestStringWriter, TestVecKeyPressReader};

    fn create_state(selection_mode: SelectionMode, require_non_empty: bool) -> State {
        State {
            items: vec![
                Item::new("Choice 1", "1"),
                Item::new("Choice 2", "2"),
                Item::new("Choice 3", "3"),
            ],
            selection_mode,
            require_non_empty,
            ..Default::default()
        }
    }

    fn run_single(
        state: &mut State,
        key_press_vec: Vec<KeyPress>,
    ) -> SelectResult<String> {
        let mut function_component = SelectComponent {
            write: TestStringWriter::new(),
            style: StyleSheet::default(),
        };
        let mut reader = TestVecKeyPressReader {
            key_press_vec,
            index: None,
        };
        enter_event_loop(
            state,
            &mut function_component,
            single_select_keypress_handler,
            &mut reader,
        )
    }

    fn run_multi(
        state: &mut State,
        key_press_vec: Vec<KeyPress>,
    ) -> SelectResult<Vec<String>> {
        let mut function_component = SelectComponent {
            write: TestStringWriter::new(),
            style: StyleSheet::default(),
        };
        let mut reader = TestVecKeyPressReader {
            key_press_vec,
            index: None,
        };
        enter_event_loop(
            state,
            &mut function_component,
            multi_select_keypress_handler,
            &mut reader,
        )
    }

    #[test]
    fn test_enter_confirms_the_first_item() {
        let mut state = create_state(SelectionMode::Single, false);
        let result = run_single(&mut state, vec![KeyPress::Enter]);
        assert_eq!(result.unwrap(), "1");
    }

    #[test]
    fn test_space_also_confirms_in_single_mode() {
        let mut state = create_state(SelectionMode::Single, false);
        let result = run_single(&mut state, vec![KeyPress::Space]);
        assert_eq!(result.unwrap(), "1");
    }

    #[test]
    fn test_down_down_enter_confirms_the_third_item() {
        let mut state = create_state(SelectionMode::Single, false);
        let result =
            run_single(&mut state, vec![KeyPress::Down, KeyPress::Down, KeyPress::Enter]);
        assert_eq!(result.unwrap(), "3");
    }

    #[test]
    fn test_confirm_returns_the_focused_id_after_clamped_moves() {
        let mut state = create_state(SelectionMode::Single, false);
        // Three downs get clamped at the bottom, two ups land on the second item.
        let result = run_single(
            &mut state,
            vec![
                KeyPress::Down,
                KeyPress::Down,
                KeyPress::Down,
                KeyPress::Up,
                KeyPress::Up,
                KeyPress::Enter,
            ],
        );
        assert_eq!(result.unwrap(), "1");
        assert_eq!(state.caret_row_index, 0);
    }

    #[test]
    fn test_unmapped_keys_do_not_terminate_the_loop() {
        let mut state = create_state(SelectionMode::Single, false);
        let result = run_single(
            &mut state,
            vec![KeyPress::Noop, KeyPress::Noop, KeyPress::Down, KeyPress::Enter],
        );
        assert_eq!(result.unwrap(), "2");
    }

    #[test]
    fn test_multi_select_toggle_then_move_then_toggle() {
        let mut state = create_state(SelectionMode::Multiple, false);
        let result = run_multi(
            &mut state,
            vec![
                KeyPress::Space,
                KeyPress::Down,
                KeyPress::Down,
                KeyPress::Space,
                KeyPress::Enter,
            ],
        );
        assert_eq!(result.unwrap(), vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_multi_select_without_force_returns_empty_selection() {
        let mut state = create_state(SelectionMode::Multiple, false);
        let result = run_multi(&mut state, vec![KeyPress::Enter]);
        assert_eq!(result.unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_multi_select_with_force_ignores_enter_until_one_is_toggled() {
        let mut state = create_state(SelectionMode::Multiple, true);
        // The first enter is a no-op because nothing is toggled yet.
        let result = run_multi(
            &mut state,
            vec![KeyPress::Enter, KeyPress::Space, KeyPress::Enter],
        );
        assert_eq!(result.unwrap(), vec!["1".to_string()]);
    }

    #[test]
    fn test_multi_select_toggle_twice_removes_the_id() {
        let mut state = create_state(SelectionMode::Multiple, false);
        let result = run_multi(
            &mut state,
            vec![KeyPress::Space, KeyPress::Space, KeyPress::Enter],
        );
        assert_eq!(result.unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_empty_items_are_rejected_before_the_loop() {
        let result = select_one_from_list(vec![], StyleSheet::default());
        assert!(matches!(result, Err(SelectError::EmptyItems)));

        let result = select_many_from_list(vec![], true, StyleSheet::default());
        assert!(matches!(result, Err(SelectError::EmptyItems)));
    }
}
