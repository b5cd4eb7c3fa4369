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

use std::io::Write;

use crossterm::{cursor::{Hide, Show},
                execute};

use crate::{FunctionComponent, KeyPress, KeyPressReader, SelectResult};

/// What a keypress handler tells the event loop to do next. The payload type is the
/// handler's choice: the single-select handler exits with one id, the multi-select
/// handler with the toggled id set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<T> {
    Continue,
    ContinueAndRerender,
    ExitWithResult(T),
}

/// The blocking read-key → mutate-state → redraw cycle. Single-threaded and
/// cooperative: there is no background work, no timeout, and no cancellation; the
/// loop runs until `on_keypress` produces [EventLoopResult::ExitWithResult] or a read
/// fails.
///
/// The caller owns raw mode (see [crate::RawModeGuard]); this function owns the
/// cursor: it is hidden for the duration of the loop and shown again on every exit
/// path, including error returns.
pub fn enter_event_loop<W: Write, S, T>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult<T>,
    key_press_reader: &mut impl KeyPressReader,
) -> SelectResult<T> {
    execute!(function_component.get_write(), Hide)?;

    let result = run_event_loop(state, function_component, on_keypress, key_press_reader);

    // Show the cursor again even when the loop failed: the terminal must stay usable
    // after an aborted session.
    let restore_cursor = execute!(function_component.get_write(), Show);

    let selected = result?;
    restore_cursor?;
    Ok(selected)
}

fn run_event_loop<W: Write, S, T>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult<T>,
    key_press_reader: &mut impl KeyPressReader,
) -> SelectResult<T> {
    function_component.allocate_viewport_height_space(state)?;

    // First render before blocking for user input.
    function_component.render(state)?;

    loop {
        let key_press = key_press_reader.read_key_press()?;
        tracing::debug!(?key_press, "read key press");

        match on_keypress(state, key_press) {
            EventLoopResult::Continue => {
                // Noop. Simply continue the loop.
            }
            EventLoopResult::ContinueAndRerender => {
                function_component.render(state)?;
            }
            EventLoopResult::ExitWithResult(it) => {
                function_component.clear_viewport(state)?;
                return Ok(it);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, Result};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Item, SelectComponent, SelectError, State, StyleSheet,
                TestStringWriter, TestVecKeyPressReader};

    struct FailingKeyPressReader;

    impl KeyPressReader for FailingKeyPressReader {
        fn read_key_press(&mut self) -> Result<KeyPress> {
            Err(Error::other("keyboard unplugged"))
        }
    }

    fn create_state() -> State {
        State {
            items: vec![Item::new("Choice 1", "1"), Item::new("Choice 2", "2")],
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_frame_is_rendered_before_the_first_key() {
        let mut state = create_state();
        let mut function_component = SelectComponent {
            write: TestStringWriter::new(),
            style: StyleSheet::default(),
        };
        let mut reader = TestVecKeyPressReader {
            key_press_vec: vec![KeyPress::Enter],
            index: None,
        };

        let result = enter_event_loop(
            &mut state,
            &mut function_component,
            |_state, key_press| match key_press {
                KeyPress::Enter => EventLoopResult::ExitWithResult("done"),
                _ => EventLoopResult::Continue,
            },
            &mut reader,
        );

        assert_eq!(result.unwrap(), "done");
        // The frame was drawn even though the very first key confirmed.
        assert!(function_component.write.get_buffer().contains("Choice 1"));
    }

    #[test]
    fn test_read_failure_aborts_the_loop_and_restores_the_cursor() {
        let mut state = create_state();
        let mut function_component = SelectComponent {
            write: TestStringWriter::new(),
            style: StyleSheet::default(),
        };

        let result = enter_event_loop(
            &mut state,
            &mut function_component,
            |_state, _key_press| EventLoopResult::<String>::Continue,
            &mut FailingKeyPressReader,
        );

        assert!(matches!(result, Err(SelectError::Io(_))));

        let buffer = function_component.write.get_buffer();
        // Hide at entry, and Show again on the error path.
        assert!(buffer.contains("\u{1b}[?25l"));
        assert!(buffer.contains("\u{1b}[?25h"));
    }
}
