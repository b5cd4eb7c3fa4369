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

use std::io::{Result, Write};

use crossterm::{cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
                queue,
                style::PrintStyledContent,
                terminal::{Clear, ClearType}};

use crate::{FunctionComponent, SelectionMode, State, StyleSheet};

pub struct SelectComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
}

const IS_FOCUSED: &str = "» ";
const IS_NOT_FOCUSED: &str = "  ";
const SINGLE_SELECT_BULLET: &str = "- ";
const MULTI_SELECT_IS_SELECTED: &str = "✓ ";
const MULTI_SELECT_IS_NOT_SELECTED: &str = "- ";

impl<W: Write> FunctionComponent<W, State> for SelectComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    /// One line per item; there is no header and no scrolling, so the frame height is
    /// always exactly the item count.
    fn calculate_viewport_height(&self, state: &State) -> u16 {
        u16::try_from(state.items.len()).unwrap_or(u16::MAX)
    }

    /// Print one full frame, then bring the cursor back to the top of the frame so the
    /// next render overwrites this one in place instead of stacking up in scrollback.
    fn render(&mut self, state: &State) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let style = self.style;
        let writer = self.get_write();

        for (row_index, item) in state.items.iter().enumerate() {
            let is_focused = row_index == state.caret_row_index;
            let is_selected = state.is_selected(&item.id);

            let row_text = match state.selection_mode {
                SelectionMode::Single => {
                    if is_focused {
                        format!("{IS_FOCUSED}{}", item.label)
                    } else {
                        format!("{SINGLE_SELECT_BULLET}{}", item.label)
                    }
                }
                SelectionMode::Multiple => {
                    let focus_marker = if is_focused { IS_FOCUSED } else { IS_NOT_FOCUSED };
                    let selection_marker = if is_selected {
                        MULTI_SELECT_IS_SELECTED
                    } else {
                        MULTI_SELECT_IS_NOT_SELECTED
                    };
                    format!("{focus_marker}{selection_marker}{}", item.label)
                }
            };

            let row_text =
                clip_text_to_width_with_ellipsis(row_text, state.max_display_width);

            // The Go-style convention: focus wins over checked, checked rows stay bold
            // even without focus.
            let row_style = if is_focused {
                style.focused_style
            } else if is_selected {
                style.checked_style
            } else {
                style.normal_style
            };

            queue! {
                writer,
                // Bring the caret back to the start of line.
                MoveToColumn(0),
                // Clear the current line so a shorter row fully replaces a longer one.
                Clear(ClearType::CurrentLine),
                // Print the text.
                PrintStyledContent(row_style.apply(row_text)),
                // Move to next line.
                MoveToNextLine(1),
            }?;
        }

        // Move the cursor back up.
        queue!(writer, MoveToPreviousLine(viewport_height))?;

        writer.flush()?;

        Ok(())
    }
}

/// A row that wraps would break the frame's line accounting, so rows longer than the
/// display width are clipped with a trailing ellipsis. Counts `char`s, not bytes: the
/// marker glyphs are multi-byte.
fn clip_text_to_width_with_ellipsis(line: String, max_display_width: usize) -> String {
    if max_display_width == 0 || line.chars().count() <= max_display_width {
        return line;
    }
    let clipped: String = line
        .chars()
        .take(max_display_width.saturating_sub(3))
        .collect();
    format!("{clipped}...")
}
