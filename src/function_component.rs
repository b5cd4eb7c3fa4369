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

use crossterm::{cursor::{MoveToNextLine, MoveToPreviousLine},
                queue,
                style::Print,
                terminal::{Clear, ClearType}};

/// The render seam between the event loop and a concrete component. A component draws
/// one frame of `S` to its writer and repositions the terminal cursor to the top of
/// the frame, so the next [FunctionComponent::render] overwrites it in place.
pub trait FunctionComponent<W: Write, S> {
    fn get_write(&mut self) -> &mut W;

    /// Number of terminal rows one frame occupies.
    fn calculate_viewport_height(&self, state: &S) -> u16;

    fn render(&mut self, state: &S) -> Result<()>;

    /// Reserve vertical space below the current line. The newlines scroll the
    /// terminal if the frame would extend past the bottom row; without this, the
    /// cursor-up repositioning in [FunctionComponent::render] would land on the wrong
    /// line. Required once, before the first render.
    fn allocate_viewport_height_space(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();

        for _ in 0..viewport_height {
            queue!(writer, Print("\n"))?;
        }

        // Move the cursor back up.
        queue!(writer, MoveToPreviousLine(viewport_height))?;
        writer.flush()?;

        Ok(())
    }

    /// Erase the frame, leaving the cursor at the top of the (now blank) region. No
    /// residual lines remain in the scrollback.
    fn clear_viewport(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();

        for _ in 0..viewport_height {
            queue!(writer, Clear(ClearType::CurrentLine), MoveToNextLine(1))?;
        }

        // Move the cursor back up.
        queue!(writer, MoveToPreviousLine(viewport_height))?;
        writer.flush()?;

        Ok(())
    }
}
