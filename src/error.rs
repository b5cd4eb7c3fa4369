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

use std::io;

use thiserror::Error;

/// Result type alias for the selection functions in this crate.
pub type SelectResult<T> = Result<T, SelectError>;

/// Everything that can go wrong while showing a selection list.
///
/// All of these are terminal to the single invocation. There is nothing to retry inside
/// this crate; a caller that wants to retry simply shows the list again.
#[derive(Error, Debug)]
pub enum SelectError {
    /// The caller passed an empty item list. Rejected before the interactive loop is
    /// entered, so the cursor index can never go out of range.
    #[error("cannot prompt for a selection from an empty list of items")]
    EmptyItems,

    /// Stdin, stdout, and stderr are all detached from a terminal, so there is nothing
    /// to draw the list on and no keyboard to read from.
    #[error("terminal is not interactive; a selection list requires a TTY")]
    NotInteractive,

    /// Raw mode could not be acquired, or reading a key event failed mid-session.
    #[error(transparent)]
    Io(#[from] io::Error),
}
