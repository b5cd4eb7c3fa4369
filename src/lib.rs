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

//! # pickify
//!
//! This crate can be used in two ways:
//! 1. As a library. This is useful if you want to add a simple selection list to your CLI
//!    app written in Rust. You can see an example of this in the `demos` folder in the
//!    `interactive_demo.rs` file. You can run it using `cargo run --example
//!    interactive_demo`.
//! 1. As a binary. This is useful if you want to use this crate as a command line tool.
//!    The binary target is called `pick`.
//!
//! ## How to use it as a library?
//!
//! The functions that do the work of rendering the list UI are
//! [`select_one_from_list`] and [`select_many_from_list`]. Both take a list of
//! [`Item`]s (a display label paired with the id that is returned on selection), block
//! until the user confirms, and give back the selected id(s). Navigation is with the
//! arrow keys; the cursor is clamped to the list, it does not wrap.
//!
//! ```no_run
//! use pickify::{select_one_from_list, Item, SelectResult, StyleSheet};
//!
//! fn main() -> SelectResult<()> {
//!     let selected_id = select_one_from_list(
//!         vec![
//!             Item::new("Add a new task", "add"),
//!             Item::new("List all tasks", "list"),
//!             Item::new("Quit", "quit"),
//!         ],
//!         StyleSheet::default(),
//!     )?;
//!     println!("User selected: {selected_id}");
//!     Ok(())
//! }
//! ```
//!
//! In multiple selection mode, space toggles the focused item and enter confirms the
//! set of toggled ids. Pass `require_non_empty = true` to keep the list open until at
//! least one item has been toggled:
//!
//! ```no_run
//! use pickify::{select_many_from_list, Item, SelectResult, StyleSheet};
//!
//! fn main() -> SelectResult<()> {
//!     let selected_ids = select_many_from_list(
//!         vec![
//!             Item::new("Run unit tests", "test"),
//!             Item::new("Run lints", "lint"),
//!             Item::new("Build docs", "docs"),
//!         ],
//!         /* require_non_empty */ true,
//!         StyleSheet::default(),
//!     )?;
//!     println!("User selected: {selected_ids:?}");
//!     Ok(())
//! }
//! ```
//!
//! Both functions own the terminal for their duration: they put it into raw mode, hide
//! the cursor, and restore both on every exit path, including error returns. They
//! return a [`SelectError`] when the item list is empty, when the terminal is not
//! interactive, or when reading key events fails mid-session.
//!
//! ## How to use it as a binary?
//!
//! Pipe a list into `pick` and it shows the same list UI for the lines on `stdin`:
//!
//! ```shell
//! ls -1 | pick --selection-mode single --command-to-run-with-selection "echo %"
//! cat tasks.json | pick -s multiple --require-selection --json
//! ```
//!
//! Each selected id replaces `%` in the command given with `-c` and the command is run
//! in your shell. Without `-c`, the selected ids are printed to `stdout`, one per
//! line.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod components;
pub mod error;
pub mod event_loop;
pub mod function_component;
pub mod item;
pub mod keypress;
pub mod public_api;
pub mod state;
pub mod term;
pub mod test_utils;

pub use components::*;
pub use error::*;
pub use event_loop::*;
pub use function_component::*;
pub use item::*;
pub use keypress::*;
pub use public_api::*;
pub use state::*;
pub use term::*;
pub use test_utils::*;
