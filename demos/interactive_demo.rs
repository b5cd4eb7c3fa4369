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

//! Run with `cargo run --example interactive_demo`.

use pickify::{select_many_from_list,
              select_one_from_list,
              Item,
              SelectResult,
              StyleSheet};

fn main() -> SelectResult<()> {
    single_select()?;
    multiple_select()?;
    multiple_select_require_non_empty()?;
    Ok(())
}

fn create_items() -> Vec<Item> {
    vec![
        Item::new("Run unit tests", "test"),
        Item::new("Run lints", "lint"),
        Item::new("Build docs", "docs"),
        Item::new("Publish to crates.io", "publish"),
    ]
}

/// Move up and down, press space or enter to confirm.
fn single_select() -> SelectResult<()> {
    println!("Single select: pick one task");
    let selected_id = select_one_from_list(create_items(), StyleSheet::default())?;
    println!("User selected: {selected_id}");
    Ok(())
}

/// Space toggles, enter confirms. Confirming with nothing toggled is allowed here and
/// returns an empty selection.
fn multiple_select() -> SelectResult<()> {
    println!("Multiple select: pick any number of tasks");
    let selected_ids =
        select_many_from_list(create_items(), false, StyleSheet::default())?;
    println!("User selected: {selected_ids:?}");
    Ok(())
}

/// Same, but enter is ignored until at least one item is toggled.
fn multiple_select_require_non_empty() -> SelectResult<()> {
    println!("Multiple select: at least one task is required");
    let selected_ids =
        select_many_from_list(create_items(), true, StyleSheet::default())?;
    println!("User selected: {selected_ids:?}");
    Ok(())
}
