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

use serde::{Deserialize, Serialize};

/// One selectable entry in a list.
///
/// `label` is the text that is displayed. `id` is the value that is returned on
/// selection. Ids must be unique within one list: the multiple-selection toggle set is
/// keyed by id, so duplicate ids collapse distinct rows into one toggle state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub id: String,
}

impl Item {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

impl From<(&str, &str)> for Item {
    fn from((label, id): (&str, &str)) -> Self { Item::new(label, id) }
}

/// For line-based callers (eg: the `pick` binary reading stdin) the label doubles as
/// the id.
impl From<&str> for Item {
    fn from(line: &str) -> Self { Item::new(line, line) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_pair() {
        let item = Item::from(("Choice 1", "1"));
        assert_eq!(item, Item::new("Choice 1", "1"));
    }

    #[test]
    fn test_from_line_uses_label_as_id() {
        let item = Item::from("Cargo.toml");
        assert_eq!(item.label, "Cargo.toml");
        assert_eq!(item.id, "Cargo.toml");
    }

    #[test]
    fn test_items_deserialize_from_json_array() {
        let json = r#"[
            {"label": "Choice 1", "id": "1"},
            {"label": "Choice 2", "id": "2"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(
            items,
            vec![Item::new("Choice 1", "1"), Item::new("Choice 2", "2")]
        );
    }
}
