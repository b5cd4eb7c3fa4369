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

use crossterm::style::{ContentStyle, Stylize};

/// How the three kinds of rows are styled. The default sheet is the bold/marker
/// convention: the focused row and checked rows are bold, everything else is printed
/// plain.
#[derive(Copy, Clone, Debug)]
pub struct StyleSheet {
    pub normal_style: ContentStyle,
    pub focused_style: ContentStyle,
    pub checked_style: ContentStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            normal_style: ContentStyle::new(),
            focused_style: ContentStyle::new().bold(),
            checked_style: ContentStyle::new().bold(),
        }
    }
}
