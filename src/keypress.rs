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

use std::io::Result;

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind};

/// The key events the selection list reacts to. Everything else is [KeyPress::Noop]:
/// the list has no cancellation key, it stays open until a confirm key terminates the
/// loop.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    Up,
    Down,
    /// Toggle key in multiple selection mode, confirm key in single selection mode.
    Space,
    Enter,
    #[default]
    Noop,
}

/// The "read next key event" capability the event loop needs from its environment.
/// [CrosstermKeyPressReader] is the real implementation;
/// [crate::TestVecKeyPressReader] feeds scripted sequences in tests.
pub trait KeyPressReader {
    fn read_key_press(&mut self) -> Result<KeyPress>;
}

#[derive(Debug)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> Result<KeyPress> {
        let event = read()?;
        Ok(classify_key_event(event))
    }
}

/// Only key *press* events count. Windows reports press, repeat, and release; acting
/// on all three would double every cursor move.
fn classify_key_event(event: Event) -> KeyPress {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Char(' ') => KeyPress::Space,
            _ => KeyPress::Noop,
        },
        _ => KeyPress::Noop,
    }
}
