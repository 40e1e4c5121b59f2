//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::config::RepeatConfig;
use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as reported by the input system.
    pub struct MouseButton : u32 {
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the middle mouse button is set.
    pub fn is_middle(&self) -> bool { self.intersects(Self::MIDDLE) }
    /// Returns `true` if the right mouse button is set.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if the left mouse button is set.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no mouse buttons are set.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Keys the UI reacts to. Modifiers live in the same set as navigation keys.
    pub struct Keys : u32 {
        /// Alt modifier.
        const ALT = 1 << 14;
        /// Control modifier.
        const CTRL = 1 << 13;
        /// Shift modifier.
        const SHIFT = 1 << 12;
        /// Space bar.
        const SPACE = 1 << 11;
        /// End key.
        const END = 1 << 10;
        /// Home key.
        const HOME = 1 << 9;
        /// Down arrow.
        const DOWN = 1 << 8;
        /// Up arrow.
        const UP = 1 << 7;
        /// Right arrow.
        const RIGHT = 1 << 6;
        /// Left arrow.
        const LEFT = 1 << 5;
        /// Delete key.
        const DELETE = 1 << 4;
        /// Backspace key.
        const BACKSPACE = 1 << 3;
        /// Escape key.
        const ESCAPE = 1 << 2;
        /// Return/Enter key.
        const ENTER = 1 << 1;
        /// Tab key.
        const TAB = 1;
        /// No keys.
        const NONE = 0;
    }
}

impl Keys {
    /// Returns `true` if no keys are set.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if Shift is set.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
    /// Returns `true` if Control is set.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Alt is set.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
}

/// Keys that auto-repeat while held.
const REPEATING_KEYS: [Keys; 8] = [Keys::BACKSPACE, Keys::DELETE, Keys::LEFT, Keys::RIGHT, Keys::UP, Keys::DOWN, Keys::HOME, Keys::END];

#[derive(Clone, Debug)]
/// Complete input state for one frame, for hosts that poll instead of forwarding events.
pub struct FrameInput {
    /// Pointer position in screen pixels.
    pub mouse_pos: Vec2i,
    /// Buttons currently held.
    pub mouse_down: MouseButton,
    /// Wheel movement since the previous frame.
    pub scroll: Vec2i,
    /// Keys currently held.
    pub keys_down: Keys,
    /// Text typed since the previous frame.
    pub text: String,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2i::default(),
            mouse_down: MouseButton::NONE,
            scroll: Vec2i::default(),
            keys_down: Keys::NONE,
            text: String::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
/// Repeat timer for one held key or button.
struct Repeat {
    timer: f32,
    triggered: bool,
}

impl Repeat {
    fn update(&mut self, down: bool, pressed: bool, dt: f32, config: &RepeatConfig) {
        self.triggered = false;
        if pressed {
            self.triggered = true;
            self.timer = config.delay;
            return;
        }
        if !down {
            self.timer = 0.0;
            return;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.triggered = true;
            self.timer += config.interval.max(f32::EPSILON);
            // a long stall fires once, not once per missed interval
            if self.timer <= 0.0 {
                self.timer = config.interval;
            }
        }
    }
}

#[derive(Clone, Debug)]
/// Aggregates raw input collected between frames and exposes per-frame edges to widgets.
pub struct Input {
    mouse_pos: Vec2i,
    last_mouse_pos: Vec2i,
    mouse_delta: Vec2i,
    press_origin: Vec2i,
    scroll_delta: Vec2i,
    mouse_down: MouseButton,
    mouse_pressed: MouseButton,
    mouse_released: MouseButton,
    keys_down: Keys,
    keys_pressed: Keys,
    keys_released: Keys,
    text: String,
    text_limit: usize,
    text_overflow: bool,
    dt: f32,
    repeat_config: RepeatConfig,
    key_repeat: [Repeat; REPEATING_KEYS.len()],
    mouse_repeat: Repeat,
}

impl Default for Input {
    fn default() -> Self { Self::new(crate::config::MAX_TEXT_INPUT, RepeatConfig::default()) }
}

impl Input {
    /// Creates an empty input state keeping at most `text_limit` bytes of typed text per frame.
    pub fn new(text_limit: usize, repeat_config: RepeatConfig) -> Self {
        Self {
            mouse_pos: Vec2i::default(),
            last_mouse_pos: Vec2i::default(),
            mouse_delta: Vec2i::default(),
            press_origin: Vec2i::default(),
            scroll_delta: Vec2i::default(),
            mouse_down: MouseButton::NONE,
            mouse_pressed: MouseButton::NONE,
            mouse_released: MouseButton::NONE,
            keys_down: Keys::NONE,
            keys_pressed: Keys::NONE,
            keys_released: Keys::NONE,
            text: String::with_capacity(text_limit),
            text_limit,
            text_overflow: false,
            dt: 0.0,
            repeat_config,
            key_repeat: [Repeat::default(); REPEATING_KEYS.len()],
            mouse_repeat: Repeat::default(),
        }
    }

    /// Replaces the repeat timing.
    pub fn set_repeat_config(&mut self, config: RepeatConfig) { self.repeat_config = config; }

    /// Updates the current mouse pointer position.
    pub fn mousemove(&mut self, x: i32, y: i32) { self.mouse_pos = vec2(x, y); }

    /// Records that the specified mouse button was pressed.
    pub fn mousedown(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_pressed |= btn & !self.mouse_down;
        self.mouse_down |= btn;
    }

    /// Records that the specified mouse button was released.
    pub fn mouseup(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_released |= btn & self.mouse_down;
        self.mouse_down &= !btn;
    }

    /// Accumulates scroll wheel movement.
    pub fn scroll(&mut self, x: i32, y: i32) {
        self.scroll_delta.x += x;
        self.scroll_delta.y += y;
    }

    /// Records that a key was pressed. Host auto-repeat of an already held key is ignored.
    pub fn keydown(&mut self, key: Keys) {
        self.keys_pressed |= key & !self.keys_down;
        self.keys_down |= key;
    }

    /// Records that a key was released.
    pub fn keyup(&mut self, key: Keys) {
        self.keys_released |= key & self.keys_down;
        self.keys_down &= !key;
    }

    /// Appends UTF-8 text to the bounded input buffer. Text beyond the limit is dropped.
    pub fn text(&mut self, text: &str) {
        for c in text.chars() {
            if self.text.len() + c.len_utf8() > self.text_limit {
                if !self.text_overflow {
                    tracing::warn!("text input exceeds {} bytes this frame, dropping the rest", self.text_limit);
                    self.text_overflow = true;
                }
                return;
            }
            self.text.push(c);
        }
    }

    /// Replaces the held state with a polled snapshot, deriving edges from the previous state.
    pub fn apply(&mut self, frame: &FrameInput) {
        self.mousemove(frame.mouse_pos.x, frame.mouse_pos.y);
        let buttons = frame.mouse_down;
        self.mousedown(frame.mouse_pos.x, frame.mouse_pos.y, buttons);
        self.mouseup(frame.mouse_pos.x, frame.mouse_pos.y, self.mouse_down & !buttons);
        self.scroll(frame.scroll.x, frame.scroll.y);
        let keys = frame.keys_down;
        self.keydown(keys);
        self.keyup(self.keys_down & !keys);
        self.text(&frame.text);
    }

    pub(crate) fn prelude(&mut self, dt: f32) {
        self.dt = dt.max(0.0);
        self.mouse_delta = self.mouse_pos - self.last_mouse_pos;
        if self.mouse_pressed.is_left() {
            self.press_origin = self.mouse_pos;
        }
        let config = self.repeat_config;
        for (repeat, key) in self.key_repeat.iter_mut().zip(REPEATING_KEYS.iter()) {
            repeat.update(self.keys_down.intersects(*key), self.keys_pressed.intersects(*key), self.dt, &config);
        }
        self.mouse_repeat.update(self.mouse_down.is_left(), self.mouse_pressed.is_left(), self.dt, &config);
    }

    pub(crate) fn epilogue(&mut self) {
        self.mouse_pressed = MouseButton::NONE;
        self.mouse_released = MouseButton::NONE;
        self.keys_pressed = Keys::NONE;
        self.keys_released = Keys::NONE;
        self.text.clear();
        self.text_overflow = false;
        self.scroll_delta = vec2(0, 0);
        self.last_mouse_pos = self.mouse_pos;
    }

    /// Returns the pointer position.
    pub fn mouse_pos(&self) -> Vec2i { self.mouse_pos }
    /// Returns the pointer movement since the previous frame.
    pub fn mouse_delta(&self) -> Vec2i { self.mouse_delta }
    /// Returns where the left button was last pressed.
    pub fn press_origin(&self) -> Vec2i { self.press_origin }
    /// Returns the wheel movement of this frame.
    pub fn scroll_delta(&self) -> Vec2i { self.scroll_delta }
    /// Returns the held mouse buttons.
    pub fn mouse_down(&self) -> MouseButton { self.mouse_down }
    /// Returns the buttons pressed this frame.
    pub fn mouse_pressed(&self) -> MouseButton { self.mouse_pressed }
    /// Returns the buttons released this frame.
    pub fn mouse_released(&self) -> MouseButton { self.mouse_released }
    /// Returns `true` on the press frame of the left button and on each of its repeats.
    pub fn mouse_repeated(&self) -> bool { self.mouse_repeat.triggered }
    /// Returns the held keys.
    pub fn keys_down(&self) -> Keys { self.keys_down }
    /// Returns `true` if any of `key` is held.
    pub fn key_down(&self, key: Keys) -> bool { self.keys_down.intersects(key) }
    /// Returns `true` if any of `key` was pressed this frame.
    pub fn key_pressed(&self, key: Keys) -> bool { self.keys_pressed.intersects(key) }
    /// Returns `true` if any of `key` was released this frame.
    pub fn key_released(&self, key: Keys) -> bool { self.keys_released.intersects(key) }
    /// Returns the UTF-8 text typed this frame.
    pub fn text_input(&self) -> &str { &self.text }
    /// Returns the frame delta time in seconds.
    pub fn dt(&self) -> f32 { self.dt }

    /// Returns `true` on the press frame of `key` and on each repeat while it stays held.
    pub fn key_repeated(&self, key: Keys) -> bool {
        match REPEATING_KEYS.iter().position(|k| *k == key) {
            Some(i) => self.key_repeat[i].triggered,
            None => self.key_pressed(key),
        }
    }
}
