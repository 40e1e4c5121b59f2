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
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
//! Single-line text editing on a byte cursor kept at char boundaries.

use crate::*;

pub(crate) struct TextEditOutcome {
    pub cursor: usize,
    pub changed: bool,
}

fn insert_text(buf: &mut String, cursor: &mut usize, text: &str) -> bool {
    let text: String = text.chars().filter(|c| !c.is_control()).collect();
    if text.is_empty() {
        return false;
    }
    let insert_at = (*cursor).min(buf.len());
    buf.insert_str(insert_at, &text);
    *cursor = insert_at + text.len();
    true
}

fn delete_prev(buf: &mut String, cursor: &mut usize) -> bool {
    if buf.is_empty() || *cursor == 0 {
        return false;
    }
    let start = move_left(buf, *cursor);
    buf.replace_range(start..*cursor, "");
    *cursor = start;
    true
}

fn delete_next(buf: &mut String, cursor: usize) -> bool {
    if cursor >= buf.len() {
        return false;
    }
    let end = move_right(buf, cursor);
    buf.replace_range(cursor..end, "");
    true
}

fn move_left(buf: &str, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut new_cursor = cursor - 1;
    while new_cursor > 0 && !buf.is_char_boundary(new_cursor) {
        new_cursor -= 1;
    }
    new_cursor
}

fn move_right(buf: &str, cursor: usize) -> usize {
    if cursor >= buf.len() {
        return buf.len();
    }
    let mut new_cursor = cursor + 1;
    while new_cursor < buf.len() && !buf.is_char_boundary(new_cursor) {
        new_cursor += 1;
    }
    new_cursor
}

/// Clamps `cursor` into `buf` and back onto a char boundary.
pub(crate) fn clamp_cursor(buf: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(buf.len());
    while cursor > 0 && !buf.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

/// Applies the typed text and editing keys of one frame to `buf`.
pub(crate) fn apply_text_input(buf: &mut String, cursor: usize, input: &Input) -> TextEditOutcome {
    let mut cursor = clamp_cursor(buf, cursor);
    let mut changed = insert_text(buf, &mut cursor, input.text_input());

    if input.key_repeated(Keys::BACKSPACE) && delete_prev(buf, &mut cursor) {
        changed = true;
    }
    if input.key_repeated(Keys::DELETE) && delete_next(buf, cursor) {
        changed = true;
    }
    if input.key_repeated(Keys::LEFT) {
        cursor = move_left(buf, cursor);
    }
    if input.key_repeated(Keys::RIGHT) {
        cursor = move_right(buf, cursor);
    }
    if input.key_repeated(Keys::HOME) {
        cursor = 0;
    }
    if input.key_repeated(Keys::END) {
        cursor = buf.len();
    }

    TextEditOutcome { cursor, changed }
}
