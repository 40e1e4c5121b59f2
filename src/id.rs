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
//! Widget identity.
//!
//! A widget key packs the identity scope into the high 16 bits and the widget's top-left corner
//! into two 24-bit fields. Keys are therefore stable across frames as long as the widget does not
//! move, and unique within a scope for coordinates in `-2^23..2^23`.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Identity namespace a widget key is derived in.
pub struct Scope(u16);

impl Scope {
    /// Widgets outside of any panel.
    pub const ROOT: Scope = Scope(0);
    /// Floating dropdown overlays.
    pub const OVERLAY: Scope = Scope(u16::MAX);
    /// Splitter handles between docked panels.
    pub const SPLITTERS: Scope = Scope(u16::MAX - 1);

    /// Scope of the widgets declared inside a panel's body.
    pub fn panel(index: usize) -> Self { Scope((1 + index * 2) as u16) }

    /// Scope of a panel's title bar, tabs, scrollbars and resize grip.
    pub fn chrome(index: usize) -> Self { Scope((2 + index * 2) as u16) }

    /// Returns the raw scope value.
    pub fn raw(self) -> u16 { self.0 }
}

const COORD_BITS: u32 = 24;
const COORD_MASK: u64 = (1 << COORD_BITS) - 1;

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Stable identifier of a widget.
pub struct WidgetId(u64);

impl WidgetId {
    /// Derives the key of a widget whose top-left corner is at `(x, y)` inside `scope`.
    pub fn new(scope: Scope, x: i32, y: i32) -> Self {
        let x = (x as u32 as u64) & COORD_MASK;
        let y = (y as u32 as u64) & COORD_MASK;
        Self(((scope.0 as u64) << (2 * COORD_BITS)) | (x << COORD_BITS) | y)
    }

    /// Creates a stable ID from a string label using FNV-1a hashing.
    pub fn from_label(s: &str) -> Self {
        let mut hash: u64 = 0xcbf29ce484222325;
        for byte in s.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        Self(hash)
    }

    /// Returns the scope the key was derived in.
    pub fn scope(self) -> Scope { Scope((self.0 >> (2 * COORD_BITS)) as u16) }

    /// Returns the raw numeric key.
    pub fn raw(self) -> u64 { self.0 }
}
