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
//! Fixed capacities and tuning knobs chosen when a [`crate::Context`] is created.

/// Default number of vertices the draw list accepts per frame.
pub const MAX_VERTICES: usize = 1 << 16;
/// Default number of draw calls the draw list accepts per frame.
pub const MAX_DRAW_CALLS: usize = 4096;
/// Default number of scissor regions the draw list accepts per frame.
pub const MAX_SCISSOR_REGIONS: usize = 256;
/// Default depth of the style stack.
pub const MAX_STYLE_STACK: usize = 64;
/// Default nesting depth of grid strips.
pub const MAX_GRID_DEPTH: usize = 8;
/// Default number of cells a single strip may declare.
pub const MAX_GRID_CELLS: usize = 32;
/// Default number of bytes of text input buffered per frame.
pub const MAX_TEXT_INPUT: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Upper bounds for every per-frame buffer. Operations that would exceed one are rejected and logged.
pub struct Capacities {
    /// Vertex buffer size.
    pub vertices: usize,
    /// Draw call buffer size.
    pub draw_calls: usize,
    /// Scissor region buffer size.
    pub scissor_regions: usize,
    /// Style stack depth.
    pub style_stack: usize,
    /// Maximum strip nesting.
    pub grid_depth: usize,
    /// Maximum cells per strip.
    pub grid_cells: usize,
    /// Bytes of text input kept per frame.
    pub text_input: usize,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            vertices: MAX_VERTICES,
            draw_calls: MAX_DRAW_CALLS,
            scissor_regions: MAX_SCISSOR_REGIONS,
            style_stack: MAX_STYLE_STACK,
            grid_depth: MAX_GRID_DEPTH,
            grid_cells: MAX_GRID_CELLS,
            text_input: MAX_TEXT_INPUT,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Timing of held keys and buttons: the first repeat fires after `delay` seconds, then every `interval`.
pub struct RepeatConfig {
    /// Seconds before the first repeat.
    pub delay: f32,
    /// Seconds between subsequent repeats.
    pub interval: f32,
}

impl Default for RepeatConfig {
    fn default() -> Self { Self { delay: 0.4, interval: 0.05 } }
}
