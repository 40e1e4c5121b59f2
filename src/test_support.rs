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
//! Fixtures shared by the unit tests.

use crate::*;

/// Monospace font: every glyph is 8 pixels wide, 10 pixels tall, and sits on a single texture.
pub struct MonoFont;

impl FontProvider for MonoFont {
    fn metrics(&self, _size: f32) -> Option<FontMetrics> { Some(FontMetrics { ascent: 8.0, descent: 2.0, line_gap: 0.0 }) }

    fn glyph(&self, c: char, _size: f32, pen: Vec2f) -> Option<GlyphQuad> {
        if c == '\u{0}' {
            return None;
        }
        Some(GlyphQuad {
            min: vec2f(pen.x, pen.y - 8.0),
            max: vec2f(pen.x + 8.0, pen.y + 2.0),
            uv_min: vec2f(0.0, 0.0),
            uv_max: vec2f(1.0, 1.0),
            texture: TextureId::new(1),
            advance: 8.0,
        })
    }
}

#[derive(Default)]
/// Renderer that records what it was asked to do.
pub struct RecordingRenderer {
    pub frames: usize,
    pub scissors: Vec<Recti>,
    pub calls: usize,
    pub vertices: usize,
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self, _width: i32, _height: i32) { self.frames += 1; }

    fn set_scissor(&mut self, rect: Recti) { self.scissors.push(rect); }

    fn draw(&mut self, _call: &DrawCall, vertices: &[Vertex]) {
        self.calls += 1;
        self.vertices += vertices.len();
    }

    fn end(&mut self) {}
}

pub fn screen() -> Dimensioni { Dimensioni::new(800, 600) }

pub const DT: f32 = 1.0 / 60.0;

/// Context with the monospace font installed.
pub fn context() -> Context {
    let mut ctx = Context::new();
    ctx.set_font_provider(Box::new(MonoFont));
    ctx
}

/// Moves the pointer to `(x, y)` for the next frame.
pub fn hover(ctx: &mut Context, x: i32, y: i32) { ctx.input_mut().mousemove(x, y); }

/// Presses the left button at `(x, y)` for the next frame.
pub fn press(ctx: &mut Context, x: i32, y: i32) { ctx.input_mut().mousedown(x, y, MouseButton::LEFT); }

/// Releases the left button at `(x, y)` for the next frame.
pub fn release(ctx: &mut Context, x: i32, y: i32) { ctx.input_mut().mouseup(x, y, MouseButton::LEFT); }
