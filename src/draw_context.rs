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
use crate::font::text_width;
use crate::*;
use std::cmp::{max, min};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// How much of a rectangle the current clip hides.
pub(crate) enum Clip {
    /// Fully visible.
    None,
    /// Partially visible.
    Part,
    /// Fully hidden.
    All,
}

/// Drawing helpers shared by widgets and panel chrome.
pub(crate) struct DrawCtx<'a> {
    draw: &'a mut DrawList,
    style: &'a Style,
    font: Option<&'a dyn FontProvider>,
}

impl<'a> DrawCtx<'a> {
    pub(crate) fn new(draw: &'a mut DrawList, style: &'a Style, font: Option<&'a dyn FontProvider>) -> Self { Self { draw, style, font } }

    pub(crate) fn list(&mut self) -> &mut DrawList { self.draw }

    pub(crate) fn check_clip(&self, r: Recti) -> Clip {
        let cr = self.draw.clip();
        if r.x >= cr.x + cr.width || r.x + r.width <= cr.x || r.y >= cr.y + cr.height || r.y + r.height <= cr.y {
            return Clip::All;
        }
        if r.x >= cr.x && r.x + r.width <= cr.x + cr.width && r.y >= cr.y && r.y + r.height <= cr.y + cr.height {
            return Clip::None;
        }
        Clip::Part
    }

    pub(crate) fn draw_rect(&mut self, rect: Recti, color: Color) { let _ = self.draw.fill_rect(rect, color); }

    pub(crate) fn draw_box(&mut self, rect: Recti, color: Color) { let _ = self.draw.stroke_rect(rect, color); }

    /// Fills `rect` and outlines it when the style has a visible border color.
    pub(crate) fn draw_frame(&mut self, rect: Recti, color: Color) {
        self.draw_rect(rect, color);
        let border = self.style.border_color;
        if !border.is_transparent() {
            self.draw_box(rect, border);
        }
    }

    pub(crate) fn pen(&mut self, pen: Pen, rect: Recti, state: RenderState, colors: &WidgetColors, value: f32) {
        let args = PenArgs { rect, state, colors, value, style: self.style };
        pen(self.draw, &args);
    }

    pub(crate) fn text_width(&self, text: &str) -> i32 { text_width(self.font, text, self.style.font_size).ceil() as i32 }

    pub(crate) fn line_height(&self) -> i32 { self.metrics().map(|m| m.line_height().ceil() as i32).unwrap_or(0) }

    fn metrics(&self) -> Option<FontMetrics> { self.font.and_then(|f| f.metrics(self.style.font_size)) }

    /// Draws `text` with its top-left corner at `pos`, skipping glyphs that would cross `limit_x`.
    pub(crate) fn draw_text(&mut self, text: &str, pos: Vec2i, limit_x: i32, color: Color) {
        let (Some(font), Some(metrics)) = (self.font, self.metrics()) else { return };
        let size = self.style.font_size;
        let bounds = rect(pos.x, pos.y, self.text_width(text), metrics.line_height().ceil() as i32);
        if self.check_clip(bounds) == Clip::All {
            return;
        }
        let mut pen = vec2f(pos.x as f32, pos.y as f32 + metrics.ascent);
        for c in text.chars() {
            let Some(glyph) = font.glyph(c, size, pen) else { continue };
            if glyph.max.x > limit_x as f32 {
                break;
            }
            let _ = self.draw.glyph_quad(&glyph, color);
            pen.x += glyph.advance;
        }
    }

    /// Draws `text` inside `rect` with the style's padding and the requested alignment.
    pub(crate) fn draw_control_text(&mut self, text: &str, rect: Recti, color: Color, align: TextAlign) {
        let padding = self.style.padding;
        let width = self.text_width(text);
        let line_height = self.line_height();
        let baseline = self.metrics().map(|m| m.ascent.round() as i32).unwrap_or(0);
        let x = match align {
            TextAlign::Center => rect.x + (rect.width - width) / 2,
            TextAlign::Right => rect.x + rect.width - width - padding,
            TextAlign::Left => rect.x + padding,
        };
        let y = Self::baseline_aligned_top(rect, line_height, baseline);
        self.draw_text(text, vec2(x, y), rect.x + rect.width, color);
    }

    fn baseline_aligned_top(rect: Recti, line_height: i32, baseline: i32) -> i32 {
        if rect.height >= line_height {
            return rect.y + (rect.height - line_height) / 2;
        }

        let baseline_center = rect.y + rect.height / 2;
        let min_top = rect.y + rect.height - line_height;
        let max_top = rect.y;
        Self::clamp(baseline_center - baseline, min_top, max_top)
    }

    fn clamp(x: i32, a: i32, b: i32) -> i32 { min(b, max(a, x)) }
}
