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
//! Font hooks. The crate does no shaping or rasterization itself; a host supplies glyph quads
//! from its own atlas through [`FontProvider`]. Without a provider text is laid out as empty.

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
/// Vertical metrics of a font at one size.
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph, as a positive number.
    pub descent: f32,
    /// Extra space between lines.
    pub line_gap: f32,
}

impl FontMetrics {
    /// Height of one line of text.
    pub fn line_height(&self) -> f32 { self.ascent + self.descent + self.line_gap }
}

#[derive(Copy, Clone, Debug)]
/// A positioned, textured glyph.
pub struct GlyphQuad {
    /// Top-left corner in screen pixels.
    pub min: Vec2f,
    /// Bottom-right corner in screen pixels.
    pub max: Vec2f,
    /// Texture coordinate at `min`.
    pub uv_min: Vec2f,
    /// Texture coordinate at `max`.
    pub uv_max: Vec2f,
    /// Atlas texture.
    pub texture: TextureId,
    /// Horizontal pen advance to the next glyph.
    pub advance: f32,
}

/// Source of glyph geometry.
pub trait FontProvider {
    /// Returns the metrics at `size` pixels, or `None` if the size is unsupported.
    fn metrics(&self, size: f32) -> Option<FontMetrics>;

    /// Returns the quad of `c` at `size` pixels with its baseline origin at `pen`, or `None` if the
    /// glyph is missing. Missing glyphs advance nothing.
    fn glyph(&self, c: char, size: f32, pen: Vec2f) -> Option<GlyphQuad>;
}

/// Returns the advance width of `text`.
pub(crate) fn text_width(font: Option<&dyn FontProvider>, text: &str, size: f32) -> f32 {
    let Some(font) = font else { return 0.0 };
    let mut pen = 0.0;
    for c in text.chars() {
        if let Some(g) = font.glyph(c, size, vec2f(pen, 0.0)) {
            pen += g.advance;
        }
    }
    pen
}

/// Returns the byte offset of the character boundary closest to `x` pixels from the start of `text`.
pub(crate) fn hit_test(font: Option<&dyn FontProvider>, text: &str, size: f32, x: f32) -> usize {
    let Some(font) = font else { return text.len() };
    let mut pen = 0.0;
    for (i, c) in text.char_indices() {
        let advance = font.glyph(c, size, vec2f(pen, 0.0)).map(|g| g.advance).unwrap_or(0.0);
        if x < pen + advance / 2.0 {
            return i;
        }
        pen += advance;
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MonoFont;

    #[test]
    fn width_sums_advances() {
        let font = MonoFont;
        assert_eq!(text_width(Some(&font), "abcd", 14.0), 32.0);
        assert_eq!(text_width(None, "abcd", 14.0), 0.0);
    }

    #[test]
    fn hit_test_rounds_to_nearest_boundary() {
        let font = MonoFont;
        assert_eq!(hit_test(Some(&font), "abcd", 14.0, 0.0), 0);
        assert_eq!(hit_test(Some(&font), "abcd", 14.0, 5.0), 1);
        assert_eq!(hit_test(Some(&font), "abcd", 14.0, 100.0), 4);
    }
}
