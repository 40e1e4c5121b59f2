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
use crate::context::Context;
use crate::*;

impl Context {
    /// Draws `text` in the next cell with the style's alignment.
    pub fn label(&mut self, text: &str) { self.label_ex(text, WidgetOption::NONE); }

    /// Draws `text` in the next cell, aligned as `opt` requests.
    pub fn label_ex(&mut self, text: &str, opt: WidgetOption) {
        let Some((_, r)) = self.widget_cell() else { return };
        let align = self.text_align(opt);
        let color = if opt.is_disabled() { self.style.button.disabled } else { self.style.text_color };
        self.draw_ctx().draw_control_text(text, r, color, align);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use crate::*;

    #[test]
    fn label_draws_its_glyphs_inside_the_body() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 100), PanelOption::NONE);
        ctx.frame(screen(), DT, |ctx| {
            ctx.show_panel(p, |ctx| ctx.label("abc"));
        });
        let glyphs: usize = ctx.draw_list().draw_calls().iter().filter(|c| c.texture == Some(TextureId::new(1))).map(|c| c.vertex_count / 6).sum();
        assert_eq!(glyphs, 3);
    }

    #[test]
    fn label_without_font_still_takes_a_cell() {
        let mut ctx = Context::new();
        let p = ctx.add_panel("p", rect(0, 0, 200, 100), PanelOption::NONE);
        let mut next = None;
        ctx.frame(screen(), DT, |ctx| {
            ctx.show_panel(p, |ctx| {
                ctx.label("abc");
                next = ctx.next_cell().ok().map(|r| r.y);
            });
        });
        assert_eq!(next, Some(4 + 24));
    }
}
