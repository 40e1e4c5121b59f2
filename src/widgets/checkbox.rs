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
    /// Draws a check box followed by `label`. Toggles `state` on click and on Space while focused.
    pub fn checkbox(&mut self, label: &str, state: &mut bool) -> ResourceState {
        let Some((cell, r)) = self.widget_cell() else { return ResourceState::NONE };
        let id = self.widget_id(cell);
        let control = self.control(id, r, WidgetOption::NONE);

        let mut res = ResourceState::NONE;
        if control.clicked || (control.focused && self.input.key_pressed(Keys::SPACE)) {
            *state = !*state;
            res |= ResourceState::CHANGE;
        }

        let style = self.style;
        let side = r.height.min(r.width);
        let check = rect(r.x, r.y, side, side);
        let text = rect(r.x + side, r.y, (r.width - side).max(0), r.height);
        let mut ctx = self.draw_ctx();
        ctx.pen(style.checkbox_pen, check, control.render_state(), &style.checkbox, if *state { 1.0 } else { 0.0 });
        ctx.draw_control_text(label, text, style.text_color, TextAlign::Left);
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use crate::*;

    #[test]
    fn click_toggles_once_per_release() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 100), PanelOption::NONE);
        let mut checked = false;
        let mut changes = 0;
        let mut step = |ctx: &mut Context, checked: &mut bool| {
            ctx.frame(screen(), DT, |ctx| {
                ctx.show_panel(p, |ctx| {
                    if ctx.checkbox("on", checked).is_changed() {
                        changes += 1;
                    }
                });
            });
        };
        hover(&mut ctx, 12, 12);
        step(&mut ctx, &mut checked);
        step(&mut ctx, &mut checked);
        press(&mut ctx, 12, 12);
        step(&mut ctx, &mut checked);
        assert!(!checked);
        release(&mut ctx, 12, 12);
        step(&mut ctx, &mut checked);
        assert!(checked);
        step(&mut ctx, &mut checked);
        assert!(checked);
        press(&mut ctx, 12, 12);
        step(&mut ctx, &mut checked);
        release(&mut ctx, 12, 12);
        step(&mut ctx, &mut checked);
        assert!(!checked);
        drop(step);
        assert_eq!(changes, 2);
    }
}
