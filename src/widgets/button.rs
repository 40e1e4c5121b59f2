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
    /// Draws a push button. Returns [`ResourceState::SUBMIT`] when it is clicked, or when Enter or
    /// Space is pressed while it has focus.
    pub fn button(&mut self, label: &str) -> ResourceState { self.button_ex(label, WidgetOption::ALIGN_CENTER) }

    /// Draws a push button with explicit options.
    pub fn button_ex(&mut self, label: &str, opt: WidgetOption) -> ResourceState {
        let Some((cell, r)) = self.widget_cell() else { return ResourceState::NONE };
        let id = self.widget_id(cell);
        let control = self.control(id, r, opt);

        let mut res = ResourceState::NONE;
        if control.clicked || control.submitted || (control.focused && self.input.key_pressed(Keys::SPACE)) {
            res |= ResourceState::SUBMIT;
        }
        if control.active {
            res |= ResourceState::ACTIVE;
        }

        let style = self.style;
        let align = self.text_align(opt);
        let mut ctx = self.draw_ctx();
        ctx.pen(style.frame_pen, r, control.render_state(), &style.button, 0.0);
        ctx.draw_control_text(label, r, style.text_color, align);
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use crate::*;

    fn frame(ctx: &mut Context, p: PanelId, opt: WidgetOption) -> ResourceState {
        let mut res = ResourceState::NONE;
        ctx.frame(screen(), DT, |ctx| {
            ctx.show_panel(p, |ctx| res = ctx.button_ex("ok", opt));
        });
        res
    }

    #[test]
    fn click_submits_once() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 100), PanelOption::NONE);
        hover(&mut ctx, 20, 12);
        frame(&mut ctx, p, WidgetOption::NONE);
        frame(&mut ctx, p, WidgetOption::NONE);
        press(&mut ctx, 20, 12);
        assert!(frame(&mut ctx, p, WidgetOption::NONE).is_active());
        release(&mut ctx, 20, 12);
        assert!(frame(&mut ctx, p, WidgetOption::NONE).is_submitted());
        assert!(frame(&mut ctx, p, WidgetOption::NONE).is_none());
    }

    #[test]
    fn enter_submits_the_focused_button() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 100), PanelOption::NONE);
        ctx.input_mut().keydown(Keys::TAB);
        frame(&mut ctx, p, WidgetOption::NONE);
        ctx.input_mut().keyup(Keys::TAB);
        assert!(ctx.focus().is_some());
        ctx.input_mut().keydown(Keys::ENTER);
        assert!(frame(&mut ctx, p, WidgetOption::NONE).is_submitted());
    }

    #[test]
    fn disabled_buttons_ignore_the_pointer() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 100), PanelOption::NONE);
        hover(&mut ctx, 20, 12);
        frame(&mut ctx, p, WidgetOption::DISABLED);
        frame(&mut ctx, p, WidgetOption::DISABLED);
        press(&mut ctx, 20, 12);
        frame(&mut ctx, p, WidgetOption::DISABLED);
        release(&mut ctx, 20, 12);
        assert!(frame(&mut ctx, p, WidgetOption::DISABLED).is_none());
        assert_eq!(ctx.hot(), None);
        assert_eq!(ctx.active(), None);
    }
}
