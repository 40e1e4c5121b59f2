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
use super::text_edit::{apply_text_input, clamp_cursor};
use crate::context::Context;
use crate::font::hit_test;
use crate::*;

impl Context {
    /// Draws a single-line text box editing `buf`.
    ///
    /// Clicking focuses the box and places the cursor. While focused it takes the typed text and
    /// Backspace/Delete/Left/Right/Home/End. Enter returns [`ResourceState::SUBMIT`] and drops the
    /// focus, Escape drops it without submitting.
    pub fn text_input(&mut self, buf: &mut String) -> ResourceState { self.text_input_ex(buf, WidgetOption::NONE) }

    /// Draws a text box with explicit options.
    pub fn text_input_ex(&mut self, buf: &mut String, opt: WidgetOption) -> ResourceState {
        let Some((cell, r)) = self.widget_cell() else { return ResourceState::NONE };
        let id = self.widget_id(cell);
        let control = self.control(id, r, opt);
        let padding = self.style.padding;
        let size = self.style.font_size;

        let mut res = ResourceState::NONE;
        if control.gained_focus {
            self.text_cursor = buf.len();
        }
        if control.pressed {
            let x = (self.input.mouse_pos().x - r.x - padding) as f32;
            self.text_cursor = hit_test(self.font.as_deref(), buf, size, x);
        }
        if control.focused {
            let outcome = apply_text_input(buf, self.text_cursor, &self.input);
            self.text_cursor = outcome.cursor;
            if outcome.changed {
                res |= ResourceState::CHANGE;
            }
            if control.submitted {
                res |= ResourceState::SUBMIT;
                self.interaction.set_focus(None);
            }
        }
        if control.active {
            res |= ResourceState::ACTIVE;
        }

        let style = self.style;
        let focused = self.interaction.focus() == Some(id);
        let cursor = clamp_cursor(buf, self.text_cursor);
        let mut ctx = self.draw_ctx();
        ctx.pen(style.frame_pen, r, control.render_state(), &style.text_input, 0.0);
        if focused {
            let caret = ctx.text_width(&buf[..cursor]);
            let room = (r.width - padding * 2).max(0);
            let shift = (caret - room).max(0);
            let line_height = ctx.line_height().min(r.height);
            let y = r.y + (r.height - line_height) / 2;
            if ctx.list().push_mask(r).is_ok() {
                ctx.draw_text(buf, vec2(r.x + padding - shift, y), r.x + r.width, style.text_color);
                ctx.draw_rect(rect(r.x + padding - shift + caret, y, 1, line_height), style.text_color);
                let _ = ctx.list().pop_mask();
            }
        } else {
            ctx.draw_control_text(buf, r, style.text_color, TextAlign::Left);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use crate::*;

    struct Form {
        panel: PanelId,
        fields: [String; 3],
        ids: Vec<WidgetId>,
        results: Vec<ResourceState>,
    }

    impl Form {
        fn new(ctx: &mut Context) -> Self {
            let panel = ctx.add_panel("form", rect(0, 0, 300, 200), PanelOption::NONE);
            Self { panel, fields: Default::default(), ids: Vec::new(), results: Vec::new() }
        }

        fn frame(&mut self, ctx: &mut Context) {
            self.ids.clear();
            self.results.clear();
            let Form { panel, fields, ids, results } = self;
            ctx.frame(screen(), DT, |ctx| {
                ctx.show_panel(*panel, |ctx| {
                    for field in fields.iter_mut() {
                        results.push(ctx.text_input(field));
                        ids.extend(ctx.last_id());
                    }
                });
            });
        }
    }

    fn tap(ctx: &mut Context, form: &mut Form, key: Keys) {
        ctx.input_mut().keydown(key);
        form.frame(ctx);
        ctx.input_mut().keyup(key);
    }

    #[test]
    fn tab_walks_the_fields_and_shift_tab_wraps() {
        let mut ctx = context();
        let mut form = Form::new(&mut ctx);
        form.frame(&mut ctx);
        let [a, b, c] = [form.ids[0], form.ids[1], form.ids[2]];
        assert_eq!(ctx.focus(), None);

        tap(&mut ctx, &mut form, Keys::TAB);
        assert_eq!(ctx.focus(), Some(a));
        tap(&mut ctx, &mut form, Keys::TAB);
        assert_eq!(ctx.focus(), Some(b));
        tap(&mut ctx, &mut form, Keys::TAB);
        assert_eq!(ctx.focus(), Some(c));

        ctx.input_mut().keydown(Keys::SHIFT);
        tap(&mut ctx, &mut form, Keys::TAB);
        assert_eq!(ctx.focus(), Some(b));
        tap(&mut ctx, &mut form, Keys::TAB);
        assert_eq!(ctx.focus(), Some(a));
        tap(&mut ctx, &mut form, Keys::TAB);
        assert_eq!(ctx.focus(), Some(c));
    }

    #[test]
    fn typing_edits_the_focused_field_and_enter_submits() {
        let mut ctx = context();
        let mut form = Form::new(&mut ctx);
        tap(&mut ctx, &mut form, Keys::TAB);
        ctx.input_mut().text("héllo");
        form.frame(&mut ctx);
        assert!(form.results[0].is_changed());
        assert_eq!(form.fields[0], "héllo");
        assert!(form.fields[1].is_empty());

        tap(&mut ctx, &mut form, Keys::BACKSPACE);
        tap(&mut ctx, &mut form, Keys::HOME);
        tap(&mut ctx, &mut form, Keys::DELETE);
        assert_eq!(form.fields[0], "éll");

        tap(&mut ctx, &mut form, Keys::ENTER);
        assert!(form.results[0].is_submitted());
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn escape_drops_focus_without_submitting() {
        let mut ctx = context();
        let mut form = Form::new(&mut ctx);
        tap(&mut ctx, &mut form, Keys::TAB);
        tap(&mut ctx, &mut form, Keys::ESCAPE);
        assert_eq!(ctx.focus(), None);
        assert!(form.results.iter().all(|r| r.is_none()));
    }

    #[test]
    fn clicking_places_the_cursor() {
        let mut ctx = context();
        let mut form = Form::new(&mut ctx);
        form.fields[1] = "abcd".to_string();
        // second field spans y 32..48, its text starts at x 8 + 4
        hover(&mut ctx, 12 + 8 * 2 + 1, 40);
        form.frame(&mut ctx);
        form.frame(&mut ctx);
        press(&mut ctx, 12 + 8 * 2 + 1, 40);
        form.frame(&mut ctx);
        release(&mut ctx, 12 + 8 * 2 + 1, 40);
        form.frame(&mut ctx);
        assert_eq!(ctx.focus(), Some(form.ids[1]));
        ctx.input_mut().text("X");
        form.frame(&mut ctx);
        assert_eq!(form.fields[1], "abXcd");
    }
}
