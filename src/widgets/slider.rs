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

/// Fraction of the range a Left/Right key press moves a slider.
const KEY_STEP: Real = 0.05;

impl Context {
    /// Draws a horizontal slider editing `value` within `low..=high`.
    ///
    /// Pressing the thumb keeps the grab point under the pointer; pressing the track centers the
    /// thumb on the pointer. Left and Right step the value while the slider has focus.
    pub fn slider(&mut self, value: &mut Real, low: Real, high: Real) -> ResourceState {
        let Some((cell, r)) = self.widget_cell() else { return ResourceState::NONE };
        let id = self.widget_id(cell);
        let control = self.control(id, r, WidgetOption::NONE);

        let range = high - low;
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        let last = *value;
        let mut v = if range == 0.0 { low } else { last.clamp(lo, hi) };

        let thumb = self.style.thumb_size.min(r.width);
        let travel = (r.width - thumb).max(0);
        let fraction = |v: Real| if range == 0.0 { 0.0 } else { ((v - low) / range).clamp(0.0, 1.0) };
        let thumb_x = |v: Real| r.x + (travel as Real * fraction(v)).round() as i32;

        let pos = self.input.mouse_pos();
        if control.pressed {
            let handle = rect(thumb_x(v), r.y, thumb, r.height);
            let grab = if rect_contains(&handle, pos) { pos.x - handle.x } else { thumb / 2 };
            self.interaction.set_drag_offset(vec2(grab, 0));
        }
        if control.active && travel > 0 && range != 0.0 {
            let x = pos.x - self.interaction.drag_offset().x - r.x;
            let t = (x as Real / travel as Real).clamp(0.0, 1.0);
            v = low + t * range;
        }
        if control.focused && range != 0.0 {
            if self.input.key_repeated(Keys::LEFT) {
                v -= range * KEY_STEP;
            }
            if self.input.key_repeated(Keys::RIGHT) {
                v += range * KEY_STEP;
            }
            v = v.clamp(lo, hi);
        }

        *value = v;
        let mut res = ResourceState::NONE;
        if last != v {
            res |= ResourceState::CHANGE;
        }
        if control.active {
            res |= ResourceState::ACTIVE;
        }

        let style = self.style;
        let text = format!("{:.2}", v);
        let mut ctx = self.draw_ctx();
        ctx.pen(style.slider_pen, r, control.render_state(), &style.slider, fraction(v));
        ctx.draw_control_text(&text, r, style.text_color, TextAlign::Center);
        res
    }
}
