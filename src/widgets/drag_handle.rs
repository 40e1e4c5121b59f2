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
    /// Draws a two-dimensional pad with a handle at `pos`, both coordinates in `0..=1`.
    /// Dragging the handle moves it with the pointer without jumping to the grab point.
    pub fn drag_handle(&mut self, pos: &mut Vec2f) -> ResourceState {
        let Some((cell, r)) = self.widget_cell() else { return ResourceState::NONE };
        let id = self.widget_id(cell);
        let control = self.control(id, r, WidgetOption::NONE);

        let size = self.style.thumb_size.min(r.width).min(r.height);
        let travel = vec2((r.width - size).max(0), (r.height - size).max(0));
        let last = *pos;
        let mut p = vec2f(last.x.clamp(0.0, 1.0), last.y.clamp(0.0, 1.0));
        let handle_at = |p: Vec2f| rect(r.x + (travel.x as f32 * p.x).round() as i32, r.y + (travel.y as f32 * p.y).round() as i32, size, size);

        let mouse = self.input.mouse_pos();
        if control.pressed {
            let handle = handle_at(p);
            let grab = if rect_contains(&handle, mouse) { mouse - vec2(handle.x, handle.y) } else { vec2(size / 2, size / 2) };
            self.interaction.set_drag_offset(grab);
        }
        if control.active {
            let at = mouse - self.interaction.drag_offset() - vec2(r.x, r.y);
            if travel.x > 0 {
                p.x = (at.x as f32 / travel.x as f32).clamp(0.0, 1.0);
            }
            if travel.y > 0 {
                p.y = (at.y as f32 / travel.y as f32).clamp(0.0, 1.0);
            }
        }

        *pos = p;
        let mut res = ResourceState::NONE;
        if last.x != p.x || last.y != p.y {
            res |= ResourceState::CHANGE;
        }
        if control.active {
            res |= ResourceState::ACTIVE;
        }

        let style = self.style;
        let state = control.render_state();
        let handle = handle_at(p);
        let mut ctx = self.draw_ctx();
        ctx.draw_frame(r, style.slider.inactive);
        ctx.pen(style.frame_pen, handle, state, &style.slider, 0.0);
        res
    }
}
