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
//! Widgets. Every widget consumes one layout cell, runs the interaction state machine and then draws.

mod button;
mod checkbox;
mod drag_handle;
mod dropdown;
mod label;
mod slider;
mod text_edit;
mod text_input;

pub(crate) use dropdown::{DropdownBuild, OpenDropdown};

use crate::context::Context;
use crate::*;

impl Context {
    /// Takes the next layout cell. Returns the cell and the widget rectangle inset by the padding.
    pub(crate) fn widget_cell(&mut self) -> Option<(Recti, Recti)> {
        let cell = self.layout.next_cell().ok()?;
        let padding = self.style.padding;
        let inner = expand_rect(cell, -padding);
        Some((cell, rect(inner.x, inner.y, inner.width.max(0), inner.height.max(0))))
    }

    /// Key of a widget placed in `cell`, taken from its position in the scrolled content.
    pub(crate) fn widget_id(&self, cell: Recti) -> WidgetId {
        let origin = self.layout.origin();
        WidgetId::new(self.current_scope(), cell.x - origin.x, cell.y - origin.y)
    }

    pub(crate) fn text_align(&self, opt: WidgetOption) -> TextAlign {
        if opt.is_aligned_center() {
            TextAlign::Center
        } else if opt.is_aligned_right() {
            TextAlign::Right
        } else {
            self.style.text_align
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use crate::*;

    #[test]
    fn ids_follow_the_content_not_the_scroll() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 60), PanelOption::SCROLLBARS);
        let mut ids = Vec::new();
        for scroll in [0, 30] {
            if let Some(panel) = ctx.panel_mut(p) {
                panel.set_scroll(vec2(0, scroll));
            }
            ctx.frame(screen(), DT, |ctx| {
                ctx.show_panel(p, |ctx| {
                    for _ in 0..5 {
                        ctx.label("row");
                    }
                    ctx.button("last");
                    ids.push(ctx.last_id());
                });
            });
        }
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[0].map(|id| id.scope()), Some(Scope::panel(p.index())));
    }
}
