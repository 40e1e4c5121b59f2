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
use tracing::debug;

/// The dropdown whose list is showing. At most one exists per context.
#[derive(Clone, Debug)]
pub(crate) struct OpenDropdown {
    pub id: WidgetId,
    pub overlay: Recti,
    pub seen: bool,
}

/// State carried from [`Context::begin_dropdown`] through the items to [`Context::end_dropdown`].
#[derive(Clone, Debug)]
pub(crate) struct DropdownBuild {
    id: WidgetId,
    header: Recti,
    overlay: Recti,
    item_height: i32,
    count: usize,
    index: usize,
    open: bool,
    overlay_begun: bool,
    selected: usize,
    chosen: Option<usize>,
    label: String,
}

impl Context {
    /// Starts a dropdown whose `count` items are declared next with [`Context::dropdown_item`].
    ///
    /// Returns `true` while the item list is showing. Items must be declared either way so the
    /// header can show the label of item `selected`.
    pub fn begin_dropdown(&mut self, selected: usize, count: usize) -> bool {
        if self.building.take().is_some() {
            UiError::NoDropdown.logged();
            self.draw.end_overlay();
        }
        let Some((cell, r)) = self.widget_cell() else { return false };
        let id = self.widget_id(cell);
        let control = self.control(id, r, WidgetOption::NONE);
        let item_height = cell.height;
        let overlay = rect(r.x, cell.y + cell.height, r.width, item_height * count as i32);

        let mut open = self.dropdown.as_ref().is_some_and(|d| d.id == id);
        if control.clicked || control.submitted {
            open = !open;
        } else if open {
            let pos = self.input.mouse_pos();
            let outside = self.input.mouse_pressed().is_left() && !rect_contains(&r, pos) && !rect_contains(&overlay, pos);
            if outside || control.cancelled || self.input.key_pressed(Keys::ESCAPE) {
                open = false;
            }
        }

        let mut selected = selected.min(count.saturating_sub(1));
        if control.focused && count > 0 {
            if self.input.key_repeated(Keys::UP) {
                selected = selected.saturating_sub(1);
            }
            if self.input.key_repeated(Keys::DOWN) {
                selected = (selected + 1).min(count - 1);
            }
        }

        let was_open = self.dropdown.as_ref().map(|d| d.id);
        if open {
            if was_open.is_some_and(|other| other != id) {
                debug!("dropdown {:?} replaces {:?}", id, was_open);
                self.draw.discard_overlays();
            } else if was_open.is_none() {
                debug!("dropdown {:?} opened", id);
            }
            self.dropdown = Some(OpenDropdown { id, overlay, seen: true });
        } else if was_open == Some(id) {
            debug!("dropdown {:?} closed", id);
            self.dropdown = None;
        }

        let style = self.style;
        let mut ctx = self.draw_ctx();
        ctx.pen(style.frame_pen, r, control.render_state(), &style.dropdown, 0.0);
        let side = (r.height / 3).max(2) as f32;
        let cx = (r.x + r.width - style.padding) as f32 - side;
        let cy = (r.y + r.height / 2) as f32;
        let arrow = if open {
            [vec2f(cx - side, cy + side / 2.0), vec2f(cx + side, cy + side / 2.0), vec2f(cx, cy - side / 2.0)]
        } else {
            [vec2f(cx - side, cy - side / 2.0), vec2f(cx, cy + side / 2.0), vec2f(cx + side, cy - side / 2.0)]
        };
        let _ = ctx.list().fill_polygon(&arrow, style.text_color);

        self.building = Some(DropdownBuild {
            id,
            header: r,
            overlay,
            item_height,
            count,
            index: 0,
            open,
            overlay_begun: false,
            selected,
            chosen: None,
            label: String::new(),
        });
        open
    }

    /// Declares the next item of the dropdown being built. Returns `true` when it was picked this frame.
    pub fn dropdown_item(&mut self, label: &str) -> bool {
        let Some(mut build) = self.building.take() else {
            UiError::NoDropdown.logged();
            return false;
        };
        let index = build.index;
        build.index += 1;
        if index >= build.count {
            tracing::warn!("dropdown item {} past the declared count {}", index, build.count);
        }

        let mut picked = false;
        if build.open {
            if !build.overlay_begun {
                build.overlay_begun = true;
                if self.draw.begin_overlay(build.overlay).is_ok() {
                    let colors = self.style.panel_color;
                    let border = self.style.border_color;
                    let _ = self.draw.fill_rect(build.overlay, colors);
                    let _ = self.draw.stroke_rect(build.overlay, border);
                }
            }
            let r = rect(build.overlay.x, build.overlay.y + build.item_height * index as i32, build.overlay.width, build.item_height);
            let id = WidgetId::new(Scope::OVERLAY, 0, index as i32);
            let control = self.control(id, r, WidgetOption::NO_FOCUS);
            if control.clicked {
                picked = true;
                build.chosen = Some(index);
                build.open = false;
                debug!("dropdown {:?} picked item {}", build.id, index);
                self.dropdown = None;
            }

            let style = self.style;
            let mut ctx = self.draw_ctx();
            if control.hovered || control.active || index == build.selected {
                let state = if control.active { RenderState::Active } else { RenderState::Hot };
                ctx.draw_rect(r, style.dropdown.pick(state));
            }
            let padding = style.padding;
            let text = rect(r.x + padding, r.y, (r.width - padding * 2).max(0), r.height);
            ctx.draw_control_text(label, text, style.text_color, TextAlign::Left);
        }
        if (index == build.selected && build.chosen.is_none()) || picked {
            build.label.clear();
            build.label.push_str(label);
        }
        self.building = Some(build);
        picked
    }

    /// Finishes the dropdown. Writes the picked or keyboard-selected item to `selected`.
    ///
    /// Returns [`ResourceState::CHANGE`] when `selected` changed and [`ResourceState::ACTIVE`]
    /// while the list is showing.
    pub fn end_dropdown(&mut self, selected: &mut usize) -> ResourceState {
        let Some(build) = self.building.take() else {
            UiError::NoDropdown.logged();
            return ResourceState::NONE;
        };
        if build.overlay_begun {
            self.draw.end_overlay();
        }
        if build.index != build.count {
            tracing::warn!("dropdown declared {} items but {} were expected", build.index, build.count);
        }

        let mut res = ResourceState::NONE;
        let choice = build.chosen.unwrap_or(build.selected);
        if choice != *selected && choice < build.count {
            *selected = choice;
            res |= ResourceState::CHANGE;
        }
        if self.dropdown.as_ref().is_some_and(|d| d.id == build.id) {
            res |= ResourceState::ACTIVE;
        }

        let style = self.style;
        let r = build.header;
        let text = rect(r.x, r.y, (r.width - r.height).max(0), r.height);
        self.draw_ctx().draw_control_text(&build.label, text, style.text_color, TextAlign::Left);
        res
    }

    /// Draws a dropdown over `items`. Returns [`ResourceState::CHANGE`] when `selected` changed.
    pub fn dropdown(&mut self, selected: &mut usize, items: &[&str]) -> ResourceState {
        self.begin_dropdown(*selected, items.len());
        for item in items {
            self.dropdown_item(item);
        }
        self.end_dropdown(selected)
    }

    /// Returns `true` while any dropdown shows its list.
    pub fn is_dropdown_open(&self) -> bool { self.dropdown.is_some() }

    /// Returns the id of the dropdown showing its list.
    pub fn open_dropdown(&self) -> Option<WidgetId> { self.dropdown.as_ref().map(|d| d.id) }
}
