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
//! Panels: records, chrome, tab groups and z-order.

use crate::context::Context;
use crate::scrollbar::{ScrollAxis, fit_scrollbars, scrollbar};
use crate::*;
use tracing::debug;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Chrome a panel draws around its body.
    pub struct PanelOption : u32 {
        /// Title bar with the panel title or its tab group.
        const TITLE = 32;
        /// The title bar moves a floating panel.
        const DRAGGABLE = 16;
        /// Bottom-right grip resizes a floating panel.
        const RESIZABLE = 8;
        /// Close button in the title bar.
        const CLOSABLE = 4;
        /// Collapse button in the title bar.
        const COLLAPSIBLE = 2;
        /// Scrollbars appear when the content overflows the body.
        const SCROLLBARS = 1;
        /// No chrome.
        const NONE = 0;
    }
}

impl PanelOption {
    /// Title bar, dragging, resizing, closing, collapsing and scrollbars.
    pub fn all_chrome() -> Self { Self::TITLE | Self::DRAGGABLE | Self::RESIZABLE | Self::CLOSABLE | Self::COLLAPSIBLE | Self::SCROLLBARS }
    /// Returns `true` if the panel has a title bar.
    pub fn has_title(&self) -> bool { self.intersects(Self::TITLE) }
    /// Returns `true` if the title bar moves the panel.
    pub fn is_draggable(&self) -> bool { self.intersects(Self::DRAGGABLE) }
    /// Returns `true` if the panel has a resize grip.
    pub fn is_resizable(&self) -> bool { self.intersects(Self::RESIZABLE) }
    /// Returns `true` if the panel has a close button.
    pub fn is_closable(&self) -> bool { self.intersects(Self::CLOSABLE) }
    /// Returns `true` if the panel has a collapse button.
    pub fn is_collapsible(&self) -> bool { self.intersects(Self::COLLAPSIBLE) }
    /// Returns `true` if the panel scrolls its content.
    pub fn has_scrollbars(&self) -> bool { self.intersects(Self::SCROLLBARS) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle of a panel owned by a [`Context`].
pub struct PanelId(usize);

impl PanelId {
    pub(crate) fn from_index(index: usize) -> Self { Self(index) }

    /// Returns the slot index of the panel.
    pub fn index(self) -> usize { self.0 }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Visibility of a panel.
pub enum PanelState {
    /// Not drawn.
    Closed,
    /// Title bar and body drawn.
    Open,
    /// Only the title bar is drawn.
    Collapsed,
}

/// Priority offset of docked panels, which always sit behind floating ones.
const DOCKED_PRIORITY: i32 = 1 << 20;

#[derive(Clone, Debug)]
/// A panel record. Panels are created with [`Context::add_panel`] and live until [`Context::remove_panel`].
pub struct Panel {
    title: String,
    rect: Recti,
    options: PanelOption,
    state: PanelState,
    tabbed_out: bool,
    tabs: Vec<PanelId>,
    docked: bool,
    saved_split: Option<(SplitId, SplitSize)>,
    scroll: Vec2i,
    content: Vec2i,
    body: Recti,
}

impl Panel {
    pub(crate) fn new(title: &str, rect: Recti, options: PanelOption) -> Self {
        Self {
            title: title.to_string(),
            rect,
            options,
            state: PanelState::Open,
            tabbed_out: false,
            tabs: Vec::new(),
            docked: false,
            saved_split: None,
            scroll: Vec2i::default(),
            content: Vec2i::default(),
            body: Recti::default(),
        }
    }

    /// Returns the title.
    pub fn title(&self) -> &str { &self.title }
    /// Returns the outer rectangle.
    pub fn rect(&self) -> Recti { self.rect }
    /// Moves or resizes a floating panel. Docked panels get their rectangle from the split tree.
    pub fn set_rect(&mut self, rect: Recti) { self.rect = rect; }
    /// Returns the chrome options.
    pub fn options(&self) -> PanelOption { self.options }
    /// Returns the visibility state.
    pub fn state(&self) -> PanelState { self.state }
    /// Returns `true` if another tab of the group is selected.
    pub fn is_tabbed_out(&self) -> bool { self.tabbed_out }
    /// Returns the tab group this panel belongs to, empty when it has none.
    pub fn tabs(&self) -> &[PanelId] { &self.tabs }
    /// Returns `true` if a split leaf hosts the panel.
    pub fn is_docked(&self) -> bool { self.docked }
    /// Returns the scroll offset of the body.
    pub fn scroll(&self) -> Vec2i { self.scroll }
    /// Overrides the scroll offset. It is clamped the next time the panel is drawn.
    pub fn set_scroll(&mut self, scroll: Vec2i) { self.scroll = scroll; }
    /// Returns the size the content needed the last time the panel was drawn.
    pub fn content_size(&self) -> Vec2i { self.content }
    /// Returns the visible body rectangle of the last frame.
    pub fn body(&self) -> Recti { self.body }
}

#[derive(Default)]
struct ChromeActions {
    close: bool,
    collapse: bool,
    select: Option<PanelId>,
}

const DRAG_ZONE: i32 = 0;
const CLOSE_BUTTON: i32 = 1;
const RESIZE_GRIP: i32 = 2;
const SCROLL_Y: i32 = 3;
const SCROLL_X: i32 = 4;
const COLLAPSE_BUTTON: i32 = 5;
const FIRST_TAB: i32 = 16;

impl Context {
    fn slot(&self, id: PanelId) -> UiResult<&Panel> { self.panels.get(id.0).and_then(|p| p.as_ref()).ok_or(UiError::UnknownPanel(id.0)) }

    fn slot_mut(&mut self, id: PanelId) -> UiResult<&mut Panel> { self.panels.get_mut(id.0).and_then(|p| p.as_mut()).ok_or(UiError::UnknownPanel(id.0)) }

    /// Creates a panel and puts it in front of the others.
    pub fn add_panel(&mut self, title: &str, rect: Recti, options: PanelOption) -> PanelId {
        let panel = Panel::new(title, rect, options);
        let id = match self.panels.iter().position(|p| p.is_none()) {
            Some(i) => {
                self.panels[i] = Some(panel);
                PanelId(i)
            }
            None => {
                self.panels.push(Some(panel));
                PanelId(self.panels.len() - 1)
            }
        };
        self.order.insert(0, id);
        id
    }

    /// Destroys a panel, detaching it from its tab group.
    pub fn remove_panel(&mut self, id: PanelId) -> UiResult<()> {
        let panel = self.slot(id).map_err(|e| e.logged())?;
        if panel.docked {
            tracing::warn!("removing panel #{} while a split leaf still hosts it", id.0);
        }
        let tabs = panel.tabs.clone();
        let was_selected = !panel.tabbed_out;
        self.panels[id.0] = None;
        self.order.retain(|p| *p != id);
        let rest: Vec<PanelId> = tabs.into_iter().filter(|p| *p != id).collect();
        for &mate in &rest {
            if let Ok(p) = self.slot_mut(mate) {
                p.tabs = if rest.len() > 1 { rest.clone() } else { Vec::new() };
            }
        }
        if was_selected {
            if let Some(&first) = rest.first() {
                self.select_tab(first)?;
            }
        }
        if self.hover_panel == Some(id) {
            self.hover_panel = None;
        }
        Ok(())
    }

    /// Returns a panel.
    pub fn panel(&self, id: PanelId) -> Option<&Panel> { self.slot(id).ok() }

    /// Returns a panel for modification.
    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> { self.slot_mut(id).ok() }

    /// Returns the panels from front to back.
    pub fn panel_order(&self) -> &[PanelId] { &self.order }

    /// Groups panels as tabs sharing one rectangle. The first panel is selected.
    pub fn link_tabs(&mut self, group: &[PanelId]) -> UiResult<()> {
        for &id in group {
            self.slot(id).map_err(|e| e.logged())?;
        }
        let Some(&first) = group.first() else { return Ok(()) };
        let rect = self.slot(first)?.rect;
        for &id in group {
            let p = self.slot_mut(id)?;
            p.tabs = if group.len() > 1 { group.to_vec() } else { Vec::new() };
            p.tabbed_out = id != first;
            p.rect = rect;
        }
        Ok(())
    }

    /// Makes `id` the visible tab of its group and brings the group to the front.
    pub fn select_tab(&mut self, id: PanelId) -> UiResult<()> {
        let tabs = self.slot(id).map_err(|e| e.logged())?.tabs.clone();
        let rect = tabs.iter().filter_map(|&t| self.slot(t).ok()).find(|p| !p.tabbed_out).map(|p| p.rect);
        for &mate in &tabs {
            if let Ok(p) = self.slot_mut(mate) {
                p.tabbed_out = mate != id;
            }
        }
        let p = self.slot_mut(id)?;
        p.tabbed_out = false;
        if let Some(rect) = rect {
            p.rect = rect;
        }
        self.raise(id);
        Ok(())
    }

    /// Opens a closed panel and brings it to the front.
    pub fn open_panel(&mut self, id: PanelId) -> UiResult<()> {
        let p = self.slot_mut(id).map_err(|e| e.logged())?;
        if p.state == PanelState::Closed {
            p.state = PanelState::Open;
        }
        self.raise(id);
        Ok(())
    }

    /// Closes a panel.
    pub fn close_panel(&mut self, id: PanelId) -> UiResult<()> {
        self.slot_mut(id).map_err(|e| e.logged())?.state = PanelState::Closed;
        debug!("panel #{} closed", id.0);
        Ok(())
    }

    /// Switches a panel between open and collapsed. A docked panel gives its split size up to its
    /// title bar while collapsed and gets it back when expanded.
    pub fn toggle_collapse(&mut self, id: PanelId) -> UiResult<()> {
        let title_height = self.style.title_height;
        let p = self.slot(id).map_err(|e| e.logged())?;
        let (state, saved) = (p.state, p.saved_split);
        match state {
            PanelState::Closed => Ok(()),
            PanelState::Open => {
                let mut saved = None;
                if let Some(leaf) = self.host_leaf(id) {
                    if let Some(parent) = self.splits.parent(leaf) {
                        let first = matches!(self.splits.node(parent), Some(SplitNode::Branch { children, .. }) if children[0] == leaf);
                        if let Some(size) = self.splits.size(parent) {
                            saved = Some((parent, size));
                            let collapsed = if first { SplitSize::First(title_height) } else { SplitSize::Second(title_height) };
                            self.splits.set_size(parent, collapsed)?;
                        }
                    }
                }
                let p = self.slot_mut(id)?;
                p.state = PanelState::Collapsed;
                p.saved_split = saved;
                Ok(())
            }
            PanelState::Collapsed => {
                if let Some((parent, size)) = saved {
                    self.splits.set_size(parent, size)?;
                }
                let p = self.slot_mut(id)?;
                p.state = PanelState::Open;
                p.saved_split = None;
                Ok(())
            }
        }
    }

    /// Leaf hosting the panel or one of its tabs.
    fn host_leaf(&self, id: PanelId) -> Option<SplitId> {
        let tabs = self.slot(id).ok().map(|p| p.tabs.as_slice()).unwrap_or(&[]);
        self.splits.leaf_of(id).or_else(|| tabs.iter().find_map(|&t| self.splits.leaf_of(t)))
    }

    /// Moves a panel and its tab group to the front, the panel itself first.
    pub(crate) fn raise(&mut self, id: PanelId) {
        let mut group = vec![id];
        match self.slot(id) {
            Ok(p) => group.extend(p.tabs.iter().copied().filter(|t| *t != id)),
            Err(_) => return,
        }
        if self.order.starts_with(&group) {
            return;
        }
        self.order.retain(|p| !group.contains(p));
        for (i, &p) in group.iter().enumerate() {
            self.order.insert(i, p);
        }
        debug!("panel #{} raised", id.0);
    }

    /// Draw priority of a panel. Lower values are drawn on top.
    fn priority_of(&self, id: PanelId, panel: &Panel) -> i32 {
        let index = self.order.iter().position(|p| *p == id).unwrap_or(self.order.len()) as i32;
        if panel.docked { DOCKED_PRIORITY + index } else { index }
    }

    /// Copies the split leaf rectangles onto the panels they host.
    pub(crate) fn dock_panels(&mut self) {
        for p in self.panels.iter_mut().flatten() {
            p.docked = false;
        }
        let mut hosted = Vec::new();
        self.splits.for_each_leaf(|panel, r| hosted.push((panel, r)));
        for (panel, r) in hosted {
            let tabs = match self.slot(panel) {
                Ok(p) if !p.tabs.is_empty() => p.tabs.clone(),
                Ok(_) => vec![panel],
                Err(_) => {
                    tracing::warn!("split leaf hosts unknown panel #{}", panel.0);
                    continue;
                }
            };
            for t in tabs {
                if let Ok(p) = self.slot_mut(t) {
                    p.rect = r;
                    p.docked = true;
                }
            }
        }
    }

    /// Starts drawing a panel. Returns `false` when the panel is closed, tabbed out or collapsed,
    /// in which case [`Context::end_panel`] must not be called.
    pub fn begin_panel(&mut self, id: PanelId) -> bool {
        if let Some(open) = self.current_panel {
            UiError::PanelNesting(open.0).logged();
            return false;
        }
        let mut panel = match self.panels.get_mut(id.0).and_then(|p| p.take()) {
            Some(panel) => panel,
            None => {
                UiError::UnknownPanel(id.0).logged();
                return false;
            }
        };
        let visible = panel.state != PanelState::Closed && !panel.tabbed_out;
        let mut body = None;
        let mut actions = ChromeActions::default();
        if visible {
            let priority = self.priority_of(id, &panel);
            let mut hover_rect = panel.rect;
            if panel.state == PanelState::Collapsed {
                hover_rect.height = if panel.options.has_title() { self.style.title_height.min(panel.rect.height) } else { 0 };
            }
            if rect_contains(&hover_rect, self.input.mouse_pos()) && self.next_hover.is_none_or(|(_, p)| priority < p) {
                self.next_hover = Some((id, priority));
            }
            if self.draw.push_layer(panel.rect, priority).is_ok() {
                self.current_panel = Some(id);
                self.chrome = true;
                body = self.panel_chrome(id, &mut panel, &mut actions);
                self.chrome = false;
                if body.is_none() {
                    let _ = self.draw.pop_mask();
                    self.current_panel = None;
                }
            } else {
                let _ = self.draw.pop_mask();
            }
        }
        self.panels[id.0] = Some(panel);
        self.apply_chrome_actions(id, actions);

        let Some(view) = body else { return false };
        if self.draw.push_mask(view).is_err() {
            let _ = self.draw.pop_mask();
            self.current_panel = None;
            return false;
        }
        let scroll = self.panel(id).map(|p| p.scroll).unwrap_or_default();
        let padding = self.style.padding;
        self.layout.begin(expand_rect(view, -padding), scroll, self.style.row_height);
        true
    }

    /// Finishes the panel begun by [`Context::begin_panel`] and records its content size.
    pub fn end_panel(&mut self) -> UiResult<()> {
        let Some(id) = self.current_panel.take() else {
            return Err(UiError::NoPanel.logged());
        };
        let content = self.layout.finish();
        if let Ok(p) = self.slot_mut(id) {
            p.content = content;
        }
        // body mask, then the layer
        self.draw.pop_mask()?;
        self.draw.pop_mask()
    }

    /// Draws a panel around `f`. Returns `false` if the body was not drawn.
    pub fn show_panel<F: FnOnce(&mut Self)>(&mut self, id: PanelId, f: F) -> bool {
        if !self.begin_panel(id) {
            return false;
        }
        f(self);
        let _ = self.end_panel();
        true
    }

    fn apply_chrome_actions(&mut self, id: PanelId, actions: ChromeActions) {
        if actions.close {
            let _ = self.close_panel(id);
        }
        if actions.collapse {
            let _ = self.toggle_collapse(id);
        }
        if let Some(tab) = actions.select {
            let _ = self.select_tab(tab);
        }
    }

    fn chrome_control(&mut self, slot: i32, r: Recti) -> ControlState {
        let id = WidgetId::new(self.current_scope(), slot, 0);
        self.control(id, r, WidgetOption::NO_FOCUS)
    }

    /// Draws background, title bar, grip and scrollbars. Returns the body view, or `None` when collapsed.
    fn panel_chrome(&mut self, id: PanelId, panel: &mut Panel, actions: &mut ChromeActions) -> Option<Recti> {
        let style = self.style;
        let title_h = if panel.options.has_title() { style.title_height } else { 0 };
        let collapsed = panel.state == PanelState::Collapsed;
        let r = panel.rect;
        if !collapsed {
            self.draw_ctx().draw_frame(r, style.panel_color);
        }

        if panel.options.has_title() {
            let bar = rect(r.x, r.y, r.width, title_h);
            self.draw_ctx().draw_rect(bar, style.title_color);
            let mut right = bar.x + bar.width;
            if panel.options.is_closable() {
                right -= title_h;
                let button = rect(right, bar.y, title_h, title_h);
                let control = self.chrome_control(CLOSE_BUTTON, button);
                actions.close = control.clicked;
                let inner = expand_rect(button, -title_h / 4);
                let (a, b) = (vec2f(inner.x as f32, inner.y as f32), vec2f((inner.x + inner.width) as f32, (inner.y + inner.height) as f32));
                let c = style.button.pick(control.render_state());
                let _ = self.draw.line(a, b, c);
                let _ = self.draw.line(vec2f(a.x, b.y), vec2f(b.x, a.y), c);
            }
            if panel.options.is_collapsible() {
                right -= title_h;
                let button = rect(right, bar.y, title_h, title_h);
                let control = self.chrome_control(COLLAPSE_BUTTON, button);
                actions.collapse = control.clicked;
                let inner = expand_rect(button, -title_h / 4);
                let (x0, y0, x1, y1) = (inner.x as f32, inner.y as f32, (inner.x + inner.width) as f32, (inner.y + inner.height) as f32);
                let arrow = if collapsed { [vec2f(x0, y0), vec2f(x1, (y0 + y1) / 2.0), vec2f(x0, y1)] } else { [vec2f(x0, y0), vec2f(x1, y0), vec2f((x0 + x1) / 2.0, y1)] };
                let _ = self.draw.fill_polygon(&arrow, style.button.pick(control.render_state()));
            }

            let mut left = bar.x;
            if panel.tabs.len() > 1 {
                for (k, &tab) in panel.tabs.iter().enumerate() {
                    let selected = tab == id;
                    let title = if selected { panel.title.clone() } else { self.slot(tab).map(|p| p.title.clone()).unwrap_or_default() };
                    let width = (self.draw_ctx().text_width(&title) + style.padding * 2).min((right - left).max(0));
                    let tab_rect = rect(left, bar.y, width, title_h);
                    left += width;
                    let control = self.chrome_control(FIRST_TAB + k as i32, tab_rect);
                    if control.clicked && !selected {
                        actions.select = Some(tab);
                    }
                    let state = if selected { RenderState::Active } else { control.render_state() };
                    let mut ctx = self.draw_ctx();
                    ctx.pen(style.frame_pen, tab_rect, state, &style.tab, 0.0);
                    ctx.draw_control_text(&title, tab_rect, style.title_text_color, TextAlign::Left);
                }
            } else {
                self.draw_ctx().draw_control_text(&panel.title, rect(left, bar.y, (right - left).max(0), title_h), style.title_text_color, TextAlign::Left);
            }

            if panel.options.is_draggable() && !panel.docked {
                let zone = rect(left, bar.y, (right - left).max(0), title_h);
                let control = self.chrome_control(DRAG_ZONE, zone);
                if control.active {
                    let delta = self.input.mouse_delta();
                    panel.rect.x += delta.x;
                    panel.rect.y += delta.y;
                }
            }
        }

        if collapsed {
            return None;
        }

        let mut body = rect(r.x, r.y + title_h, r.width, (r.height - title_h).max(0));
        if panel.options.is_resizable() && !panel.docked {
            let g = style.grip_size;
            let grip = rect(r.x + r.width - g, r.y + r.height - g, g, g);
            let control = self.chrome_control(RESIZE_GRIP, grip);
            if control.active {
                let delta = self.input.mouse_delta();
                panel.rect.width = (panel.rect.width + delta.x).max(title_h * 2 + g);
                panel.rect.height = (panel.rect.height + delta.y).max(title_h + g);
            }
            let (x0, y0, x1, y1) = (grip.x as f32, grip.y as f32, (grip.x + grip.width) as f32, (grip.y + grip.height) as f32);
            let _ = self.draw.fill_polygon(&[vec2f(x1, y0), vec2f(x1, y1), vec2f(x0, y1)], style.button.pick(control.render_state()));
        }

        if panel.options.has_scrollbars() {
            body = self.panel_scrollbars(id, panel, body);
        } else {
            panel.scroll = Vec2i::default();
        }
        panel.body = body;
        Some(body)
    }

    fn panel_scrollbars(&mut self, id: PanelId, panel: &mut Panel, body: Recti) -> Recti {
        let style = self.style;
        let content = vec2(panel.content.x + style.padding * 2, panel.content.y + style.padding * 2);
        let (view, vertical, horizontal) = fit_scrollbars(body, content, style.scrollbar_size);

        let wheel = self.input.scroll_delta();
        if self.hover_panel == Some(id) && !self.overlay_hovered && (wheel.x != 0 || wheel.y != 0) {
            if self.input.key_down(Keys::SHIFT) {
                panel.scroll.x += if wheel.x != 0 { wheel.x } else { wheel.y };
            } else {
                panel.scroll.x += wheel.x;
                panel.scroll.y += wheel.y;
            }
        }
        panel.scroll.x = panel.scroll.x.clamp(0, (content.x - view.width).max(0));
        panel.scroll.y = panel.scroll.y.clamp(0, (content.y - view.height).max(0));

        for (axis, shown, slot) in [(ScrollAxis::Vertical, vertical, SCROLL_Y), (ScrollAxis::Horizontal, horizontal, SCROLL_X)] {
            if !shown {
                match axis {
                    ScrollAxis::Vertical => panel.scroll.y = 0,
                    ScrollAxis::Horizontal => panel.scroll.x = 0,
                }
                continue;
            }
            let bar = scrollbar(axis, view, content, panel.scroll, style.scrollbar_size, style.thumb_size);
            let control = self.chrome_control(slot, bar.base);
            if control.pressed {
                let grab = self.input.mouse_pos() - vec2(bar.thumb.x, bar.thumb.y);
                let inside = rect_contains(&bar.thumb, self.input.mouse_pos());
                let offset = if inside { grab } else { vec2(bar.thumb.width / 2, bar.thumb.height / 2) };
                self.interaction.set_drag_offset(offset);
            }
            if control.active {
                let pos = self.input.mouse_pos() - self.interaction.drag_offset();
                match axis {
                    ScrollAxis::Vertical => panel.scroll.y = bar.scroll_for_thumb(pos.y),
                    ScrollAxis::Horizontal => panel.scroll.x = bar.scroll_for_thumb(pos.x),
                }
            }
            let bar = scrollbar(axis, view, content, panel.scroll, style.scrollbar_size, style.thumb_size);
            let mut ctx = self.draw_ctx();
            ctx.draw_rect(bar.base, style.scroll_base_color);
            ctx.draw_rect(bar.thumb, style.scroll_thumb_color);
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn run(ctx: &mut Context, ids: &[PanelId]) {
        ctx.frame(screen(), DT, |ctx| {
            for &id in ids {
                ctx.show_panel(id, |ctx| {
                    ctx.label("body");
                });
            }
        });
    }

    #[test]
    fn pressing_a_panel_raises_it() {
        let mut ctx = context();
        let a = ctx.add_panel("a", rect(0, 0, 200, 200), PanelOption::TITLE);
        let b = ctx.add_panel("b", rect(100, 100, 200, 200), PanelOption::TITLE);
        assert_eq!(ctx.panel_order(), &[b, a]);
        hover(&mut ctx, 50, 50);
        run(&mut ctx, &[a, b]);
        press(&mut ctx, 50, 50);
        run(&mut ctx, &[a, b]);
        assert_eq!(ctx.panel_order(), &[a, b]);
        // the overlapping corner now belongs to `a`
        release(&mut ctx, 150, 150);
        run(&mut ctx, &[a, b]);
        press(&mut ctx, 150, 150);
        run(&mut ctx, &[a, b]);
        assert_eq!(ctx.panel_order(), &[a, b]);
    }

    #[test]
    fn title_drag_moves_a_floating_panel() {
        let mut ctx = context();
        let a = ctx.add_panel("a", rect(10, 10, 200, 200), PanelOption::TITLE | PanelOption::DRAGGABLE);
        hover(&mut ctx, 100, 20);
        run(&mut ctx, &[a]);
        run(&mut ctx, &[a]);
        press(&mut ctx, 100, 20);
        run(&mut ctx, &[a]);
        hover(&mut ctx, 130, 60);
        run(&mut ctx, &[a]);
        let r = ctx.panel(a).unwrap().rect();
        assert_eq!((r.x, r.y), (40, 50));
    }

    #[test]
    fn collapsing_a_docked_panel_keeps_the_split_size() {
        let mut ctx = context();
        let top = ctx.add_panel("top", Recti::default(), PanelOption::TITLE | PanelOption::COLLAPSIBLE);
        let bottom = ctx.add_panel("bottom", Recti::default(), PanelOption::TITLE);
        let splits = ctx.splits_mut();
        let (lt, lb) = (splits.leaf(top), splits.leaf(bottom));
        let root = splits.split(SplitDir::TopBottom, SplitSize::Ratio(0.5), true, lt, lb).unwrap();
        ctx.set_split_root(root).unwrap();
        run(&mut ctx, &[top, bottom]);
        assert!(ctx.panel(top).unwrap().is_docked());

        ctx.toggle_collapse(top).unwrap();
        assert_eq!(ctx.panel(top).unwrap().state(), PanelState::Collapsed);
        assert_eq!(ctx.splits_mut().size(root), Some(SplitSize::First(24)));
        run(&mut ctx, &[top, bottom]);
        assert_eq!(ctx.panel(bottom).unwrap().rect().y, 24);

        ctx.toggle_collapse(top).unwrap();
        assert_eq!(ctx.splits_mut().size(root), Some(SplitSize::Ratio(0.5)));
        run(&mut ctx, &[top, bottom]);
        assert_eq!(ctx.panel(bottom).unwrap().rect().y, 300);
    }

    #[test]
    fn collapsed_panel_only_covers_its_title_bar() {
        let mut ctx = context();
        let back = ctx.add_panel("back", rect(0, 0, 300, 300), PanelOption::TITLE);
        let front = ctx.add_panel("front", rect(0, 0, 300, 300), PanelOption::TITLE | PanelOption::COLLAPSIBLE);
        ctx.toggle_collapse(front).unwrap();
        let frame = |ctx: &mut Context| {
            let mut button = None;
            ctx.frame(screen(), DT, |ctx| {
                ctx.show_panel(back, |ctx| {
                    ctx.button("ok");
                    button = ctx.last_id();
                });
                ctx.show_panel(front, |ctx| {
                    ctx.label("hidden");
                });
            });
            button
        };
        // the button spans y 32..48 under the back panel's title
        hover(&mut ctx, 50, 40);
        frame(&mut ctx);
        let button = frame(&mut ctx);
        assert!(button.is_some());
        assert_eq!(ctx.hot(), button);

        hover(&mut ctx, 50, 10);
        frame(&mut ctx);
        frame(&mut ctx);
        assert_ne!(ctx.hot(), button);
    }

    #[test]
    fn tabs_show_one_panel_at_a_time() {
        let mut ctx = context();
        let a = ctx.add_panel("a", rect(0, 0, 300, 300), PanelOption::TITLE);
        let b = ctx.add_panel("b", rect(50, 50, 100, 100), PanelOption::TITLE);
        ctx.link_tabs(&[a, b]).unwrap();
        let mut drawn = Vec::new();
        ctx.frame(screen(), DT, |ctx| {
            for id in [a, b] {
                if ctx.show_panel(id, |_| {}) {
                    drawn.push(id);
                }
            }
        });
        assert_eq!(drawn, vec![a]);
        ctx.select_tab(b).unwrap();
        assert!(ctx.panel(a).unwrap().is_tabbed_out());
        assert_eq!(ctx.panel(b).unwrap().rect().width, 300);
        assert_eq!(ctx.panel_order(), &[b, a]);
        ctx.select_tab(a).unwrap();
        assert!(ctx.panel(b).unwrap().is_tabbed_out());
        assert_eq!(ctx.panel_order(), &[a, b]);
    }

    #[test]
    fn closed_panels_are_skipped_and_reopened_in_front() {
        let mut ctx = context();
        let a = ctx.add_panel("a", rect(0, 0, 100, 100), PanelOption::TITLE);
        let b = ctx.add_panel("b", rect(0, 0, 100, 100), PanelOption::TITLE);
        ctx.close_panel(a).unwrap();
        let mut shown = 0;
        ctx.frame(screen(), DT, |ctx| {
            shown += ctx.show_panel(a, |_| {}) as i32;
        });
        assert_eq!(shown, 0);
        ctx.open_panel(a).unwrap();
        assert_eq!(ctx.panel_order(), &[a, b]);
        ctx.remove_panel(b).unwrap();
        assert!(ctx.panel(b).is_none());
        assert_eq!(ctx.remove_panel(b), Err(UiError::UnknownPanel(b.index())));
    }

    #[test]
    fn wheel_scroll_is_clamped_to_the_content() {
        let mut ctx = context();
        let a = ctx.add_panel("a", rect(0, 0, 200, 100), PanelOption::SCROLLBARS);
        let tall = |ctx: &mut Context| {
            ctx.frame(screen(), DT, |ctx| {
                ctx.show_panel(a, |ctx| {
                    for _ in 0..10 {
                        ctx.label("line");
                    }
                });
            });
        };
        hover(&mut ctx, 50, 50);
        tall(&mut ctx);
        tall(&mut ctx);
        ctx.input_mut().scroll(0, 1000);
        tall(&mut ctx);
        // ten rows of 24 plus padding on both sides, seen through a 100 pixel body
        assert_eq!(ctx.panel(a).unwrap().scroll().y, 10 * 24 + 8 - 100);
        ctx.input_mut().scroll(0, -5000);
        tall(&mut ctx);
        assert_eq!(ctx.panel(a).unwrap().scroll().y, 0);
    }

    #[test]
    fn nested_begin_is_rejected() {
        let mut ctx = context();
        let a = ctx.add_panel("a", rect(0, 0, 100, 100), PanelOption::NONE);
        let b = ctx.add_panel("b", rect(0, 0, 100, 100), PanelOption::NONE);
        ctx.frame(screen(), DT, |ctx| {
            assert!(ctx.begin_panel(a));
            assert!(!ctx.begin_panel(b));
            assert!(ctx.end_panel().is_ok());
            assert_eq!(ctx.end_panel(), Err(UiError::NoPanel));
        });
    }
}
