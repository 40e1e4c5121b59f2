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
use crate::*;
use tracing::{debug, warn};

#[derive(Copy, Clone, Default, Debug)]
/// Captures the interaction state for a widget during the current frame.
/// Produced by [`Interaction::update`] and consumed by the widget that asked for it.
pub struct ControlState {
    /// Cursor is hovering the widget and it is the hot widget.
    pub hovered: bool,
    /// Widget owns keyboard focus.
    pub focused: bool,
    /// Widget received focus this frame.
    pub gained_focus: bool,
    /// Widget owns the pointer while a button is held.
    pub active: bool,
    /// Widget became active this frame.
    pub pressed: bool,
    /// Widget stopped being active this frame.
    pub released: bool,
    /// Widget was released while the pointer was still over it.
    pub clicked: bool,
    /// Enter was pressed while the widget had focus.
    pub submitted: bool,
    /// Escape was pressed while the widget had focus.
    pub cancelled: bool,
    /// Widget is disabled.
    pub disabled: bool,
}

impl ControlState {
    /// Maps the control state onto the four visual states.
    pub fn render_state(&self) -> RenderState {
        if self.disabled {
            RenderState::Disabled
        } else if self.active {
            RenderState::Active
        } else if self.hovered || self.focused {
            RenderState::Hot
        } else {
            RenderState::Inactive
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Hot, active and focus bookkeeping for the whole UI.
///
/// Widgets call [`Interaction::update`] in declaration order. Each call resolves, in this order,
/// keyboard handling for the focused widget, focus acquisition after a Tab, release of a hot widget
/// the pointer left, press/release of the active widget and finally hot acquisition.
pub struct Interaction {
    hot: Option<WidgetId>,
    active: Option<WidgetId>,
    focus: Option<WidgetId>,
    hot_seen: bool,
    active_seen: bool,
    focus_seen: bool,
    lock: u32,
    focus_next: bool,
    focus_last: bool,
    tab_handled: bool,
    first: Option<WidgetId>,
    previous: Option<WidgetId>,
    drag_offset: Vec2i,
}

impl Interaction {
    /// Returns the hot widget.
    pub fn hot(&self) -> Option<WidgetId> { self.hot }
    /// Returns the active widget.
    pub fn active(&self) -> Option<WidgetId> { self.active }
    /// Returns the focused widget.
    pub fn focus(&self) -> Option<WidgetId> { self.focus }
    /// Returns the pointer offset from the active widget's corner recorded when it was pressed.
    pub fn drag_offset(&self) -> Vec2i { self.drag_offset }
    /// Returns `true` while hot acquisition is locked.
    pub fn is_locked(&self) -> bool { self.lock > 0 }

    /// Gives keyboard focus to `id`, or clears it.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        self.focus = id;
        self.focus_seen = true;
        self.focus_next = false;
        self.focus_last = false;
    }

    /// Overrides the drag offset of the active widget.
    pub fn set_drag_offset(&mut self, offset: Vec2i) { self.drag_offset = offset; }

    /// Blocks new hot acquisitions until the matching [`Interaction::unlock`].
    pub fn lock(&mut self) { self.lock += 1; }

    /// Releases one [`Interaction::lock`].
    pub fn unlock(&mut self) {
        if self.lock == 0 {
            tracing::error!("unlock without a matching lock");
            return;
        }
        self.lock -= 1;
    }

    /// Drops ids whose widget was not declared during the last frame and resolves a Tab pressed with nothing focused.
    pub fn begin_frame(&mut self, input: &Input) {
        if !self.hot_seen && self.hot.take().is_some() {
            debug!("hot widget disappeared, releasing it");
        }
        if !self.active_seen && self.active.take().is_some() {
            warn!("active widget disappeared, releasing it");
        }
        if !self.focus_seen && self.focus.take().is_some() {
            debug!("focused widget disappeared, releasing focus");
        }
        self.hot_seen = false;
        self.active_seen = false;
        self.focus_seen = false;
        self.tab_handled = false;
        self.first = None;
        self.previous = None;

        if self.focus.is_none() && input.key_pressed(Keys::TAB) {
            self.tab_handled = true;
            if input.key_down(Keys::SHIFT) {
                self.focus_last = true;
            } else {
                self.focus_next = true;
            }
        }
    }

    /// Resolves a Tab that wrapped past the last widget or a Shift+Tab that wrapped past the first
    /// one. A Tab request no widget could take is dropped.
    pub fn end_frame(&mut self) {
        if self.focus_next {
            self.focus_next = false;
            if let Some(first) = self.first {
                self.focus = Some(first);
                self.focus_seen = true;
            }
        }
        if self.focus_last {
            self.focus_last = false;
            if let Some(last) = self.previous {
                self.focus = Some(last);
                self.focus_seen = true;
            }
        }
    }

    /// Runs the hot/active/focus state machine for one widget.
    ///
    /// `mouse_over` is `true` when the pointer is inside `rect`, inside the current clip and not
    /// occluded by another panel or overlay.
    pub fn update(&mut self, id: WidgetId, rect: Recti, opt: WidgetOption, input: &Input, mouse_over: bool) -> ControlState {
        let mut state = ControlState { disabled: opt.is_disabled(), ..ControlState::default() };
        let focusable = opt.is_focusable();

        if self.hot == Some(id) {
            self.hot_seen = true;
        }
        if self.active == Some(id) {
            self.active_seen = true;
        }
        if self.focus == Some(id) {
            self.focus_seen = true;
        }

        if self.focus == Some(id) {
            if !focusable {
                self.focus = None;
            } else if input.key_pressed(Keys::TAB) && !self.tab_handled {
                self.tab_handled = true;
                self.focus = None;
                if input.key_down(Keys::SHIFT) {
                    match self.previous {
                        Some(prev) => {
                            self.focus = Some(prev);
                            self.focus_seen = true;
                        }
                        None => self.focus_last = true,
                    }
                } else {
                    self.focus_next = true;
                }
            } else if input.key_pressed(Keys::ESCAPE) {
                self.focus = None;
                state.cancelled = true;
            } else if !input.mouse_pressed().is_none() && !mouse_over {
                self.focus = None;
            } else {
                state.focused = true;
                state.submitted = input.key_pressed(Keys::ENTER);
            }
        } else if self.focus_next && focusable {
            self.focus_next = false;
            self.focus = Some(id);
            self.focus_seen = true;
            state.focused = true;
            state.gained_focus = true;
        }

        if self.hot == Some(id) {
            if !mouse_over || opt.is_disabled() {
                self.hot = None;
            } else if input.mouse_pressed().is_left() && self.active.is_none() {
                self.hot = None;
                self.active = Some(id);
                self.active_seen = true;
                self.drag_offset = input.mouse_pos() - vec2(rect.x, rect.y);
                state.pressed = true;
                if focusable && self.focus != Some(id) {
                    self.focus = Some(id);
                    self.focus_seen = true;
                    state.focused = true;
                    state.gained_focus = true;
                }
            } else {
                state.hovered = true;
            }
        }

        if self.active == Some(id) {
            if input.mouse_down().is_left() {
                state.active = true;
            } else {
                self.active = None;
                state.released = true;
                state.clicked = mouse_over;
            }
        } else if self.hot.is_none() && self.active.is_none() && self.lock == 0 && mouse_over && !opt.is_disabled() && input.mouse_down().is_none() {
            self.hot = Some(id);
            self.hot_seen = true;
            state.hovered = true;
        }

        if focusable {
            self.first.get_or_insert(id);
            self.previous = Some(id);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn id(n: i32) -> WidgetId { WidgetId::new(Scope::ROOT, n * 10, 0) }

    fn rect_of(n: i32) -> Recti { rect(n * 10, 0, 10, 10) }

    fn frame(inter: &mut Interaction, input: &mut Input, widgets: &[i32]) -> Vec<ControlState> {
        input.prelude(1.0 / 60.0);
        inter.begin_frame(input);
        let states = widgets
            .iter()
            .map(|&n| {
                let over = rect_contains(&rect_of(n), input.mouse_pos());
                inter.update(id(n), rect_of(n), WidgetOption::NONE, input, over)
            })
            .collect();
        inter.end_frame();
        input.epilogue();
        states
    }

    #[test]
    fn hover_press_release_clicks_once() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(15, 5);
        let s = frame(&mut inter, &mut input, &[0, 1, 2]);
        assert!(s[1].hovered);
        assert_eq!(inter.hot(), Some(id(1)));

        input.mousedown(15, 5, MouseButton::LEFT);
        let s = frame(&mut inter, &mut input, &[0, 1, 2]);
        assert!(s[1].pressed && s[1].active);
        assert_eq!(inter.active(), Some(id(1)));
        assert_eq!(inter.hot(), None);

        input.mouseup(15, 5, MouseButton::LEFT);
        let s = frame(&mut inter, &mut input, &[0, 1, 2]);
        assert!(s[1].clicked);
        assert_eq!(inter.active(), None);

        let s = frame(&mut inter, &mut input, &[0, 1, 2]);
        assert!(!s[1].clicked);
    }

    #[test]
    fn release_outside_does_not_click() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(5, 5);
        frame(&mut inter, &mut input, &[0]);
        input.mousedown(5, 5, MouseButton::LEFT);
        frame(&mut inter, &mut input, &[0]);
        input.mousemove(50, 50);
        let s = frame(&mut inter, &mut input, &[0]);
        assert!(s[0].active);
        input.mouseup(50, 50, MouseButton::LEFT);
        let s = frame(&mut inter, &mut input, &[0]);
        assert!(s[0].released);
        assert!(!s[0].clicked);
    }

    #[test]
    fn missing_widget_ids_are_healed_next_frame() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(5, 5);
        frame(&mut inter, &mut input, &[0]);
        assert_eq!(inter.hot(), Some(id(0)));
        // widget 0 not declared this frame
        frame(&mut inter, &mut input, &[1]);
        input.prelude(1.0 / 60.0);
        inter.begin_frame(&input);
        assert_eq!(inter.hot(), None);
    }

    #[test]
    fn missing_active_widget_is_released_next_frame() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(5, 5);
        frame(&mut inter, &mut input, &[0, 1]);
        input.mousedown(5, 5, MouseButton::LEFT);
        frame(&mut inter, &mut input, &[0, 1]);
        assert_eq!(inter.active(), Some(id(0)));
        frame(&mut inter, &mut input, &[1]);
        assert_eq!(inter.active(), Some(id(0)));
        frame(&mut inter, &mut input, &[1]);
        assert_eq!(inter.active(), None);
    }

    #[test]
    fn missing_focused_widget_loses_focus_next_frame() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(500, 500);
        input.keydown(Keys::TAB);
        frame(&mut inter, &mut input, &[0, 1]);
        input.keyup(Keys::TAB);
        assert_eq!(inter.focus(), Some(id(0)));
        frame(&mut inter, &mut input, &[1]);
        frame(&mut inter, &mut input, &[1]);
        assert_eq!(inter.focus(), None);
    }

    #[test]
    fn tab_with_no_widgets_is_dropped() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(500, 500);
        input.keydown(Keys::TAB);
        frame(&mut inter, &mut input, &[]);
        input.keyup(Keys::TAB);
        let s = frame(&mut inter, &mut input, &[0, 1]);
        assert!(s.iter().all(|s| !s.gained_focus));
        frame(&mut inter, &mut input, &[0, 1]);
        assert_eq!(inter.focus(), None);
    }

    #[test]
    fn tab_from_the_last_widget_wraps_to_the_first() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(500, 500);
        inter.set_focus(Some(id(2)));
        input.keydown(Keys::TAB);
        frame(&mut inter, &mut input, &[0, 1, 2]);
        assert_eq!(inter.focus(), Some(id(0)));
        input.keyup(Keys::TAB);
        let s = frame(&mut inter, &mut input, &[0, 1, 2]);
        assert!(s[0].focused);
    }

    #[test]
    fn tab_cycles_focus_forward_and_back() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(500, 500);
        frame(&mut inter, &mut input, &[0, 1, 2]);
        assert_eq!(inter.focus(), None);

        input.keydown(Keys::TAB);
        let s = frame(&mut inter, &mut input, &[0, 1, 2]);
        assert!(s[0].gained_focus);
        assert_eq!(inter.focus(), Some(id(0)));
        input.keyup(Keys::TAB);
        frame(&mut inter, &mut input, &[0, 1, 2]);

        input.keydown(Keys::TAB);
        let s = frame(&mut inter, &mut input, &[0, 1, 2]);
        assert!(!s[0].focused);
        assert!(s[1].gained_focus);
        assert_eq!(inter.focus(), Some(id(1)));
        input.keyup(Keys::TAB);

        input.keydown(Keys::SHIFT);
        frame(&mut inter, &mut input, &[0, 1, 2]);
        input.keydown(Keys::TAB);
        frame(&mut inter, &mut input, &[0, 1, 2]);
        assert_eq!(inter.focus(), Some(id(0)));
        input.keyup(Keys::TAB);
        frame(&mut inter, &mut input, &[0, 1, 2]);

        // shift+tab from the first widget wraps to the last one
        input.keydown(Keys::TAB);
        frame(&mut inter, &mut input, &[0, 1, 2]);
        assert_eq!(inter.focus(), Some(id(2)));
    }

    #[test]
    fn lock_blocks_hot_acquisition() {
        let mut inter = Interaction::default();
        let mut input = Input::default();
        input.mousemove(5, 5);
        inter.lock();
        frame(&mut inter, &mut input, &[0]);
        assert_eq!(inter.hot(), None);
        inter.unlock();
        frame(&mut inter, &mut input, &[0]);
        assert_eq!(inter.hot(), Some(id(0)));
    }

    #[test]
    fn at_most_one_widget_is_active() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut inter = Interaction::default();
        let mut input = Input::default();
        for _ in 0..2000 {
            let x = rng.random_range(0..60);
            match rng.random_range(0..3) {
                0 => input.mousemove(x, 5),
                1 => input.mousedown(x, 5, MouseButton::LEFT),
                _ => input.mouseup(x, 5, MouseButton::LEFT),
            }
            let states = frame(&mut inter, &mut input, &[0, 1, 2, 3, 4]);
            assert!(states.iter().filter(|s| s.active).count() <= 1);
            assert!(states.iter().filter(|s| s.hovered).count() <= 1);
        }
    }
}
