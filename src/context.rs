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
use crate::draw_context::DrawCtx;
use crate::layout::LayoutManager;
use crate::panel::Panel;
use crate::widgets::{DropdownBuild, OpenDropdown};
use crate::*;
use tracing::{debug, warn};

/// Primary entry point: owns input, interaction state, style, panels, splits and the draw list.
///
/// A context is driven from one thread. It holds the font provider as a plain trait object, so it
/// is neither `Send` nor `Sync`.
pub struct Context {
    pub(crate) input: Input,
    pub(crate) interaction: Interaction,
    pub(crate) style: Style,
    style_stack: StyleStack,
    style_depth: usize,
    pub(crate) draw: DrawList,
    pub(crate) font: Option<Box<dyn FontProvider>>,
    pub(crate) layout: LayoutManager,
    pub(crate) panels: Vec<Option<Panel>>,
    pub(crate) order: Vec<PanelId>,
    pub(crate) splits: SplitTree,
    pub(crate) current_panel: Option<PanelId>,
    pub(crate) chrome: bool,
    pub(crate) hover_panel: Option<PanelId>,
    pub(crate) next_hover: Option<(PanelId, i32)>,
    pub(crate) overlay_hovered: bool,
    pub(crate) dropdown: Option<OpenDropdown>,
    pub(crate) building: Option<DropdownBuild>,
    pub(crate) text_cursor: usize,
    boundaries: Vec<(SplitId, SplitDir, Recti, i32)>,
    screen: Recti,
    frame: u64,
    in_frame: bool,
    last_id: Option<WidgetId>,
}

impl Default for Context {
    fn default() -> Self { Self::new() }
}

impl Context {
    /// Creates a context with the default capacities.
    pub fn new() -> Self { Self::with_capacities(Capacities::default()) }

    /// Creates a context whose buffers and stacks are bounded by `capacities`.
    pub fn with_capacities(capacities: Capacities) -> Self {
        Self {
            input: Input::new(capacities.text_input, RepeatConfig::default()),
            interaction: Interaction::default(),
            style: Style::default(),
            style_stack: StyleStack::new(capacities.style_stack),
            style_depth: 0,
            draw: DrawList::new(&capacities),
            font: None,
            layout: LayoutManager::new(capacities.grid_depth, capacities.grid_cells),
            panels: Vec::new(),
            order: Vec::new(),
            splits: SplitTree::new(),
            current_panel: None,
            chrome: false,
            hover_panel: None,
            next_hover: None,
            overlay_hovered: false,
            dropdown: None,
            building: None,
            text_cursor: 0,
            boundaries: Vec::new(),
            screen: Recti::default(),
            frame: 0,
            in_frame: false,
            last_id: None,
        }
    }

    /// Installs the font used to measure and draw text. Without one, text is skipped.
    pub fn set_font_provider(&mut self, font: Box<dyn FontProvider>) { self.font = Some(font); }

    /// Returns the input state the host feeds between frames.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.input }

    /// Returns the input state.
    pub fn input(&self) -> &Input { &self.input }

    /// Returns the number of frames begun so far.
    pub fn frame_count(&self) -> u64 { self.frame }

    /// Starts a frame on a `dim` sized screen, `dt` seconds after the previous one.
    ///
    /// Computes the input edges and repeats, clears the draw list, heals stale widget ids, lays
    /// the split tree out and runs the splitter handles.
    pub fn begin_frame(&mut self, dim: Dimensioni, dt: f32) {
        if self.in_frame {
            warn!("begin_frame called twice, closing the previous frame");
            self.end_frame();
        }
        self.in_frame = true;
        self.frame += 1;
        self.input.prelude(dt);
        self.screen = rect(0, 0, dim.width, dim.height);
        self.draw.clear(self.screen);
        self.style_depth = self.style_stack.depth();
        self.interaction.begin_frame(&self.input);
        self.next_hover = None;
        self.last_id = None;

        let pos = self.input.mouse_pos();
        self.overlay_hovered = self.dropdown.as_ref().is_some_and(|d| rect_contains(&d.overlay, pos));
        if let Some(d) = &mut self.dropdown {
            d.seen = false;
        }

        self.splits.compute(self.screen);
        self.dock_panels();
        self.splitters();
    }

    /// Ends the frame: closes what the caller left open, checks the style stack, updates the
    /// z-order and hover panel and sorts the draw list for rendering.
    pub fn end_frame(&mut self) {
        if !self.in_frame {
            warn!("end_frame without begin_frame");
            return;
        }
        if self.building.is_some() {
            UiError::NoDropdown.logged();
            self.building = None;
            self.draw.end_overlay();
        }
        if let Some(id) = self.current_panel {
            warn!("panel #{} still open at the end of the frame", id.index());
            let _ = self.end_panel();
        }
        if self.dropdown.as_ref().is_some_and(|d| !d.seen) {
            debug!("open dropdown was not declared this frame, closing it");
            self.dropdown = None;
        }
        self.interaction.end_frame();

        let depth = self.style_stack.depth();
        if depth != self.style_depth {
            UiError::StyleStackLeak(depth.abs_diff(self.style_depth)).logged();
            self.style_stack.unwind(&mut self.style, self.style_depth);
        }

        if !self.input.mouse_pressed().is_none() {
            if let Some((id, _)) = self.next_hover {
                self.raise(id);
            }
        }
        self.hover_panel = self.next_hover.take().map(|(id, _)| id);

        self.draw.finish();
        self.input.epilogue();
        self.in_frame = false;
    }

    /// Runs `f` between [`Context::begin_frame`] and [`Context::end_frame`].
    pub fn frame<F: FnOnce(&mut Self)>(&mut self, dim: Dimensioni, dt: f32, f: F) {
        self.begin_frame(dim, dt);
        f(self);
        self.end_frame();
    }

    /// Hands the finished draw list to `renderer`.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) { self.draw.submit(renderer); }

    /// Returns the draw list of the last finished frame.
    pub fn draw_list(&self) -> &DrawList { &self.draw }

    /// Returns the style in effect.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the whole style. Overrides pushed with [`Context::push_style`] are kept on the stack.
    pub fn set_style(&mut self, style: Style) { self.style = style; }

    /// Overrides one style field until the matching [`Context::pop_style`].
    pub fn push_style(&mut self, var: StyleVar) -> UiResult<()> { self.style_stack.push(&mut self.style, var) }

    /// Restores the field changed by the latest [`Context::push_style`].
    pub fn pop_style(&mut self) -> UiResult<()> { self.style_stack.pop(&mut self.style) }

    /// Runs `f` with `vars` applied to the style, restoring them afterwards.
    pub fn with_style<F: FnOnce(&mut Self)>(&mut self, vars: &[StyleVar], f: F) {
        let mut pushed = 0;
        for &var in vars {
            if self.push_style(var).is_ok() {
                pushed += 1;
            }
        }
        f(self);
        for _ in 0..pushed {
            let _ = self.pop_style();
        }
    }

    /// Stops widgets from becoming hot until [`Context::unlock`]. An active widget keeps tracking.
    pub fn lock(&mut self) { self.interaction.lock(); }

    /// Releases one [`Context::lock`].
    pub fn unlock(&mut self) { self.interaction.unlock(); }

    /// Runs `f` with hot acquisition locked.
    pub fn with_lock<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.lock();
        f(self);
        self.unlock();
    }

    /// Returns the widget under the pointer.
    pub fn hot(&self) -> Option<WidgetId> { self.interaction.hot() }

    /// Returns the widget holding the pointer.
    pub fn active(&self) -> Option<WidgetId> { self.interaction.active() }

    /// Returns the widget holding keyboard focus.
    pub fn focus(&self) -> Option<WidgetId> { self.interaction.focus() }

    /// Moves keyboard focus.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        self.interaction.set_focus(id);
        self.text_cursor = usize::MAX;
    }

    /// Returns the id of the last widget declared this frame.
    pub fn last_id(&self) -> Option<WidgetId> { self.last_id }

    /// Returns the split tree for editing.
    pub fn splits_mut(&mut self) -> &mut SplitTree { &mut self.splits }

    /// Returns the split tree.
    pub fn splits(&self) -> &SplitTree { &self.splits }

    /// Docks the panels of the tree rooted at `root` into the screen.
    pub fn set_split_root(&mut self, root: SplitId) -> UiResult<()> { self.splits.set_root(root) }

    /// Declares a row of `cells` that is `height` pixels tall, or the default row height when `height <= 0`.
    pub fn row(&mut self, height: i32, cells: &[f32]) -> UiResult<()> { self.layout.strip(Direction::Row, None, Some(height), cells) }

    /// Declares a column of `cells` that is `width` pixels wide, or as wide as its parent when `width <= 0`.
    pub fn col(&mut self, width: i32, cells: &[f32]) -> UiResult<()> { self.layout.strip(Direction::Column, None, Some(width), cells) }

    /// Declares a row with an explicit width as well as height.
    pub fn row_ex(&mut self, width: i32, height: i32, cells: &[f32]) -> UiResult<()> { self.layout.strip(Direction::Row, Some(width), Some(height), cells) }

    /// Declares a column with an explicit height as well as width.
    pub fn col_ex(&mut self, height: i32, width: i32, cells: &[f32]) -> UiResult<()> { self.layout.strip(Direction::Column, Some(height), Some(width), cells) }

    /// Consumes the next layout cell.
    pub fn next_cell(&mut self) -> UiResult<Recti> { self.layout.next_cell() }

    /// Skips the remaining cells of the innermost strip.
    pub fn end_strip(&mut self) { self.layout.end_strip(); }

    pub(crate) fn draw_ctx(&mut self) -> DrawCtx<'_> { DrawCtx::new(&mut self.draw, &self.style, self.font.as_deref()) }

    pub(crate) fn current_scope(&self) -> Scope {
        if self.draw.in_overlay() {
            return Scope::OVERLAY;
        }
        match self.current_panel {
            Some(p) if self.chrome => Scope::chrome(p.index()),
            Some(p) => Scope::panel(p.index()),
            None => Scope::ROOT,
        }
    }

    /// Returns `true` if the pointer is over `r`, inside the clip and not hidden by a panel or overlay.
    pub(crate) fn mouse_over(&self, r: Recti) -> bool {
        let pos = self.input.mouse_pos();
        if !rect_contains(&r, pos) || !rect_contains(&self.draw.clip(), pos) {
            return false;
        }
        if self.draw.in_overlay() {
            return self.overlay_hovered;
        }
        !self.overlay_hovered && self.hover_panel == self.current_panel
    }

    /// Runs the interaction state machine for a widget.
    pub(crate) fn control(&mut self, id: WidgetId, r: Recti, opt: WidgetOption) -> ControlState {
        let over = self.mouse_over(r);
        self.control_with(id, r, opt, over)
    }

    pub(crate) fn control_with(&mut self, id: WidgetId, r: Recti, opt: WidgetOption, mouse_over: bool) -> ControlState {
        self.last_id = Some(id);
        self.interaction.update(id, r, opt, &self.input, mouse_over)
    }

    /// Splitter handles straddle every resizable boundary. They draw into the root layer, below all panels.
    fn splitters(&mut self) {
        let mut boundaries = std::mem::take(&mut self.boundaries);
        self.splits.boundaries(&mut boundaries);
        let size = self.style.splitter_size;
        let pos = self.input.mouse_pos();
        let hover_free = !self.overlay_hovered && self.hover_panel.is_none_or(|p| self.panel(p).is_some_and(|p| p.is_docked()));
        let mut moved = false;
        for &(split, dir, r, at) in &boundaries {
            let zone = match dir {
                SplitDir::LeftRight => rect(r.x + at - size / 2, r.y, size, r.height),
                SplitDir::TopBottom => rect(r.x, r.y + at - size / 2, r.width, size),
            };
            let id = WidgetId::new(Scope::SPLITTERS, split.index() as i32, 0);
            let over = hover_free && rect_contains(&zone, pos);
            let control = self.control_with(id, zone, WidgetOption::NO_FOCUS, over);
            if control.active {
                let grab = self.interaction.drag_offset();
                let first = match dir {
                    SplitDir::LeftRight => pos.x - grab.x + size / 2 - r.x,
                    SplitDir::TopBottom => pos.y - grab.y + size / 2 - r.y,
                };
                if first != at && self.splits.drag_boundary(split, first).is_ok() {
                    moved = true;
                }
            }
            let color = self.style.splitter.pick(control.render_state());
            let _ = self.draw.fill_rect(zone, color);
        }
        self.boundaries = boundaries;
        if moved {
            self.splits.compute(self.screen);
            self.dock_panels();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn docked_pair(ctx: &mut Context) -> (PanelId, PanelId, SplitId) {
        let left = ctx.add_panel("left", Recti::default(), PanelOption::NONE);
        let right = ctx.add_panel("right", Recti::default(), PanelOption::NONE);
        let splits = ctx.splits_mut();
        let (a, b) = (splits.leaf(left), splits.leaf(right));
        let root = splits.split(SplitDir::LeftRight, SplitSize::Ratio(0.5), true, a, b).unwrap();
        ctx.set_split_root(root).unwrap();
        (left, right, root)
    }

    fn run(ctx: &mut Context, left: PanelId, right: PanelId) {
        ctx.frame(screen(), DT, |ctx| {
            ctx.show_panel(left, |_| {});
            ctx.show_panel(right, |_| {});
        });
    }

    #[test]
    fn dragging_a_splitter_resizes_both_sides() {
        let mut ctx = context();
        let (left, right, root) = docked_pair(&mut ctx);
        hover(&mut ctx, 400, 300);
        run(&mut ctx, left, right);
        run(&mut ctx, left, right);
        press(&mut ctx, 400, 300);
        run(&mut ctx, left, right);
        hover(&mut ctx, 200, 300);
        run(&mut ctx, left, right);
        assert_eq!(ctx.splits().size(root), Some(SplitSize::Ratio(0.25)));
        assert_eq!(ctx.panel(left).unwrap().rect().width, 200);
        assert_eq!(ctx.panel(right).unwrap().rect().x, 200);
    }

    #[test]
    fn style_leaks_are_unwound_at_frame_end() {
        let mut ctx = context();
        ctx.frame(screen(), DT, |ctx| {
            ctx.push_style(StyleVar::Padding(9)).unwrap();
        });
        assert_eq!(ctx.style().padding, Style::default().padding);
        ctx.with_style(&[StyleVar::RowHeight(40)], |ctx| assert_eq!(ctx.style().row_height, 40));
        assert_eq!(ctx.style().row_height, Style::default().row_height);
        assert_eq!(ctx.pop_style(), Err(UiError::StyleStackEmpty));
    }

    #[test]
    fn layout_requires_a_panel() {
        let mut ctx = context();
        ctx.frame(screen(), DT, |ctx| {
            assert_eq!(ctx.row(20, &[0.0]), Err(UiError::NoGrid));
            assert_eq!(ctx.next_cell().err(), Some(UiError::NoGrid));
        });
    }

    #[test]
    fn rows_split_the_panel_body() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 108, 200), PanelOption::NONE);
        let mut widths = Vec::new();
        ctx.frame(screen(), DT, |ctx| {
            ctx.show_panel(p, |ctx| {
                ctx.row(20, &[0.0, 0.0, 0.0]).unwrap();
                for _ in 0..3 {
                    widths.push(ctx.next_cell().unwrap().width);
                }
            });
        });
        assert_eq!(widths, vec![34, 33, 33]);
    }

    #[test]
    fn render_walks_regions_in_order() {
        let mut ctx = context();
        let back = ctx.add_panel("back", rect(0, 0, 300, 300), PanelOption::TITLE);
        let front = ctx.add_panel("front", rect(50, 50, 100, 100), PanelOption::TITLE);
        ctx.frame(screen(), DT, |ctx| {
            ctx.show_panel(front, |ctx| ctx.label("front"));
            ctx.show_panel(back, |ctx| ctx.label("back"));
        });
        let mut renderer = RecordingRenderer::default();
        ctx.render(&mut renderer);
        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.vertices, ctx.draw_list().vertices().len());
        // the back panel's layer is scissored first, the front panel's body last
        assert_eq!(renderer.scissors.first().map(|r| r.width), Some(300));
        let last = renderer.scissors.last().unwrap();
        assert!(last.x >= 50 && last.x + last.width <= 150);
    }

    #[test]
    fn dropped_widget_releases_active_and_focus() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 200), PanelOption::NONE);
        let frame = |ctx: &mut Context, draw_button: bool| {
            let mut id = None;
            ctx.frame(screen(), DT, |ctx| {
                ctx.show_panel(p, |ctx| {
                    if draw_button {
                        ctx.button("go");
                        id = ctx.last_id();
                    }
                });
            });
            id
        };
        hover(&mut ctx, 20, 10);
        frame(&mut ctx, true);
        frame(&mut ctx, true);
        press(&mut ctx, 20, 10);
        let button = frame(&mut ctx, true);
        assert!(button.is_some());
        assert_eq!(ctx.active(), button);
        assert_eq!(ctx.focus(), button);

        frame(&mut ctx, false);
        frame(&mut ctx, false);
        assert_eq!(ctx.active(), None);
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn lock_blocks_hot_acquisition() {
        let mut ctx = context();
        let p = ctx.add_panel("p", rect(0, 0, 200, 200), PanelOption::NONE);
        hover(&mut ctx, 20, 10);
        for _ in 0..2 {
            ctx.frame(screen(), DT, |ctx| {
                ctx.show_panel(p, |ctx| {
                    ctx.with_lock(|ctx| {
                        ctx.button("locked");
                    });
                });
            });
        }
        assert_eq!(ctx.hot(), None);
        ctx.frame(screen(), DT, |ctx| {
            ctx.show_panel(p, |ctx| {
                ctx.button("free");
            });
        });
        assert!(ctx.hot().is_some());
    }
}
