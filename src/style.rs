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

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Visual state a widget is drawn in.
pub enum RenderState {
    /// Idle.
    Inactive,
    /// Hovered or focused.
    Hot,
    /// Pressed.
    Active,
    /// Greyed out.
    Disabled,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// One color per [`RenderState`].
pub struct WidgetColors {
    /// Idle color.
    pub inactive: Color,
    /// Hovered or focused color.
    pub hot: Color,
    /// Pressed color.
    pub active: Color,
    /// Disabled color.
    pub disabled: Color,
}

impl WidgetColors {
    /// Returns the color for the given state.
    pub fn pick(&self, state: RenderState) -> Color {
        match state {
            RenderState::Inactive => self.inactive,
            RenderState::Hot => self.hot,
            RenderState::Active => self.active,
            RenderState::Disabled => self.disabled,
        }
    }

    fn grey(base: u8) -> Self {
        Self {
            inactive: color(base, base, base, 255),
            hot: color(base + 20, base + 20, base + 20, 255),
            active: color(base + 40, base + 40, base + 40, 255),
            disabled: color(base / 2, base / 2, base / 2, 255),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Horizontal text placement inside a widget.
pub enum TextAlign {
    /// Flush left after the padding.
    Left,
    /// Centered.
    Center,
    /// Flush right before the padding.
    Right,
}

/// Arguments handed to a [`Pen`].
pub struct PenArgs<'a> {
    /// Rectangle to draw into.
    pub rect: Recti,
    /// Visual state of the widget.
    pub state: RenderState,
    /// Colors of the widget kind being drawn.
    pub colors: &'a WidgetColors,
    /// Widget value in `0..=1` (checked state, slider position).
    pub value: f32,
    /// Style in effect.
    pub style: &'a Style,
}

/// Draw routine used for a widget kind's decoration. Swapping a pen restyles every widget of that kind.
pub type Pen = fn(&mut DrawList, &PenArgs<'_>);

/// Fills the widget rectangle and outlines it with the border color.
pub fn frame_pen(draw: &mut DrawList, args: &PenArgs<'_>) {
    let _ = draw.fill_rect(args.rect, args.colors.pick(args.state));
    if !args.style.border_color.is_transparent() {
        let _ = draw.stroke_rect(args.rect, args.style.border_color);
    }
}

/// Draws a check box and, when `value` is above one half, a check mark inside it.
pub fn checkbox_pen(draw: &mut DrawList, args: &PenArgs<'_>) {
    frame_pen(draw, args);
    if args.value > 0.5 {
        let inner = expand_rect(args.rect, -(args.rect.width / 4).max(1));
        let _ = draw.fill_rect(inner, args.style.text_color);
    }
}

/// Draws a slider track with a thumb placed at `value`.
pub fn slider_pen(draw: &mut DrawList, args: &PenArgs<'_>) {
    let r = args.rect;
    let track = rect(r.x, r.y + r.height / 2 - 1, r.width, 2);
    let _ = draw.fill_rect(track, args.style.border_color);
    let thumb = args.style.thumb_size.min(r.width);
    let travel = (r.width - thumb).max(0) as f32;
    let x = r.x + (travel * args.value.clamp(0.0, 1.0)).round() as i32;
    let _ = draw.fill_rect(rect(x, r.y, thumb, r.height), args.colors.pick(args.state));
}

#[derive(Copy, Clone, Debug)]
/// Collection of visual constants that drive widget appearance.
pub struct Style {
    /// Inner padding applied between a layout cell and the widget drawn in it.
    pub padding: i32,
    /// Default height of rows declared without an explicit height.
    pub row_height: i32,
    /// Height of panel title bars.
    pub title_height: i32,
    /// Width of scrollbars.
    pub scrollbar_size: i32,
    /// Size of slider and scrollbar thumbs.
    pub thumb_size: i32,
    /// Width of the zone a splitter handle reacts in.
    pub splitter_size: i32,
    /// Size of the resize grip of floating panels.
    pub grip_size: i32,
    /// Stroke width for outlines.
    pub line_width: f32,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text alignment for buttons and labels.
    pub text_align: TextAlign,
    /// Text color.
    pub text_color: Color,
    /// Outline color; transparent disables outlines.
    pub border_color: Color,
    /// Panel body color.
    pub panel_color: Color,
    /// Title bar color.
    pub title_color: Color,
    /// Title text color.
    pub title_text_color: Color,
    /// Scrollbar track color.
    pub scroll_base_color: Color,
    /// Scrollbar thumb color.
    pub scroll_thumb_color: Color,
    /// Button colors.
    pub button: WidgetColors,
    /// Check box colors.
    pub checkbox: WidgetColors,
    /// Slider and drag handle colors.
    pub slider: WidgetColors,
    /// Text input colors.
    pub text_input: WidgetColors,
    /// Dropdown header and item colors.
    pub dropdown: WidgetColors,
    /// Panel tab colors.
    pub tab: WidgetColors,
    /// Splitter handle colors.
    pub splitter: WidgetColors,
    /// Decoration of buttons, text inputs, dropdowns and tabs.
    pub frame_pen: Pen,
    /// Decoration of check boxes.
    pub checkbox_pen: Pen,
    /// Decoration of sliders.
    pub slider_pen: Pen,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: 4,
            row_height: 24,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            splitter_size: 6,
            grip_size: 12,
            line_width: 1.0,
            font_size: 14.0,
            text_align: TextAlign::Left,
            text_color: color(230, 230, 230, 255),
            border_color: color(25, 25, 25, 255),
            panel_color: color(50, 50, 50, 255),
            title_color: color(25, 25, 25, 255),
            title_text_color: color(240, 240, 240, 255),
            scroll_base_color: color(43, 43, 43, 255),
            scroll_thumb_color: color(30, 30, 30, 255),
            button: WidgetColors::grey(75),
            checkbox: WidgetColors::grey(30),
            slider: WidgetColors::grey(75),
            text_input: WidgetColors::grey(30),
            dropdown: WidgetColors::grey(60),
            tab: WidgetColors::grey(40),
            splitter: WidgetColors::grey(35),
            frame_pen,
            checkbox_pen,
            slider_pen,
        }
    }
}

macro_rules! style_vars {
    ($($(#[$doc:meta])* $var:ident($ty:ty) => $field:ident,)*) => {
        #[derive(Copy, Clone, Debug)]
        /// A single overridable style entry together with its value.
        pub enum StyleVar {
            $($(#[$doc])* $var($ty),)*
        }

        impl Style {
            /// Installs `var` and returns the entry it replaced.
            pub fn swap(&mut self, var: StyleVar) -> StyleVar {
                match var {
                    $(StyleVar::$var(value) => StyleVar::$var(std::mem::replace(&mut self.$field, value)),)*
                }
            }
        }
    };
}

style_vars! {
    /// [`Style::padding`].
    Padding(i32) => padding,
    /// [`Style::row_height`].
    RowHeight(i32) => row_height,
    /// [`Style::title_height`].
    TitleHeight(i32) => title_height,
    /// [`Style::scrollbar_size`].
    ScrollbarSize(i32) => scrollbar_size,
    /// [`Style::thumb_size`].
    ThumbSize(i32) => thumb_size,
    /// [`Style::splitter_size`].
    SplitterSize(i32) => splitter_size,
    /// [`Style::grip_size`].
    GripSize(i32) => grip_size,
    /// [`Style::line_width`].
    LineWidth(f32) => line_width,
    /// [`Style::font_size`].
    FontSize(f32) => font_size,
    /// [`Style::text_align`].
    Align(TextAlign) => text_align,
    /// [`Style::text_color`].
    TextColor(Color) => text_color,
    /// [`Style::border_color`].
    BorderColor(Color) => border_color,
    /// [`Style::panel_color`].
    PanelColor(Color) => panel_color,
    /// [`Style::title_color`].
    TitleColor(Color) => title_color,
    /// [`Style::title_text_color`].
    TitleTextColor(Color) => title_text_color,
    /// [`Style::scroll_base_color`].
    ScrollBaseColor(Color) => scroll_base_color,
    /// [`Style::scroll_thumb_color`].
    ScrollThumbColor(Color) => scroll_thumb_color,
    /// [`Style::button`].
    ButtonColors(WidgetColors) => button,
    /// [`Style::checkbox`].
    CheckboxColors(WidgetColors) => checkbox,
    /// [`Style::slider`].
    SliderColors(WidgetColors) => slider,
    /// [`Style::text_input`].
    TextInputColors(WidgetColors) => text_input,
    /// [`Style::dropdown`].
    DropdownColors(WidgetColors) => dropdown,
    /// [`Style::tab`].
    TabColors(WidgetColors) => tab,
    /// [`Style::splitter`].
    SplitterColors(WidgetColors) => splitter,
    /// [`Style::frame_pen`].
    FramePen(Pen) => frame_pen,
    /// [`Style::checkbox_pen`].
    CheckboxPen(Pen) => checkbox_pen,
    /// [`Style::slider_pen`].
    SliderPen(Pen) => slider_pen,
}

#[derive(Clone, Debug)]
/// Saved style entries. Each push swaps a new value into the [`Style`] and keeps the old one; each pop swaps it back.
pub struct StyleStack {
    saved: Vec<StyleVar>,
    capacity: usize,
}

impl StyleStack {
    /// Creates an empty stack holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self { Self { saved: Vec::with_capacity(capacity), capacity } }

    /// Returns the number of entries pushed.
    pub fn depth(&self) -> usize { self.saved.len() }

    /// Overrides one style entry until the matching [`StyleStack::pop`].
    pub fn push(&mut self, style: &mut Style, var: StyleVar) -> UiResult<()> {
        if self.saved.len() >= self.capacity {
            return Err(UiError::StyleStackFull(self.capacity).logged());
        }
        self.saved.push(style.swap(var));
        Ok(())
    }

    /// Restores the entry replaced by the most recent push.
    pub fn pop(&mut self, style: &mut Style) -> UiResult<()> {
        match self.saved.pop() {
            Some(var) => {
                style.swap(var);
                Ok(())
            }
            None => Err(UiError::StyleStackEmpty.logged()),
        }
    }

    /// Pops entries until the stack is `depth` deep.
    pub(crate) fn unwind(&mut self, style: &mut Style, depth: usize) {
        while self.saved.len() > depth {
            let _ = self.pop(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_pen(draw: &mut DrawList, args: &PenArgs<'_>) { let _ = draw.fill_rect(args.rect, color(0, 0, 255, 255)); }

    #[test]
    fn push_pop_restores_every_entry() {
        let mut style = Style::default();
        let before = format!("{:?}", style);
        let mut stack = StyleStack::new(16);
        stack.push(&mut style, StyleVar::Padding(11)).unwrap();
        stack.push(&mut style, StyleVar::Padding(12)).unwrap();
        stack.push(&mut style, StyleVar::TextColor(color(1, 2, 3, 4))).unwrap();
        stack.push(&mut style, StyleVar::FramePen(blue_pen)).unwrap();
        assert_eq!(style.padding, 12);
        assert_eq!(style.text_color, color(1, 2, 3, 4));
        for _ in 0..4 {
            stack.pop(&mut style).unwrap();
        }
        assert_eq!(format!("{:?}", style), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn full_stack_rejects_push() {
        let mut style = Style::default();
        let mut stack = StyleStack::new(1);
        stack.push(&mut style, StyleVar::Padding(1)).unwrap();
        assert_eq!(stack.push(&mut style, StyleVar::Padding(2)), Err(UiError::StyleStackFull(1)));
        assert_eq!(style.padding, 1);
    }

    #[test]
    fn pop_on_empty_is_an_error_and_a_no_op() {
        let mut style = Style::default();
        let mut stack = StyleStack::new(4);
        assert_eq!(stack.pop(&mut style), Err(UiError::StyleStackEmpty));
        assert_eq!(style.padding, Style::default().padding);
    }

    #[test]
    fn widget_colors_pick_by_state() {
        let colors = Style::default().button;
        assert_eq!(colors.pick(RenderState::Hot), colors.hot);
        assert_eq!(colors.pick(RenderState::Disabled), colors.disabled);
    }
}
