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
#![deny(missing_docs)]
//! `splitgrid` is an immediate-mode GUI core. It owns widget identity and the hot/active/focus
//! interaction state machine, a scoped style stack, a grid layout engine nested inside dockable
//! split panels, and a draw list that groups draw calls into scissor regions for a host renderer.
//!
//! The host feeds input through [`Context::input_mut`], calls [`Context::frame`] once per frame,
//! declares panels and widgets inside it, then hands the finished [`DrawList`] to a [`Renderer`].

mod config;
mod context;
mod draw_context;
mod draw_list;
mod error;
mod font;
mod id;
mod input;
mod interaction;
mod layout;
mod panel;
mod renderer;
mod scrollbar;
mod split;
mod style;
mod triangulate;
mod widgets;

#[cfg(test)]
mod test_support;

pub use config::{Capacities, RepeatConfig};
pub use context::Context;
pub use draw_list::{BlendMode, DrawCall, DrawList, FrameStats, Primitive, ScissorRegion, TextureId, Vertex};
pub use error::{UiError, UiResult};
pub use font::{FontMetrics, FontProvider, GlyphQuad};
pub use id::{Scope, WidgetId};
pub use input::{FrameInput, Input, Keys, MouseButton};
pub use interaction::{ControlState, Interaction};
pub use layout::{Direction, resolve_strip};
pub use panel::{Panel, PanelId, PanelOption, PanelState};
pub use renderer::Renderer;
pub use rs_math3d::*;
pub use split::{SplitDir, SplitId, SplitNode, SplitSize, SplitTree};
pub use style::{Pen, PenArgs, RenderState, Style, StyleStack, StyleVar, TextAlign, WidgetColors};
pub use triangulate::{is_convex, polygon_area, triangulate};

use bitflags::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Result bits returned by widgets to describe what happened during the frame.
    pub struct ResourceState : u32 {
        /// The widget is being interacted with.
        const ACTIVE = 4;
        /// The widget committed a value (button click, text input confirmation).
        const SUBMIT = 2;
        /// The widget changed the value it edits.
        const CHANGE = 1;
        /// Nothing happened.
        const NONE = 0;
    }
}

impl ResourceState {
    /// Returns `true` if the state contains [`ResourceState::CHANGE`].
    pub fn is_changed(&self) -> bool { self.intersects(Self::CHANGE) }
    /// Returns `true` if the state contains [`ResourceState::SUBMIT`].
    pub fn is_submitted(&self) -> bool { self.intersects(Self::SUBMIT) }
    /// Returns `true` if the state contains [`ResourceState::ACTIVE`].
    pub fn is_active(&self) -> bool { self.intersects(Self::ACTIVE) }
    /// Returns `true` if no flags are set.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Per-widget options that change how a control is drawn and how it reacts to input.
    pub struct WidgetOption : u32 {
        /// The widget is drawn greyed out and never becomes hot, active or focused.
        const DISABLED = 8;
        /// The widget is skipped by keyboard navigation.
        const NO_FOCUS = 4;
        /// Text is right aligned inside the widget.
        const ALIGN_RIGHT = 2;
        /// Text is centered inside the widget.
        const ALIGN_CENTER = 1;
        /// No special options.
        const NONE = 0;
    }
}

impl WidgetOption {
    /// Returns `true` if the widget ignores input.
    pub fn is_disabled(&self) -> bool { self.intersects(Self::DISABLED) }
    /// Returns `true` if the widget can take keyboard focus.
    pub fn is_focusable(&self) -> bool { !self.intersects(Self::DISABLED | Self::NO_FOCUS) }
    /// Returns `true` if text should be right aligned.
    pub fn is_aligned_right(&self) -> bool { self.intersects(Self::ALIGN_RIGHT) }
    /// Returns `true` if text should be centered.
    pub fn is_aligned_center(&self) -> bool { self.intersects(Self::ALIGN_CENTER) }
    /// Returns `true` if no flags are set.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Converts the color into the vertex color format.
    pub fn to_color4b(self) -> Color4b { color4b(self.r, self.g, self.b, self.a) }

    /// Returns `true` if the color is fully transparent.
    pub fn is_transparent(&self) -> bool { self.a == 0 }
}

/// Floating-point type used by widgets and layout calculations.
pub type Real = f32;

pub(crate) static UNCLIPPED_RECT: Recti = Recti {
    x: 0,
    y: 0,
    width: i32::MAX,
    height: i32::MAX,
};

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Vec2f`].
pub fn vec2f(x: f32, y: f32) -> Vec2f { Vec2f { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Expands (or shrinks) a rectangle uniformly on all sides.
pub fn expand_rect(r: Recti, n: i32) -> Recti { rect(r.x - n, r.y - n, r.width + n * 2, r.height + n * 2) }

/// Returns `true` if the point lies inside the rectangle (right and bottom edges excluded).
pub fn rect_contains(r: &Recti, p: Vec2i) -> bool { p.x >= r.x && p.y >= r.y && p.x < r.x + r.width && p.y < r.y + r.height }

/// Returns the overlap of two rectangles, or an empty rectangle at `a`'s origin when they are disjoint.
pub fn intersect_rect(a: &Recti, b: &Recti) -> Recti {
    let x0 = a.x.max(b.x);
    let y0 = a.y.max(b.y);
    let x1 = (a.x as i64 + a.width as i64).min(b.x as i64 + b.width as i64);
    let y1 = (a.y as i64 + a.height as i64).min(b.y as i64 + b.height as i64);
    if x1 <= x0 as i64 || y1 <= y0 as i64 {
        return rect(x0, y0, 0, 0);
    }
    rect(x0, y0, (x1 - x0 as i64) as i32, (y1 - y0 as i64) as i32)
}
