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
//! Per-frame draw list: vertices, draw calls and the scissor regions that group them.
//!
//! Every draw call lands in the scissor region that is open when it is recorded. Pushing or
//! popping a mask closes the open region and opens a new one, so a region always covers a
//! contiguous run of draw calls under a single clip rectangle. Regions that end up empty are
//! dropped. [`DrawList::finish`] fixes the order regions are handed to the renderer in.

use crate::config::Capacities;
use crate::*;
use std::ops::Range;

#[derive(Default, Copy, Clone)]
#[repr(C)]
/// Vertex submitted by the UI.
pub struct Vertex {
    pos: Vec2f,
    tex: Vec2f,
    color: Color4b,
}

impl Vertex {
    /// Creates a vertex with the provided position, texture coordinate, and color.
    pub fn new(pos: Vec2f, tex: Vec2f, color: Color4b) -> Self { Self { pos, tex, color } }

    /// Returns the position of the vertex in screen space.
    pub fn position(&self) -> Vec2f { self.pos }

    /// Returns the texture coordinates associated with the vertex.
    pub fn tex_coord(&self) -> Vec2f { self.tex }

    /// Returns the vertex color.
    pub fn color(&self) -> Color4b { self.color }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle referencing a renderer-owned texture.
pub struct TextureId(u32);

impl TextureId {
    /// Wraps a renderer texture handle.
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw numeric identifier stored inside the handle.
    pub fn raw(self) -> u32 { self.0 }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// How the vertices of a draw call are assembled.
pub enum Primitive {
    /// Independent segments, two vertices each.
    Lines,
    /// Connected segments.
    LineStrip,
    /// Independent triangles, three vertices each.
    Triangles,
    /// Triangles sharing the first vertex.
    TriangleFan,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Blending applied to a draw call.
pub enum BlendMode {
    /// Source-over alpha blending.
    #[default]
    Alpha,
    /// Source added to destination.
    Additive,
    /// Source replaces destination.
    Opaque,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A contiguous run of vertices drawn with one primitive, texture and blend mode.
pub struct DrawCall {
    /// Vertex assembly.
    pub primitive: Primitive,
    /// Index of the first vertex in [`DrawList::vertices`].
    pub first_vertex: usize,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Texture sampled by the call, if any.
    pub texture: Option<TextureId>,
    /// Blend mode.
    pub blend: BlendMode,
}

impl DrawCall {
    /// Returns the vertex range of the call.
    pub fn vertex_range(&self) -> Range<usize> { self.first_vertex..self.first_vertex + self.vertex_count }
}

#[derive(Clone, Debug)]
/// A clip rectangle and the draw calls recorded under it.
pub struct ScissorRegion {
    rect: Recti,
    calls: Range<usize>,
    layer: usize,
    overlay: bool,
}

impl ScissorRegion {
    /// Returns the clip rectangle.
    pub fn rect(&self) -> Recti { self.rect }
    /// Returns the range of draw calls in [`DrawList::draw_calls`].
    pub fn calls(&self) -> Range<usize> { self.calls.clone() }
    /// Returns `true` for the region of a floating overlay.
    pub fn is_overlay(&self) -> bool { self.overlay }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Counters describing a finished draw list.
pub struct FrameStats {
    /// Vertices recorded.
    pub vertices: usize,
    /// Draw calls recorded.
    pub draw_calls: usize,
    /// Non-empty scissor regions.
    pub regions: usize,
    /// Operations rejected for lack of capacity.
    pub dropped: usize,
}

#[derive(Copy, Clone, Debug)]
struct Layer {
    priority: i32,
    overlay: bool,
}

#[derive(Copy, Clone, Debug)]
struct Mask {
    rect: Recti,
    layer: usize,
}

#[derive(Copy, Clone, Debug)]
struct OpenRegion {
    rect: Recti,
    layer: usize,
    first_call: usize,
}

/// Priority of the layer draws land in when no mask was pushed. Highest priority is drawn first.
const ROOT_PRIORITY: i32 = i32::MAX;

/// Vertices, draw calls and scissor regions of one frame. Buffers keep their allocation across frames.
pub struct DrawList {
    vertices: Vec<Vertex>,
    calls: Vec<DrawCall>,
    regions: Vec<ScissorRegion>,
    order: Vec<usize>,
    layers: Vec<Layer>,
    masks: Vec<Mask>,
    interrupted: Vec<Mask>,
    in_overlay: bool,
    open: Option<OpenRegion>,
    root_layer: Option<usize>,
    screen: Recti,
    max_vertices: usize,
    max_calls: usize,
    max_regions: usize,
    dropped: usize,
    scratch: Vec<Vertex>,
    indices: Vec<u32>,
}

impl DrawList {
    /// Creates an empty list with buffers sized by `capacities`.
    pub fn new(capacities: &Capacities) -> Self {
        Self {
            vertices: Vec::with_capacity(capacities.vertices),
            calls: Vec::with_capacity(capacities.draw_calls),
            regions: Vec::with_capacity(capacities.scissor_regions),
            order: Vec::with_capacity(capacities.scissor_regions),
            layers: Vec::new(),
            masks: Vec::new(),
            interrupted: Vec::new(),
            in_overlay: false,
            open: None,
            root_layer: None,
            screen: UNCLIPPED_RECT,
            max_vertices: capacities.vertices,
            max_calls: capacities.draw_calls,
            max_regions: capacities.scissor_regions,
            dropped: 0,
            scratch: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Empties the list for a new frame drawn onto `screen`.
    pub fn clear(&mut self, screen: Recti) {
        self.vertices.clear();
        self.calls.clear();
        self.regions.clear();
        self.order.clear();
        self.layers.clear();
        self.masks.clear();
        self.interrupted.clear();
        self.in_overlay = false;
        self.open = None;
        self.root_layer = None;
        self.screen = screen;
        self.dropped = 0;
    }

    /// Returns the recorded vertices.
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Returns the recorded draw calls.
    pub fn draw_calls(&self) -> &[DrawCall] { &self.calls }

    /// Returns the scissor regions in the order they must be rendered. Valid after [`DrawList::finish`].
    pub fn regions(&self) -> impl Iterator<Item = &ScissorRegion> + '_ { self.order.iter().map(move |&i| &self.regions[i]) }

    /// Returns the current clip rectangle.
    pub fn clip(&self) -> Recti { self.masks.last().map(|m| m.rect).unwrap_or(self.screen) }

    /// Returns the screen rectangle the list was cleared with.
    pub fn screen(&self) -> Recti { self.screen }

    /// Returns the number of masks currently pushed.
    pub fn mask_depth(&self) -> usize { self.masks.len() }

    /// Returns the counters of the list.
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            vertices: self.vertices.len(),
            draw_calls: self.calls.len(),
            regions: self.regions.len(),
            dropped: self.dropped,
        }
    }

    fn reject(&mut self, err: UiError) -> UiResult<()> {
        if self.dropped == 0 {
            tracing::error!("{}", err);
        }
        self.dropped += 1;
        Err(err)
    }

    fn close_region(&mut self) {
        if let Some(open) = self.open.take() {
            if self.calls.len() > open.first_call {
                self.regions.push(ScissorRegion {
                    rect: open.rect,
                    calls: open.first_call..self.calls.len(),
                    layer: open.layer,
                    overlay: self.layers[open.layer].overlay,
                });
            }
        }
    }

    fn open_region(&mut self, rect: Recti, layer: usize) -> UiResult<()> {
        self.close_region();
        if self.regions.len() >= self.max_regions {
            return self.reject(UiError::ScissorCapacity(self.max_regions));
        }
        self.open = Some(OpenRegion { rect, layer, first_call: self.calls.len() });
        Ok(())
    }

    fn new_layer(&mut self, priority: i32, overlay: bool) -> usize {
        self.layers.push(Layer { priority, overlay });
        self.layers.len() - 1
    }

    /// Starts a new top-level layer clipped to `rect`. Layers with a lower priority are drawn on top.
    pub fn push_layer(&mut self, rect: Recti, priority: i32) -> UiResult<()> {
        let layer = self.new_layer(priority, false);
        let rect = intersect_rect(&rect, &self.screen);
        self.masks.push(Mask { rect, layer });
        self.open_region(rect, layer)
    }

    /// Narrows the clip to `rect` intersected with the current clip.
    pub fn push_mask(&mut self, rect: Recti) -> UiResult<()> {
        let Some(top) = self.masks.last().copied() else {
            return self.push_layer(rect, 0);
        };
        let rect = intersect_rect(&rect, &top.rect);
        self.masks.push(Mask { rect, layer: top.layer });
        self.open_region(rect, top.layer)
    }

    /// Restores the clip that was in effect before the matching push.
    pub fn pop_mask(&mut self) -> UiResult<()> {
        if self.masks.pop().is_none() {
            return Err(UiError::MaskUnderflow.logged());
        }
        self.close_region();
        match self.masks.last().copied() {
            Some(top) => self.open_region(top.rect, top.layer),
            None => Ok(()),
        }
    }

    /// Interrupts the current mask stack and starts drawing into the floating overlay region.
    pub fn begin_overlay(&mut self, rect: Recti) -> UiResult<()> {
        if self.in_overlay {
            tracing::warn!("overlay begun twice, closing the previous one");
            self.end_overlay();
        }
        self.interrupted = std::mem::take(&mut self.masks);
        self.in_overlay = true;
        let layer = self.new_layer(i32::MIN, true);
        let rect = intersect_rect(&rect, &self.screen);
        self.masks.push(Mask { rect, layer });
        self.open_region(rect, layer)
    }

    /// Leaves the overlay region and resumes the interrupted clip.
    pub fn end_overlay(&mut self) {
        if !self.in_overlay {
            return;
        }
        self.close_region();
        self.in_overlay = false;
        self.masks = std::mem::take(&mut self.interrupted);
        if let Some(top) = self.masks.last().copied() {
            let _ = self.open_region(top.rect, top.layer);
        }
    }

    /// Returns `true` between [`DrawList::begin_overlay`] and [`DrawList::end_overlay`].
    pub fn in_overlay(&self) -> bool { self.in_overlay }

    /// Drops every overlay region closed so far this frame.
    pub fn discard_overlays(&mut self) { self.regions.retain(|r| !r.overlay); }

    /// Closes the open region and orders regions for rendering: the root layer first, then layers
    /// from the highest priority to the lowest, layers of equal priority in reverse push order, and
    /// overlays last. Regions of the same layer keep the order they were recorded in.
    pub fn finish(&mut self) {
        if self.in_overlay {
            tracing::warn!("overlay still open at the end of the frame");
            self.end_overlay();
        }
        if !self.masks.is_empty() {
            tracing::warn!("{} masks still pushed at the end of the frame", self.masks.len());
            self.masks.clear();
        }
        self.close_region();
        let regions = &self.regions;
        let layers = &self.layers;
        self.order.clear();
        self.order.extend(0..regions.len());
        self.order.sort_by(|&a, &b| {
            let (ra, rb) = (&regions[a], &regions[b]);
            let (la, lb) = (&layers[ra.layer], &layers[rb.layer]);
            la.overlay
                .cmp(&lb.overlay)
                .then(lb.priority.cmp(&la.priority))
                .then(rb.layer.cmp(&ra.layer))
                .then(a.cmp(&b))
        });
    }

    fn ensure_open(&mut self) -> bool {
        if self.open.is_some() {
            return true;
        }
        if self.masks.is_empty() {
            let layer = match self.root_layer {
                Some(layer) => layer,
                None => {
                    let layer = self.new_layer(ROOT_PRIORITY, false);
                    self.root_layer = Some(layer);
                    layer
                }
            };
            return self.open_region(self.screen, layer).is_ok();
        }
        false
    }

    fn emit(&mut self, primitive: Primitive, texture: Option<TextureId>, blend: BlendMode, vertices: &[Vertex]) -> UiResult<()> {
        if vertices.is_empty() {
            return Ok(());
        }
        if !self.ensure_open() {
            self.dropped += 1;
            return Err(UiError::ScissorCapacity(self.max_regions));
        }
        if self.vertices.len() + vertices.len() > self.max_vertices {
            return self.reject(UiError::VertexCapacity(self.max_vertices));
        }
        if self.calls.len() >= self.max_calls {
            return self.reject(UiError::DrawCallCapacity(self.max_calls));
        }
        let first_vertex = self.vertices.len();
        self.vertices.extend_from_slice(vertices);
        self.calls.push(DrawCall { primitive, first_vertex, vertex_count: vertices.len(), texture, blend });
        Ok(())
    }

    fn emit_scratch(&mut self, primitive: Primitive, texture: Option<TextureId>, blend: BlendMode) -> UiResult<()> {
        let scratch = std::mem::take(&mut self.scratch);
        let res = self.emit(primitive, texture, blend, &scratch);
        self.scratch = scratch;
        res
    }

    fn solid(pos: Vec2f, color: Color) -> Vertex { Vertex::new(pos, Vec2f::default(), color.to_color4b()) }

    fn culled(&self, r: &Recti) -> bool { intersect_rect(r, &self.clip()).width == 0 }

    /// Draws a one pixel line segment.
    pub fn line(&mut self, a: Vec2f, b: Vec2f, color: Color) -> UiResult<()> {
        let v = [Self::solid(a, color), Self::solid(b, color)];
        self.emit(Primitive::Lines, None, BlendMode::Alpha, &v)
    }

    /// Draws connected segments through `points`, returning to the first point when `closed`.
    pub fn polyline(&mut self, points: &[Vec2f], closed: bool, color: Color) -> UiResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        self.scratch.clear();
        self.scratch.extend(points.iter().map(|p| Self::solid(*p, color)));
        if closed {
            self.scratch.push(Self::solid(points[0], color));
        }
        self.emit_scratch(Primitive::LineStrip, None, BlendMode::Alpha)
    }

    /// Fills a rectangle. Rectangles entirely outside the clip are skipped.
    pub fn fill_rect(&mut self, r: Recti, color: Color) -> UiResult<()> {
        if r.width <= 0 || r.height <= 0 || self.culled(&r) {
            return Ok(());
        }
        let (x0, y0) = (r.x as f32, r.y as f32);
        let (x1, y1) = (x0 + r.width as f32, y0 + r.height as f32);
        let v0 = Self::solid(vec2f(x0, y0), color);
        let v1 = Self::solid(vec2f(x1, y0), color);
        let v2 = Self::solid(vec2f(x1, y1), color);
        let v3 = Self::solid(vec2f(x0, y1), color);
        self.emit(Primitive::Triangles, None, BlendMode::Alpha, &[v0, v1, v2, v0, v2, v3])
    }

    /// Outlines a rectangle along its inner pixel centers.
    pub fn stroke_rect(&mut self, r: Recti, color: Color) -> UiResult<()> {
        if r.width <= 0 || r.height <= 0 || self.culled(&r) {
            return Ok(());
        }
        let (x0, y0) = (r.x as f32 + 0.5, r.y as f32 + 0.5);
        let (x1, y1) = ((r.x + r.width) as f32 - 0.5, (r.y + r.height) as f32 - 0.5);
        self.polyline(&[vec2f(x0, y0), vec2f(x1, y0), vec2f(x1, y1), vec2f(x0, y1)], true, color)
    }

    /// Fills a polygon. Convex outlines become a fan, anything else is ear clipped into a triangle list.
    pub fn fill_polygon(&mut self, points: &[Vec2f], color: Color) -> UiResult<()> {
        if points.len() < 3 {
            return Err(UiError::DegeneratePolygon(points.len()).logged());
        }
        self.scratch.clear();
        if is_convex(points) {
            self.scratch.extend(points.iter().map(|p| Self::solid(*p, color)));
            return self.emit_scratch(Primitive::TriangleFan, None, BlendMode::Alpha);
        }
        let mut indices = std::mem::take(&mut self.indices);
        indices.clear();
        let res = triangulate(points, &mut indices);
        if res.is_ok() {
            self.scratch.extend(indices.iter().map(|&i| Self::solid(points[i as usize], color)));
        }
        self.indices = indices;
        res?;
        self.emit_scratch(Primitive::Triangles, None, BlendMode::Alpha)
    }

    /// Outlines a closed polygon.
    pub fn stroke_polygon(&mut self, points: &[Vec2f], color: Color) -> UiResult<()> { self.polyline(points, true, color) }

    /// Draws a textured quad spanning `min..max` sampling `uv_min..uv_max`.
    #[allow(clippy::too_many_arguments)]
    pub fn textured_quad(&mut self, min: Vec2f, max: Vec2f, uv_min: Vec2f, uv_max: Vec2f, texture: TextureId, color: Color, blend: BlendMode) -> UiResult<()> {
        let bounds = rect(min.x.floor() as i32, min.y.floor() as i32, (max.x - min.x).ceil() as i32 + 1, (max.y - min.y).ceil() as i32 + 1);
        if self.culled(&bounds) {
            return Ok(());
        }
        let c = color.to_color4b();
        let v0 = Vertex::new(min, uv_min, c);
        let v1 = Vertex::new(vec2f(max.x, min.y), vec2f(uv_max.x, uv_min.y), c);
        let v2 = Vertex::new(max, uv_max, c);
        let v3 = Vertex::new(vec2f(min.x, max.y), vec2f(uv_min.x, uv_max.y), c);
        self.emit(Primitive::Triangles, Some(texture), blend, &[v0, v1, v2, v0, v2, v3])
    }

    /// Draws one glyph produced by a [`FontProvider`].
    pub fn glyph_quad(&mut self, glyph: &GlyphQuad, color: Color) -> UiResult<()> {
        self.textured_quad(glyph.min, glyph.max, glyph.uv_min, glyph.uv_max, glyph.texture, color, BlendMode::Alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    fn list() -> DrawList {
        let mut list = DrawList::new(&Capacities::default());
        list.clear(rect(0, 0, 800, 600));
        list
    }

    fn region_rects(list: &DrawList) -> Vec<(i32, i32, i32, i32)> { list.regions().map(|r| (r.rect().x, r.rect().y, r.rect().width, r.rect().height)).collect() }

    #[test]
    fn pop_resumes_the_interrupted_clip_and_drops_empty_regions() {
        let mut list = list();
        list.push_layer(rect(0, 0, 100, 100), 0).unwrap();
        list.fill_rect(rect(0, 0, 10, 10), WHITE).unwrap();
        list.push_mask(rect(50, 50, 100, 100)).unwrap();
        list.pop_mask().unwrap();
        list.fill_rect(rect(20, 20, 10, 10), WHITE).unwrap();
        list.pop_mask().unwrap();
        list.finish();
        assert_eq!(region_rects(&list), vec![(0, 0, 100, 100), (0, 0, 100, 100)]);
        assert_eq!(list.draw_calls().len(), 2);
    }

    #[test]
    fn nested_masks_intersect() {
        let mut list = list();
        list.push_layer(rect(0, 0, 100, 100), 0).unwrap();
        list.push_mask(rect(50, 50, 100, 100)).unwrap();
        list.fill_rect(rect(60, 60, 10, 10), WHITE).unwrap();
        list.pop_mask().unwrap();
        list.pop_mask().unwrap();
        list.finish();
        assert_eq!(region_rects(&list), vec![(50, 50, 50, 50)]);
    }

    #[test]
    fn regions_are_ordered_back_to_front() {
        let mut list = list();
        list.fill_rect(rect(0, 0, 5, 5), WHITE).unwrap();
        list.push_layer(rect(0, 0, 10, 10), 0).unwrap();
        list.fill_rect(rect(0, 0, 5, 5), WHITE).unwrap();
        list.begin_overlay(rect(1, 1, 3, 3)).unwrap();
        list.fill_rect(rect(1, 1, 2, 2), WHITE).unwrap();
        list.end_overlay();
        list.fill_rect(rect(5, 5, 5, 5), WHITE).unwrap();
        list.pop_mask().unwrap();
        list.push_layer(rect(0, 0, 20, 20), 1).unwrap();
        list.fill_rect(rect(0, 0, 5, 5), WHITE).unwrap();
        list.pop_mask().unwrap();
        list.push_layer(rect(0, 0, 30, 30), 0).unwrap();
        list.fill_rect(rect(0, 0, 5, 5), WHITE).unwrap();
        list.pop_mask().unwrap();
        list.finish();
        assert_eq!(
            region_rects(&list),
            vec![(0, 0, 800, 600), (0, 0, 20, 20), (0, 0, 30, 30), (0, 0, 10, 10), (0, 0, 10, 10), (1, 1, 3, 3)]
        );
        assert_eq!(list.regions().filter(|r| r.is_overlay()).count(), 1);
    }

    #[test]
    fn every_primitive_gets_its_own_draw_call() {
        let mut list = list();
        for i in 0..10 {
            list.fill_rect(rect(i * 10, 0, 5, 5), WHITE).unwrap();
        }
        list.finish();
        let calls = list.draw_calls();
        assert_eq!(calls.len(), 10);
        assert!(calls.iter().all(|c| c.vertex_count == 6));
        assert_eq!(calls[9].first_vertex, 54);
        assert_eq!(list.regions().next().map(|r| r.calls()), Some(0..10));
    }

    #[test]
    fn fully_clipped_rects_are_skipped() {
        let mut list = list();
        list.push_layer(rect(0, 0, 10, 10), 0).unwrap();
        list.fill_rect(rect(50, 50, 10, 10), WHITE).unwrap();
        list.pop_mask().unwrap();
        list.finish();
        assert_eq!(list.stats().vertices, 0);
        assert_eq!(list.regions().count(), 0);
    }

    #[test]
    fn capacities_reject_and_count() {
        let caps = Capacities { vertices: 8, draw_calls: 4, scissor_regions: 1, ..Capacities::default() };
        let mut list = DrawList::new(&caps);
        list.clear(rect(0, 0, 100, 100));
        list.fill_rect(rect(0, 0, 5, 5), WHITE).unwrap();
        assert_eq!(list.fill_rect(rect(0, 0, 5, 5), WHITE), Err(UiError::VertexCapacity(8)));
        list.finish();
        assert_eq!(list.stats().vertices, 6);
        assert_eq!(list.stats().dropped, 1);

        list.clear(rect(0, 0, 100, 100));
        list.push_layer(rect(0, 0, 50, 50), 0).unwrap();
        list.line(vec2f(0.0, 0.0), vec2f(1.0, 1.0), WHITE).unwrap();
        assert_eq!(list.push_mask(rect(0, 0, 10, 10)), Err(UiError::ScissorCapacity(1)));
        assert_eq!(list.mask_depth(), 2);
        assert!(list.line(vec2f(0.0, 0.0), vec2f(1.0, 1.0), WHITE).is_err());
    }

    #[test]
    fn pop_on_empty_is_an_error() {
        let mut list = list();
        assert_eq!(list.pop_mask(), Err(UiError::MaskUnderflow));
    }

    #[test]
    fn concave_fill_becomes_a_triangle_list() {
        let mut list = list();
        let shape = [vec2f(0.0, 0.0), vec2f(20.0, 0.0), vec2f(20.0, 10.0), vec2f(10.0, 10.0), vec2f(10.0, 20.0), vec2f(0.0, 20.0)];
        list.fill_polygon(&shape, WHITE).unwrap();
        let square = [vec2f(0.0, 0.0), vec2f(5.0, 0.0), vec2f(5.0, 5.0), vec2f(0.0, 5.0)];
        list.fill_polygon(&square, WHITE).unwrap();
        list.finish();
        let calls = list.draw_calls();
        assert_eq!(calls[0].primitive, Primitive::Triangles);
        assert_eq!(calls[0].vertex_count, 12);
        assert_eq!(calls[1].primitive, Primitive::TriangleFan);
        assert_eq!(calls[1].vertex_count, 4);
    }
}
