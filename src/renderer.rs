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
//! Backend interface.

use crate::*;

/// A graphics backend that consumes a finished [`DrawList`].
///
/// The list calls [`Renderer::begin`] once, then for every scissor region in output order one
/// [`Renderer::set_scissor`] followed by a [`Renderer::draw`] per draw call of the region, and
/// finally [`Renderer::end`].
pub trait Renderer {
    /// Starts a frame on a `width` x `height` target.
    fn begin(&mut self, width: i32, height: i32);
    /// Restricts the following draws to `rect`.
    fn set_scissor(&mut self, rect: Recti);
    /// Draws `vertices` as described by `call`.
    fn draw(&mut self, call: &DrawCall, vertices: &[Vertex]);
    /// Ends the frame.
    fn end(&mut self);
}

impl DrawList {
    /// Submits the finished list to `renderer`.
    pub fn submit<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let screen = self.screen();
        renderer.begin(screen.width, screen.height);
        let (vertices, calls) = (self.vertices(), self.draw_calls());
        for region in self.regions() {
            renderer.set_scissor(region.rect());
            for call in &calls[region.calls()] {
                match vertices.get(call.vertex_range()) {
                    Some(v) => renderer.draw(call, v),
                    None => tracing::error!("draw call references vertices {:?} past the buffer", call.vertex_range()),
                }
            }
        }
        renderer.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingRenderer;

    #[test]
    fn every_region_gets_a_scissor() {
        let mut list = DrawList::new(&Capacities::default());
        list.clear(rect(0, 0, 640, 480));
        list.fill_rect(rect(0, 0, 10, 10), color(255, 0, 0, 255)).unwrap();
        list.push_mask(rect(20, 20, 100, 100)).unwrap();
        list.fill_rect(rect(30, 30, 10, 10), color(0, 255, 0, 255)).unwrap();
        list.line(vec2f(30.0, 30.0), vec2f(60.0, 60.0), color(0, 0, 255, 255)).unwrap();
        list.pop_mask().unwrap();
        list.finish();

        let mut renderer = RecordingRenderer::default();
        list.submit(&mut renderer);
        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.scissors.len(), 2);
        assert_eq!((renderer.scissors[0].width, renderer.scissors[0].height), (640, 480));
        assert_eq!(renderer.scissors[1].x, 20);
        assert_eq!(renderer.calls, 3);
        assert_eq!(renderer.vertices, 6 + 6 + 2);
    }
}
