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
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use crate::{Recti, Vec2i};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScrollAxis {
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    pub(crate) fn of(self, v: Vec2i) -> i32 {
        match self {
            ScrollAxis::Vertical => v.y,
            ScrollAxis::Horizontal => v.x,
        }
    }

    pub(crate) fn len(self, r: Recti) -> i32 {
        match self {
            ScrollAxis::Vertical => r.height,
            ScrollAxis::Horizontal => r.width,
        }
    }

    fn start(self, r: Recti) -> i32 {
        match self {
            ScrollAxis::Vertical => r.y,
            ScrollAxis::Horizontal => r.x,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Scrollbar {
    pub(crate) axis: ScrollAxis,
    pub(crate) base: Recti,
    pub(crate) thumb: Recti,
    pub(crate) max_scroll: i32,
}

/// Shrinks `body` to make room for the scrollbars `content` needs. Returns the view and which bars are shown.
pub(crate) fn fit_scrollbars(body: Recti, content: Vec2i, scrollbar_size: i32) -> (Recti, bool, bool) {
    let mut view = body;
    let mut vertical = content.y > view.height;
    if vertical {
        view.width -= scrollbar_size;
    }
    let horizontal = content.x > view.width;
    if horizontal {
        view.height -= scrollbar_size;
        if !vertical && content.y > view.height {
            vertical = true;
            view.width -= scrollbar_size;
        }
    }
    view.width = view.width.max(0);
    view.height = view.height.max(0);
    (view, vertical, horizontal)
}

pub(crate) fn scrollbar_max_scroll(content_len: i32, view_len: i32) -> i32 { (content_len - view_len).max(0) }

fn scrollbar_base(axis: ScrollAxis, view: Recti, scrollbar_size: i32) -> Recti {
    let mut base = view;
    match axis {
        ScrollAxis::Vertical => {
            base.x = view.x + view.width;
            base.width = scrollbar_size;
        }
        ScrollAxis::Horizontal => {
            base.y = view.y + view.height;
            base.height = scrollbar_size;
        }
    }
    base
}

/// Places the track and thumb of one scrollbar along the edge of `view`.
pub(crate) fn scrollbar(axis: ScrollAxis, view: Recti, content: Vec2i, scroll: Vec2i, scrollbar_size: i32, thumb_size: i32) -> Scrollbar {
    let base = scrollbar_base(axis, view, scrollbar_size);
    let view_len = axis.len(view);
    let content_len = axis.of(content);
    let max_scroll = scrollbar_max_scroll(content_len, view_len);
    let base_len = axis.len(base);
    let mut thumb = base;
    if base_len <= 0 || content_len <= 0 || view_len <= 0 {
        return Scrollbar { axis, base, thumb, max_scroll };
    }

    let thumb_len = (base_len.saturating_mul(view_len) / content_len).max(thumb_size).min(base_len);
    let track_len = base_len - thumb_len;
    let offset = if max_scroll > 0 && track_len > 0 { axis.of(scroll).clamp(0, max_scroll) * track_len / max_scroll } else { 0 };
    match axis {
        ScrollAxis::Vertical => {
            thumb.height = thumb_len;
            thumb.y += offset;
        }
        ScrollAxis::Horizontal => {
            thumb.width = thumb_len;
            thumb.x += offset;
        }
    }
    Scrollbar { axis, base, thumb, max_scroll }
}

impl Scrollbar {
    /// Converts a dragged thumb start position into a scroll offset.
    pub(crate) fn scroll_for_thumb(&self, thumb_start: i32) -> i32 {
        let track_len = self.axis.len(self.base) - self.axis.len(self.thumb);
        if track_len <= 0 || self.max_scroll == 0 {
            return 0;
        }
        let along = (thumb_start - self.axis.start(self.base)).clamp(0, track_len);
        along * self.max_scroll / track_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rect, vec2};

    #[test]
    fn bars_appear_only_when_content_overflows() {
        let body = rect(0, 0, 100, 100);
        assert!(!fit_scrollbars(body, vec2(100, 100), 10).1);
        let (view, v, h) = fit_scrollbars(body, vec2(50, 300), 10);
        assert!(v && !h);
        assert_eq!((view.width, view.height), (90, 100));
        // the horizontal bar steals height, which makes the vertical bar necessary
        let (view, v, h) = fit_scrollbars(body, vec2(200, 95), 10);
        assert!(v && h);
        assert_eq!((view.width, view.height), (90, 90));
    }

    #[test]
    fn thumb_tracks_scroll_and_back() {
        let view = rect(0, 0, 90, 100);
        let bar = scrollbar(ScrollAxis::Vertical, view, vec2(90, 400), vec2(0, 150), 10, 8);
        assert_eq!(bar.max_scroll, 300);
        assert_eq!((bar.base.x, bar.base.width), (90, 10));
        assert_eq!(bar.thumb.height, 25);
        assert_eq!(bar.thumb.y, 37);
        assert_eq!(bar.scroll_for_thumb(75), 300);
        assert_eq!(bar.scroll_for_thumb(-20), 0);
        assert_eq!(bar.scroll_for_thumb(bar.thumb.y), 148);
    }

    #[test]
    fn thumb_respects_minimum_size() {
        let bar = scrollbar(ScrollAxis::Horizontal, rect(0, 0, 100, 50), vec2(100_000, 50), vec2(0, 0), 10, 8);
        assert_eq!(bar.thumb.width, 8);
        assert_eq!(bar.thumb.x, 0);
    }
}
