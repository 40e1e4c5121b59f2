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
//! Grid layout.
//!
//! A panel body is filled with strips. A row strip places its cells left to right, a column strip
//! top to bottom. Each cell size is either fixed (`> 1` pixels), a fraction (`0 < f <= 1`) of the
//! space the fixed cells leave, or `0` to share whatever remains equally. Declaring a strip while
//! another one still has free cells nests the new strip inside the next cell; nested strips must
//! alternate direction. A strip whose cells are all taken is closed automatically, and closing a
//! top-level strip moves the panel cursor below it.

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Direction a strip lays its cells out in.
pub enum Direction {
    /// Cells left to right.
    Row,
    /// Cells top to bottom.
    Column,
}

/// Resolves the cell sizes of a strip of `major` pixels into `out`.
///
/// Fixed cells are rounded to whole pixels. Fractional cells are floored, then the pixels their
/// floors lost against the floored fractional total go back one each to the earliest fractional
/// cells, so fractions adding up to 1 fill what the fixed cells leave. The pixels left after both
/// are split between the `0` cells, with the remainder going one pixel each to the earliest of
/// them.
pub fn resolve_strip(major: i32, cells: &[f32], out: &mut Vec<i32>) {
    out.clear();
    let major = major.max(0);
    let is_fraction = |c: f32| c > 0.0 && c <= 1.0;
    let fixed: i32 = cells.iter().filter(|&&c| c > 1.0).map(|&c| c.round() as i32).sum();
    let after_fixed = (major - fixed).max(0);
    let mut fractional = 0;
    let mut wanted = 0.0f64;
    for &c in cells {
        let size = if c > 1.0 {
            c.round() as i32
        } else if is_fraction(c) {
            let exact = c as f64 * after_fixed as f64;
            wanted += exact;
            exact.floor() as i32
        } else {
            0
        };
        if is_fraction(c) {
            fractional += size;
        }
        out.push(size);
    }

    // float noise must not cost a fraction set that adds up to 1 its last pixel
    let target = ((wanted + 1e-3).floor() as i32).min(after_fixed);
    let mut lost = (target - fractional).max(0);
    for (size, &c) in out.iter_mut().zip(cells) {
        if lost == 0 {
            break;
        }
        if is_fraction(c) {
            *size += 1;
            lost -= 1;
        }
    }
    let used = fixed + fractional.max(target);

    let shares = cells.iter().filter(|&&c| c <= 0.0).count() as i32;
    if shares == 0 {
        return;
    }
    let rest = (major - used).max(0);
    let (base, mut extra) = (rest / shares, rest % shares);
    for (size, &c) in out.iter_mut().zip(cells) {
        if c <= 0.0 {
            *size = base + if extra > 0 { 1 } else { 0 };
            extra = (extra - 1).max(0);
        }
    }
}

#[derive(Clone, Debug)]
struct Strip {
    direction: Direction,
    origin: Vec2i,
    cross: i32,
    sizes: Vec<i32>,
    next: usize,
    offset: i32,
    top_level: bool,
}

impl Strip {
    fn exhausted(&self) -> bool { self.next >= self.sizes.len() }

    fn major(&self) -> i32 { self.sizes.iter().sum() }

    fn extent(&self) -> Vec2i {
        match self.direction {
            Direction::Row => vec2(self.major(), self.cross),
            Direction::Column => vec2(self.cross, self.major()),
        }
    }

    fn take(&mut self) -> Recti {
        let size = self.sizes[self.next];
        let r = match self.direction {
            Direction::Row => rect(self.origin.x + self.offset, self.origin.y, size, self.cross),
            Direction::Column => rect(self.origin.x, self.origin.y + self.offset, self.cross, size),
        };
        self.offset += size;
        self.next += 1;
        r
    }
}

#[derive(Clone, Debug)]
pub(crate) struct LayoutManager {
    body: Recti,
    origin: Vec2i,
    cursor: i32,
    content: Vec2i,
    default_height: i32,
    stack: Vec<Strip>,
    pool: Vec<Vec<i32>>,
    active: bool,
    max_depth: usize,
    max_cells: usize,
}

impl LayoutManager {
    pub(crate) fn new(max_depth: usize, max_cells: usize) -> Self {
        Self {
            body: Recti::default(),
            origin: Vec2i::default(),
            cursor: 0,
            content: Vec2i::default(),
            default_height: 0,
            stack: Vec::with_capacity(max_depth),
            pool: Vec::new(),
            active: false,
            max_depth,
            max_cells,
        }
    }

    /// Starts laying out `body` scrolled by `scroll`.
    pub(crate) fn begin(&mut self, body: Recti, scroll: Vec2i, default_height: i32) {
        self.release_all();
        self.body = body;
        self.origin = vec2(body.x - scroll.x, body.y - scroll.y);
        self.cursor = 0;
        self.content = Vec2i::default();
        self.default_height = default_height;
        self.active = true;
    }

    /// Ends the layout and returns the size the declared strips need.
    pub(crate) fn finish(&mut self) -> Vec2i {
        if !self.stack.is_empty() {
            tracing::debug!("{} strips left with free cells", self.stack.len());
        }
        self.release_all();
        self.active = false;
        self.content
    }

    /// Screen position of the content origin, the body corner shifted by the scroll offset.
    pub(crate) fn origin(&self) -> Vec2i { self.origin }

    fn release_all(&mut self) {
        while let Some(strip) = self.stack.pop() {
            self.pool.push(strip.sizes);
        }
    }

    /// Declares a strip. `major` and `cross` fall back to the enclosing cell or body when `None`.
    pub(crate) fn strip(&mut self, direction: Direction, major: Option<i32>, cross: Option<i32>, cells: &[f32]) -> UiResult<()> {
        if !self.active {
            return Err(UiError::NoGrid.logged());
        }
        if cells.is_empty() {
            return Err(UiError::EmptyStrip.logged());
        }
        if cells.len() > self.max_cells {
            return Err(UiError::TooManyCells { requested: cells.len(), max: self.max_cells }.logged());
        }
        if self.stack.len() >= self.max_depth {
            return Err(UiError::GridTooDeep(self.max_depth).logged());
        }

        let (origin, avail, top_level) = match self.stack.last_mut() {
            Some(parent) if parent.direction == direction => return Err(UiError::SameDirectionNesting.logged()),
            Some(parent) => {
                let cell = parent.take();
                (vec2(cell.x, cell.y), vec2(cell.width, cell.height), false)
            }
            None => {
                let height = if direction == Direction::Row { self.default_height } else { (self.body.height - self.cursor).max(0) };
                (vec2(self.origin.x, self.origin.y + self.cursor), vec2(self.body.width, height), true)
            }
        };

        let (major_avail, cross_avail) = match direction {
            Direction::Row => (avail.x, avail.y),
            Direction::Column => (avail.y, avail.x),
        };
        let major = major.filter(|m| *m > 0).unwrap_or(major_avail);
        let cross = cross.filter(|c| *c > 0).unwrap_or(cross_avail);

        let mut sizes = self.pool.pop().unwrap_or_default();
        resolve_strip(major, cells, &mut sizes);
        let strip = Strip { direction, origin, cross, sizes, next: 0, offset: 0, top_level };
        if top_level {
            let extent = strip.extent();
            self.content.x = self.content.x.max(extent.x);
            self.content.y = self.content.y.max(self.cursor + extent.y);
        }
        self.stack.push(strip);
        Ok(())
    }

    /// Returns the next free cell, opening a full-width row of the default height if no strip is open.
    pub(crate) fn next_cell(&mut self) -> UiResult<Recti> {
        if !self.active {
            return Err(UiError::NoGrid.logged());
        }
        if self.stack.is_empty() {
            self.strip(Direction::Row, None, None, &[0.0])?;
        }
        let r = match self.stack.last_mut() {
            Some(strip) => strip.take(),
            None => return Err(UiError::NoGrid.logged()),
        };
        self.close_exhausted();
        Ok(r)
    }

    /// Abandons the free cells of the innermost strip.
    pub(crate) fn end_strip(&mut self) {
        if let Some(strip) = self.stack.last_mut() {
            strip.next = strip.sizes.len();
        }
        self.close_exhausted();
    }

    fn close_exhausted(&mut self) {
        while self.stack.last().is_some_and(|s| s.exhausted()) {
            if let Some(strip) = self.stack.pop() {
                if strip.top_level {
                    self.cursor += strip.extent().y;
                }
                self.pool.push(strip.sizes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn sizes(major: i32, cells: &[f32]) -> Vec<i32> {
        let mut out = Vec::new();
        resolve_strip(major, cells, &mut out);
        out
    }

    fn r(x: Recti) -> (i32, i32, i32, i32) { (x.x, x.y, x.width, x.height) }

    #[test]
    fn remainder_goes_to_the_earliest_shared_cells() {
        assert_eq!(sizes(100, &[0.0, 0.0, 0.0]), vec![34, 33, 33]);
        assert_eq!(sizes(101, &[0.0, 0.0, 0.0]), vec![34, 34, 33]);
    }

    #[test]
    fn fixed_fraction_and_shared_cells() {
        assert_eq!(sizes(300, &[100.0, 0.5, 0.0]), vec![100, 100, 100]);
        assert_eq!(sizes(300, &[50.0, 0.25]), vec![50, 62]);
        // overflowing fixed cells leave nothing to share
        assert_eq!(sizes(100, &[80.0, 80.0, 0.0]), vec![80, 80, 0]);
    }

    #[test]
    fn fractions_of_one_fill_the_strip() {
        assert_eq!(sizes(101, &[0.5, 0.5]), vec![51, 50]);
        assert_eq!(sizes(100, &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]), vec![34, 33, 33]);
        assert_eq!(sizes(211, &[10.0, 0.25, 0.75]), vec![10, 51, 150]);
    }

    #[test]
    fn fractional_strips_fill_the_strip_exactly() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();
        for _ in 0..5000 {
            let major = rng.random_range(0..2000);
            let mut cells = Vec::new();
            let mut fixed = 0;
            for _ in 0..rng.random_range(0..3) {
                let size = rng.random_range(2..60);
                fixed += size;
                cells.push(size as f32);
            }
            let weights: Vec<u32> = (0..rng.random_range(1..6)).map(|_| rng.random_range(1..100)).collect();
            let total: u32 = weights.iter().sum();
            cells.extend(weights.iter().map(|&w| w as f32 / total as f32));
            if fixed > major {
                continue;
            }
            resolve_strip(major, &cells, &mut out);
            assert_eq!(out.iter().sum::<i32>(), major, "cells {:?} in {}", cells, major);
            assert!(out.iter().all(|s| *s >= 0));
        }
    }

    #[test]
    fn shared_cells_fill_the_strip_exactly() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut out = Vec::new();
        for _ in 0..5000 {
            let major = rng.random_range(0..2000);
            let mut cells = Vec::new();
            let mut fixed = 0;
            for _ in 0..rng.random_range(0..4) {
                let size = rng.random_range(2..60);
                fixed += size;
                cells.push(size as f32);
            }
            for _ in 0..rng.random_range(0..3) {
                cells.push(rng.random_range(0.01f32..0.3));
            }
            for _ in 0..rng.random_range(1..5) {
                cells.push(0.0);
            }
            if fixed > major {
                continue;
            }
            resolve_strip(major, &cells, &mut out);
            assert_eq!(out.iter().sum::<i32>(), major, "cells {:?} in {}", cells, major);
            assert!(out.iter().all(|s| *s >= 0));
        }
    }

    #[test]
    fn nested_strips_split_their_cell() {
        let mut layout = LayoutManager::new(8, 32);
        layout.begin(rect(10, 20, 300, 200), vec2(0, 0), 24);
        layout.strip(Direction::Row, None, Some(40), &[100.0, 0.0]).unwrap();
        assert_eq!(r(layout.next_cell().unwrap()), (10, 20, 100, 40));
        layout.strip(Direction::Column, None, None, &[0.5, 0.0]).unwrap();
        assert_eq!(r(layout.next_cell().unwrap()), (110, 20, 200, 20));
        assert_eq!(r(layout.next_cell().unwrap()), (110, 40, 200, 20));
        // both strips are used up, the next cell opens a default row below them
        assert_eq!(r(layout.next_cell().unwrap()), (10, 60, 300, 24));
        let content = layout.finish();
        assert_eq!((content.x, content.y), (300, 64));
    }

    #[test]
    fn same_direction_nesting_is_rejected_without_consuming_a_cell() {
        let mut layout = LayoutManager::new(8, 32);
        layout.begin(rect(0, 0, 300, 200), vec2(0, 0), 24);
        layout.strip(Direction::Row, None, None, &[0.0, 0.0]).unwrap();
        assert_eq!(layout.strip(Direction::Row, None, None, &[0.0]), Err(UiError::SameDirectionNesting));
        assert_eq!(r(layout.next_cell().unwrap()), (0, 0, 150, 24));
    }

    #[test]
    fn limits_are_enforced() {
        let mut layout = LayoutManager::new(1, 2);
        assert_eq!(layout.next_cell().err(), Some(UiError::NoGrid));
        layout.begin(rect(0, 0, 300, 200), vec2(0, 0), 24);
        assert_eq!(layout.strip(Direction::Row, None, None, &[0.0; 3]), Err(UiError::TooManyCells { requested: 3, max: 2 }));
        assert_eq!(layout.strip(Direction::Row, None, None, &[]), Err(UiError::EmptyStrip));
        layout.strip(Direction::Row, None, None, &[0.0, 0.0]).unwrap();
        assert_eq!(layout.strip(Direction::Column, None, None, &[0.0]), Err(UiError::GridTooDeep(1)));
    }

    #[test]
    fn scroll_offsets_cells_but_not_content() {
        let mut layout = LayoutManager::new(8, 32);
        layout.begin(rect(0, 0, 100, 50), vec2(0, 30), 20);
        let mut last = Recti::default();
        for _ in 0..5 {
            last = layout.next_cell().unwrap();
        }
        assert_eq!(r(last), (0, 50, 100, 20));
        let content = layout.finish();
        assert_eq!((content.x, content.y), (100, 100));
    }

    #[test]
    fn end_strip_skips_free_cells() {
        let mut layout = LayoutManager::new(8, 32);
        layout.begin(rect(0, 0, 100, 100), vec2(0, 0), 20);
        layout.strip(Direction::Row, None, None, &[0.0, 0.0, 0.0]).unwrap();
        layout.next_cell().unwrap();
        layout.end_strip();
        assert_eq!(r(layout.next_cell().unwrap()), (0, 20, 100, 20));
    }
}
