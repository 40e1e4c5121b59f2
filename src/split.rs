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
//! Binary split tree that docks panels into the screen rectangle.

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle of a node in a [`SplitTree`].
pub struct SplitId(usize);

impl SplitId {
    /// Returns the arena index of the node.
    pub fn index(self) -> usize { self.0 }
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// How an interior node divides its rectangle.
pub enum SplitSize {
    /// The first child gets this fraction of the length.
    Ratio(f32),
    /// The first child gets this many pixels.
    First(i32),
    /// The second child gets this many pixels.
    Second(i32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Orientation of an interior node.
pub enum SplitDir {
    /// Children side by side, separated by a vertical boundary.
    LeftRight,
    /// Children stacked, separated by a horizontal boundary.
    TopBottom,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// A node of the tree.
pub enum SplitNode {
    /// Hosts one panel.
    Leaf(PanelId),
    /// Divides its rectangle between two children.
    Branch {
        /// Orientation.
        dir: SplitDir,
        /// Division.
        size: SplitSize,
        /// Whether the boundary can be dragged.
        resizable: bool,
        /// First (left or top) and second child.
        children: [SplitId; 2],
    },
}

#[derive(Clone, Debug)]
struct Slot {
    node: SplitNode,
    parent: Option<SplitId>,
    rect: Recti,
}

#[derive(Clone, Debug, Default)]
/// Arena of split nodes with a designated root.
pub struct SplitTree {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    root: Option<SplitId>,
}

/// Length of the first child for a rectangle `len` pixels long.
fn first_len(size: SplitSize, len: i32) -> i32 {
    let len = len.max(0);
    match size {
        SplitSize::Ratio(r) => (len as f32 * r.clamp(0.0, 1.0)).round() as i32,
        SplitSize::First(px) => px.clamp(0, len),
        SplitSize::Second(px) => len - px.clamp(0, len),
    }
}

fn split_rect(r: Recti, dir: SplitDir, size: SplitSize) -> (Recti, Recti) {
    match dir {
        SplitDir::LeftRight => {
            let w = first_len(size, r.width);
            (rect(r.x, r.y, w, r.height), rect(r.x + w, r.y, r.width.max(0) - w, r.height))
        }
        SplitDir::TopBottom => {
            let h = first_len(size, r.height);
            (rect(r.x, r.y, r.width, h), rect(r.x, r.y + h, r.width, r.height.max(0) - h))
        }
    }
}

impl SplitTree {
    /// Creates an empty tree.
    pub fn new() -> Self { Self::default() }

    fn alloc(&mut self, node: SplitNode) -> SplitId {
        let slot = Some(Slot { node, parent: None, rect: Recti::default() });
        match self.free.pop() {
            Some(i) => {
                self.slots[i] = slot;
                SplitId(i)
            }
            None => {
                self.slots.push(slot);
                SplitId(self.slots.len() - 1)
            }
        }
    }

    fn slot(&self, id: SplitId) -> UiResult<&Slot> { self.slots.get(id.0).and_then(|s| s.as_ref()).ok_or(UiError::UnknownSplit(id.0)) }

    fn slot_mut(&mut self, id: SplitId) -> UiResult<&mut Slot> { self.slots.get_mut(id.0).and_then(|s| s.as_mut()).ok_or(UiError::UnknownSplit(id.0)) }

    /// Adds a leaf hosting `panel`.
    pub fn leaf(&mut self, panel: PanelId) -> SplitId { self.alloc(SplitNode::Leaf(panel)) }

    /// Adds an interior node over two existing, parentless nodes.
    pub fn split(&mut self, dir: SplitDir, size: SplitSize, resizable: bool, first: SplitId, second: SplitId) -> UiResult<SplitId> {
        for child in [first, second] {
            if self.slot(child).map_err(|e| e.logged())?.parent.is_some() {
                tracing::warn!("split node #{} already has a parent, re-parenting it", child.0);
            }
        }
        let id = self.alloc(SplitNode::Branch { dir, size, resizable, children: [first, second] });
        for child in [first, second] {
            self.slot_mut(child)?.parent = Some(id);
        }
        Ok(id)
    }

    /// Makes `id` the root laid out over the screen.
    pub fn set_root(&mut self, id: SplitId) -> UiResult<()> {
        self.slot(id).map_err(|e| e.logged())?;
        self.root = Some(id);
        Ok(())
    }

    /// Returns the root node.
    pub fn root(&self) -> Option<SplitId> { self.root }

    /// Returns a node.
    pub fn node(&self, id: SplitId) -> Option<&SplitNode> { self.slot(id).ok().map(|s| &s.node) }

    /// Returns the rectangle computed for a node by the last [`SplitTree::compute`].
    pub fn rect(&self, id: SplitId) -> Option<Recti> { self.slot(id).ok().map(|s| s.rect) }

    /// Returns the parent of a node.
    pub fn parent(&self, id: SplitId) -> Option<SplitId> { self.slot(id).ok().and_then(|s| s.parent) }

    /// Returns the division of an interior node.
    pub fn size(&self, id: SplitId) -> Option<SplitSize> {
        match self.node(id) {
            Some(SplitNode::Branch { size, .. }) => Some(*size),
            _ => None,
        }
    }

    /// Changes the division of an interior node.
    pub fn set_size(&mut self, id: SplitId, new_size: SplitSize) -> UiResult<()> {
        match &mut self.slot_mut(id).map_err(|e| e.logged())?.node {
            SplitNode::Branch { size, .. } => {
                *size = new_size;
                Ok(())
            }
            SplitNode::Leaf(_) => Err(UiError::UnknownSplit(id.0).logged()),
        }
    }

    /// Returns the leaf hosting `panel`.
    pub fn leaf_of(&self, panel: PanelId) -> Option<SplitId> {
        self.slots.iter().enumerate().find_map(|(i, s)| match s {
            Some(Slot { node: SplitNode::Leaf(p), .. }) if *p == panel => Some(SplitId(i)),
            _ => None,
        })
    }

    /// Removes a node and everything below it.
    pub fn remove(&mut self, id: SplitId) -> UiResult<()> {
        let parent = self.slot(id).map_err(|e| e.logged())?.parent;
        if let Some(parent) = parent {
            tracing::warn!("removing split node #{} that still belongs to node #{}", id.0, parent.0);
        }
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(slot) = self.slots.get_mut(next.0).and_then(|s| s.take()) {
                if let SplitNode::Branch { children, .. } = slot.node {
                    pending.extend(children);
                }
                self.free.push(next.0);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }
        Ok(())
    }

    /// Lays the tree out over `screen`, top-down.
    pub fn compute(&mut self, screen: Recti) {
        let Some(root) = self.root else { return };
        let mut pending = vec![(root, screen)];
        while let Some((id, r)) = pending.pop() {
            let Ok(slot) = self.slot_mut(id) else {
                tracing::warn!("split tree references missing node #{}", id.0);
                continue;
            };
            slot.rect = r;
            if let SplitNode::Branch { dir, size, children, .. } = slot.node {
                let (a, b) = split_rect(r, dir, size);
                pending.push((children[0], a));
                pending.push((children[1], b));
            }
        }
    }

    /// Calls `f` with every leaf reachable from the root and its rectangle.
    pub fn for_each_leaf(&self, mut f: impl FnMut(PanelId, Recti)) {
        let Some(root) = self.root else { return };
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let Ok(slot) = self.slot(id) else { continue };
            match slot.node {
                SplitNode::Leaf(panel) => f(panel, slot.rect),
                SplitNode::Branch { children, .. } => pending.extend(children),
            }
        }
    }

    /// Returns the resizable interior nodes reachable from the root, with their boundary position.
    pub(crate) fn boundaries(&self, out: &mut Vec<(SplitId, SplitDir, Recti, i32)>) {
        out.clear();
        let Some(root) = self.root else { return };
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let Ok(slot) = self.slot(id) else { continue };
            if let SplitNode::Branch { dir, size, resizable, children } = slot.node {
                if resizable {
                    let len = match dir {
                        SplitDir::LeftRight => slot.rect.width,
                        SplitDir::TopBottom => slot.rect.height,
                    };
                    out.push((id, dir, slot.rect, first_len(size, len)));
                }
                pending.extend(children);
            }
        }
    }

    /// Moves the boundary of `id` so the first child is `first` pixels long, keeping the kind of division.
    pub(crate) fn drag_boundary(&mut self, id: SplitId, first: i32) -> UiResult<()> {
        let slot = self.slot(id)?;
        let SplitNode::Branch { dir, size, .. } = slot.node else {
            return Err(UiError::UnknownSplit(id.0).logged());
        };
        let len = match dir {
            SplitDir::LeftRight => slot.rect.width,
            SplitDir::TopBottom => slot.rect.height,
        };
        let first = first.clamp(0, len.max(0));
        let size = match size {
            SplitSize::Ratio(_) if len > 0 => SplitSize::Ratio(first as f32 / len as f32),
            SplitSize::Ratio(r) => SplitSize::Ratio(r),
            SplitSize::First(_) => SplitSize::First(first),
            SplitSize::Second(_) => SplitSize::Second(len - first),
        };
        self.set_size(id, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: Recti) -> (i32, i32, i32, i32) { (x.x, x.y, x.width, x.height) }

    fn tree() -> (SplitTree, [SplitId; 5]) {
        let mut t = SplitTree::new();
        let a = t.leaf(PanelId::from_index(0));
        let b = t.leaf(PanelId::from_index(1));
        let c = t.leaf(PanelId::from_index(2));
        let right = t.split(SplitDir::TopBottom, SplitSize::Second(100), true, b, c).unwrap();
        let root = t.split(SplitDir::LeftRight, SplitSize::Ratio(0.25), true, a, right).unwrap();
        t.set_root(root).unwrap();
        (t, [a, b, c, right, root])
    }

    #[test]
    fn compute_divides_top_down() {
        let (mut t, [a, b, c, right, _]) = tree();
        t.compute(rect(0, 0, 800, 600));
        assert_eq!(r(t.rect(a).unwrap()), (0, 0, 200, 600));
        assert_eq!(r(t.rect(right).unwrap()), (200, 0, 600, 600));
        assert_eq!(r(t.rect(b).unwrap()), (200, 0, 600, 500));
        assert_eq!(r(t.rect(c).unwrap()), (200, 500, 600, 100));
    }

    #[test]
    fn pixel_sizes_are_clamped_to_the_parent() {
        let (mut t, [_, b, c, right, _]) = tree();
        t.set_size(right, SplitSize::Second(5000)).unwrap();
        t.compute(rect(0, 0, 800, 600));
        assert_eq!(t.rect(b).unwrap().height, 0);
        assert_eq!(t.rect(c).unwrap().height, 600);
    }

    #[test]
    fn dragging_keeps_the_kind_of_division() {
        let (mut t, [_, _, _, right, root]) = tree();
        t.compute(rect(0, 0, 800, 600));
        t.drag_boundary(root, 400).unwrap();
        assert_eq!(t.size(root), Some(SplitSize::Ratio(0.5)));
        t.drag_boundary(right, 450).unwrap();
        assert_eq!(t.size(right), Some(SplitSize::Second(150)));
    }

    #[test]
    fn leaves_and_boundaries() {
        let (mut t, [_, _, _, right, root]) = tree();
        t.compute(rect(0, 0, 800, 600));
        let mut leaves = Vec::new();
        t.for_each_leaf(|p, _| leaves.push(p.index()));
        leaves.sort();
        assert_eq!(leaves, vec![0, 1, 2]);
        assert_eq!(t.leaf_of(PanelId::from_index(2)).map(|id| t.parent(id)), Some(Some(right)));
        let mut bounds = Vec::new();
        t.boundaries(&mut bounds);
        assert_eq!(bounds.len(), 2);
        assert!(bounds.iter().any(|(id, _, _, at)| *id == root && *at == 200));
        assert!(bounds.iter().any(|(id, _, _, at)| *id == right && *at == 500));
    }

    #[test]
    fn removed_nodes_are_unknown() {
        let (mut t, [a, b, _, right, root]) = tree();
        t.remove(root).unwrap();
        assert!(t.node(a).is_none());
        assert!(t.node(right).is_none());
        assert_eq!(t.root(), None);
        assert_eq!(t.set_size(b, SplitSize::First(3)), Err(UiError::UnknownSplit(b.index())));
    }
}
