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
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Usage and capacity errors reported by the context. Every error is logged when it is raised;
/// the offending operation is skipped and the frame carries on.
pub enum UiError {
    /// `pop_style` was called with nothing pushed.
    #[error("style stack is empty")]
    StyleStackEmpty,
    /// `push_style` was called with the stack at capacity.
    #[error("style stack is full ({0} entries)")]
    StyleStackFull(usize),
    /// The style stack depth at the end of a frame differs from its depth at the start.
    #[error("style stack leaked {0} entries over the frame")]
    StyleStackLeak(usize),
    /// A layout call was issued outside of a panel.
    #[error("layout requested outside of a panel grid")]
    NoGrid,
    /// Strips are nested deeper than the configured limit.
    #[error("grid nesting exceeds {0} levels")]
    GridTooDeep(usize),
    /// A strip declares more cells than a strip may hold.
    #[error("strip declares {requested} cells, the limit is {max}")]
    TooManyCells {
        /// Number of cells declared.
        requested: usize,
        /// Configured limit.
        max: usize,
    },
    /// A strip declares no cells at all.
    #[error("strip declared without cells")]
    EmptyStrip,
    /// A strip is nested inside a strip running in the same direction.
    #[error("strip nested in the same direction as its parent")]
    SameDirectionNesting,
    /// The vertex buffer is full.
    #[error("vertex buffer is full ({0} vertices)")]
    VertexCapacity(usize),
    /// The draw call buffer is full.
    #[error("draw call buffer is full ({0} calls)")]
    DrawCallCapacity(usize),
    /// The scissor region buffer is full.
    #[error("scissor region buffer is full ({0} regions)")]
    ScissorCapacity(usize),
    /// `pop_mask` was called with nothing pushed.
    #[error("mask stack is empty")]
    MaskUnderflow,
    /// A polygon with fewer than three vertices was submitted for filling.
    #[error("polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
    /// The panel handle does not refer to a live panel.
    #[error("unknown panel #{0}")]
    UnknownPanel(usize),
    /// The split handle does not refer to a live split node.
    #[error("unknown split node #{0}")]
    UnknownSplit(usize),
    /// `begin_panel` was called while another panel is being drawn.
    #[error("panel #{0} begun while another panel is open")]
    PanelNesting(usize),
    /// `end_panel` was called without a matching `begin_panel`.
    #[error("end_panel called without an open panel")]
    NoPanel,
    /// A dropdown item was declared outside of `begin_dropdown`/`end_dropdown`.
    #[error("dropdown item declared outside of a dropdown")]
    NoDropdown,
}

/// Result alias used across the crate.
pub type UiResult<T> = Result<T, UiError>;

impl UiError {
    /// Logs the error and hands it back so it can be returned.
    pub(crate) fn logged(self) -> Self {
        tracing::error!("{}", self);
        self
    }
}
