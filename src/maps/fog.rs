// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::position::Position;

/// A cell is visible when it lies within `radius` steps (Manhattan) of the
/// player or has been visited before.
pub fn is_visible(cell: Position, player: Position, radius: usize, visited: bool) -> bool {
    visited || cell.manhattan_distance(&player) <= radius
}

/// Visited cells plus the current reveal radius. Visited cells never revert.
#[derive(Clone, Debug)]
pub struct FogOfWar {
    visited: Vec<Vec<bool>>,
    base_radius: usize,
    radius: usize,
}

impl FogOfWar {
    pub fn new(width: usize, height: usize, base_radius: usize) -> Self {
        Self {
            visited: vec![vec![false; height]; width],
            base_radius,
            radius: base_radius,
        }
    }

    pub fn mark_visited(&mut self, pos: Position) {
        if let Some(cell) = self.visited.get_mut(pos.x).and_then(|col| col.get_mut(pos.y)) {
            *cell = true;
        }
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited
            .get(pos.x)
            .and_then(|col| col.get(pos.y))
            .copied()
            .unwrap_or(false)
    }

    pub fn is_visible(&self, cell: Position, player: Position) -> bool {
        is_visible(cell, player, self.radius, self.is_visited(cell))
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn widen(&mut self, radius: usize) {
        self.radius = radius;
    }

    pub fn restore_radius(&mut self) {
        self.radius = self.base_radius;
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().flatten().filter(|&&v| v).count()
    }
}
