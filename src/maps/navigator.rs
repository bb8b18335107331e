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

use pathfinding::prelude::{bfs, dfs_reach};
use std::collections::HashSet;

use crate::{position::Position, tile_map::TileMap};

/// Reachability queries over the floor cells of a [`TileMap`], moving in the
/// four cardinal directions only.
pub struct Navigator {}

impl Navigator {
    /// Every floor cell connected to `start`. Empty when `start` is a wall.
    pub fn reachable_from(tiles: &TileMap, start: Position) -> HashSet<Position> {
        if !tiles.is_walkable(start) {
            return HashSet::new();
        }
        dfs_reach(start, |&pos| tiles.walkable_neighbors(pos)).collect()
    }

    pub fn is_reachable(tiles: &TileMap, start: Position, goal: Position) -> bool {
        Self::reachable_from(tiles, start).contains(&goal)
    }

    /// Shortest cardinal path, both ends included.
    pub fn shortest_path(tiles: &TileMap, start: Position, goal: Position) -> Option<Vec<Position>> {
        if !tiles.is_walkable(start) {
            return None;
        }
        bfs(&start, |&pos| tiles.walkable_neighbors(pos), |&pos| pos == goal)
    }
}
