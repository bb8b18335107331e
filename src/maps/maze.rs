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

use rand::Rng;

use crate::maps::map_generator::{GenerationParams, MapGenerator};
use crate::maps::navigator::Navigator;
use crate::position::Position;
use crate::tile_map::TileMap;

/// A generated maze with its fixed entry and exit cells.
#[derive(Clone, Debug)]
pub struct Maze {
    tiles: TileMap,
    start: Position,
    exit: Position,
}

impl Maze {
    pub fn new(tiles: TileMap, start: Position, exit: Position) -> Self {
        Self { tiles, start, exit }
    }

    pub fn generate<R: Rng + ?Sized>(params: &GenerationParams, rng: &mut R) -> Self {
        MapGenerator::generate_map(params, rng)
    }

    pub fn start_position() -> Position {
        Position::new(1, 1)
    }

    pub fn exit_position(width: usize, height: usize) -> Position {
        Position::new(width - 2, height - 2)
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tiles.is_walkable(pos)
    }

    pub fn is_solvable(&self) -> bool {
        Navigator::is_reachable(&self.tiles, self.start, self.exit)
    }

    pub fn solution_length(&self) -> Option<usize> {
        Navigator::shortest_path(&self.tiles, self.start, self.exit).map(|path| path.len() - 1)
    }
}
