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

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Column/row delta of a single step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Grid coordinate: `x` is the column, `y` the row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Moves `distance` cells towards `direction`, or `None` when that would
    /// leave the `width` x `height` area.
    pub fn offset_by(&self, direction: Direction, distance: usize, width: usize, height: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let nx = self.x as isize + dx * distance as isize;
        let ny = self.y as isize + dy * distance as isize;
        if nx < 0 || ny < 0 {
            return None;
        }
        let pos = Position::new(nx as usize, ny as usize);
        pos.is_valid(width, height).then_some(pos)
    }

    pub fn step(&self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        self.offset_by(direction, 1, width, height)
    }

    pub fn positions_around(&self, width: usize, height: usize) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(dir, width, height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 5, 5), None);
        assert_eq!(corner.step(Direction::Left, 5, 5), None);
        assert_eq!(corner.step(Direction::Right, 5, 5), Some(Position::new(1, 0)));

        let far = Position::new(4, 4);
        assert_eq!(far.step(Direction::Down, 5, 5), None);
        assert_eq!(far.offset_by(Direction::Up, 2, 5, 5), Some(Position::new(4, 2)));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(1, 7);
        let b = Position::new(4, 3);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn positions_around_skips_out_of_bounds() {
        assert_eq!(Position::new(0, 0).positions_around(3, 3).len(), 2);
        assert_eq!(Position::new(1, 1).positions_around(3, 3).len(), 4);
    }
}
