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

use std::fmt;

pub const RING_COUNT: usize = 4;
pub const SLICE_COUNT: usize = 8;
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    Blue,
    Red,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::Blue, Marker::Red];

    pub fn other(self) -> Self {
        match self {
            Marker::Blue => Marker::Red,
            Marker::Red => Marker::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Marker::Blue => "Blue",
            Marker::Red => "Red",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (ring, slice) coordinate. Ring 0 is the innermost band.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ring: usize,
    pub slice: usize,
}

impl Cell {
    pub fn new(ring: usize, slice: usize) -> Self {
        Self { ring, slice }
    }

    pub fn is_valid(&self) -> bool {
        self.ring < RING_COUNT && self.slice < SLICE_COUNT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingBoard {
    cells: [[Option<Marker>; SLICE_COUNT]; RING_COUNT],
}

impl RingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<Marker> {
        if !cell.is_valid() {
            return None;
        }
        self.cells[cell.ring][cell.slice]
    }

    /// Marks an empty cell. Occupied or out-of-range cells are left alone and
    /// `false` is returned.
    pub fn place(&mut self, cell: Cell, marker: Marker) -> bool {
        if !cell.is_valid() || self.cells[cell.ring][cell.slice].is_some() {
            return false;
        }
        self.cells[cell.ring][cell.slice] = Some(marker);
        true
    }

    pub fn reset(&mut self) {
        self.cells = Default::default();
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// First marker (blue before red) that owns a run of [`WIN_LENGTH`]
    /// along a ring (wrapping), a slice, or either spiral diagonal.
    pub fn winner(&self) -> Option<Marker> {
        Marker::ALL.into_iter().find(|&marker| self.has_run(marker))
    }

    fn has_run(&self, marker: Marker) -> bool {
        self.ring_lines().any(|line| has_consecutive(&line, marker, WIN_LENGTH))
            || self.slice_lines().any(|line| has_consecutive(&line, marker, WIN_LENGTH))
            || self.diagonal_lines().any(|line| has_consecutive(&line, marker, WIN_LENGTH))
    }

    /// Each ring followed by its first `WIN_LENGTH - 1` slices again, so runs
    /// crossing slice 7 -> 0 are seen.
    fn ring_lines(&self) -> impl Iterator<Item = Vec<Option<Marker>>> + '_ {
        self.cells.iter().map(|ring| {
            ring.iter()
                .chain(ring.iter().take(WIN_LENGTH - 1))
                .copied()
                .collect::<Vec<_>>()
        })
    }

    fn slice_lines(&self) -> impl Iterator<Item = Vec<Option<Marker>>> + '_ {
        (0..SLICE_COUNT).map(move |slice| (0..RING_COUNT).map(|ring| self.cells[ring][slice]).collect::<Vec<_>>())
    }

    /// Outward spirals from every slice, turning clockwise and
    /// counter-clockwise.
    fn diagonal_lines(&self) -> impl Iterator<Item = Vec<Option<Marker>>> + '_ {
        (0..SLICE_COUNT).flat_map(move |start| {
            let forward: Vec<_> = (0..RING_COUNT)
                .map(|i| self.cells[i][(start + i) % SLICE_COUNT])
                .collect();
            let backward: Vec<_> = (0..RING_COUNT)
                .map(|i| self.cells[i][(start + SLICE_COUNT - i) % SLICE_COUNT])
                .collect();
            [forward, backward]
        })
    }
}

fn has_consecutive(line: &[Option<Marker>], marker: Marker, length: usize) -> bool {
    let mut count = 0;
    for cell in line {
        if *cell == Some(marker) {
            count += 1;
            if count == length {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut RingBoard, cells: &[(usize, usize)], marker: Marker) {
        for &(ring, slice) in cells {
            assert!(board.place(Cell::new(ring, slice), marker));
        }
    }

    #[test]
    fn occupied_cell_is_not_overwritten() {
        let mut board = RingBoard::new();
        assert!(board.place(Cell::new(2, 5), Marker::Blue));
        let before = board.clone();

        assert!(!board.place(Cell::new(2, 5), Marker::Red));
        assert_eq!(board, before);
        assert_eq!(board.get(Cell::new(2, 5)), Some(Marker::Blue));
    }

    #[test]
    fn out_of_range_cell_is_rejected() {
        let mut board = RingBoard::new();
        assert!(!board.place(Cell::new(4, 0), Marker::Blue));
        assert!(!board.place(Cell::new(0, 8), Marker::Blue));
        assert_eq!(board, RingBoard::new());
    }

    #[test]
    fn ring_run_wraps_around() {
        let mut board = RingBoard::new();
        fill(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 6), (0, 7)], Marker::Red);
        assert_eq!(board.winner(), Some(Marker::Red));
    }

    #[test]
    fn three_across_the_seam_is_not_enough() {
        let mut board = RingBoard::new();
        fill(&mut board, &[(1, 7), (1, 0), (1, 1)], Marker::Blue);
        fill(&mut board, &[(1, 3), (1, 4), (1, 5)], Marker::Blue);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn column_wins() {
        let mut board = RingBoard::new();
        fill(&mut board, &[(0, 3), (1, 3), (2, 3), (3, 3)], Marker::Red);
        assert_eq!(board.winner(), Some(Marker::Red));
    }

    #[test]
    fn clockwise_spiral_wins() {
        let mut board = RingBoard::new();
        fill(&mut board, &[(0, 6), (1, 7), (2, 0), (3, 1)], Marker::Blue);
        assert_eq!(board.winner(), Some(Marker::Blue));
    }

    #[test]
    fn counter_clockwise_spiral_wins() {
        let mut board = RingBoard::new();
        fill(&mut board, &[(0, 1), (1, 0), (2, 7), (3, 6)], Marker::Red);
        assert_eq!(board.winner(), Some(Marker::Red));
    }

    #[test]
    fn broken_spiral_does_not_win() {
        let mut board = RingBoard::new();
        fill(&mut board, &[(0, 1), (1, 2), (2, 3)], Marker::Red);
        fill(&mut board, &[(3, 4)], Marker::Blue);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn full_board_and_reset() {
        let mut board = RingBoard::new();
        for ring in 0..RING_COUNT {
            for slice in 0..SLICE_COUNT {
                board.place(Cell::new(ring, slice), Marker::Blue);
            }
        }
        assert!(board.is_full());
        board.reset();
        assert!(!board.is_full());
        assert_eq!(board.get(Cell::new(0, 0)), None);
    }
}
