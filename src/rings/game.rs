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

use tracing::info;

use crate::rings::board::{Cell, Marker, RingBoard};
use crate::rings::geometry::BoardGeometry;
use crate::ui::point_f::PointF;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RingOutcome {
    Winner(Marker),
    Draw,
}

impl RingOutcome {
    pub fn message(&self) -> String {
        match self {
            RingOutcome::Winner(marker) => format!("{marker} wins!"),
            RingOutcome::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Two local players taking turns on the ring board. Blue always opens.
pub struct RingGame {
    pub board: RingBoard,
    pub geometry: BoardGeometry,
    current: Marker,
    outcome: Option<RingOutcome>,
}

impl RingGame {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            board: RingBoard::new(),
            geometry,
            current: Marker::Blue,
            outcome: None,
        }
    }

    pub fn current(&self) -> Marker {
        self.current
    }

    pub fn outcome(&self) -> Option<RingOutcome> {
        self.outcome
    }

    pub fn handle_click(&mut self, point: PointF) -> Option<RingOutcome> {
        let cell = self.geometry.cell_at(point)?;
        self.play(cell)
    }

    /// Places the current marker. Ignored while a result is pending or when
    /// the cell is taken.
    pub fn play(&mut self, cell: Cell) -> Option<RingOutcome> {
        if self.outcome.is_some() || !self.board.place(cell, self.current) {
            return None;
        }

        if let Some(winner) = self.board.winner() {
            info!(%winner, ring = cell.ring, slice = cell.slice, "ring game won");
            self.outcome = Some(RingOutcome::Winner(winner));
        } else if self.board.is_full() {
            info!("ring game drawn");
            self.outcome = Some(RingOutcome::Draw);
        } else {
            self.current = self.current.other();
        }
        self.outcome
    }

    /// Clears the result and starts a fresh board.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Marker::Blue;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::board::{RING_COUNT, SLICE_COUNT};

    fn game() -> RingGame {
        RingGame::new(BoardGeometry::new(PointF::new(300.0, 300.0), [60.0, 110.0, 160.0, 210.0]))
    }

    #[test]
    fn players_alternate_and_occupied_clicks_keep_the_turn() {
        let mut game = game();
        assert_eq!(game.current(), Marker::Blue);
        assert_eq!(game.play(Cell::new(0, 0)), None);
        assert_eq!(game.current(), Marker::Red);

        assert_eq!(game.play(Cell::new(0, 0)), None);
        assert_eq!(game.current(), Marker::Red);
        assert_eq!(game.board.get(Cell::new(0, 0)), Some(Marker::Blue));
    }

    #[test]
    fn clicks_outside_do_nothing() {
        let mut game = game();
        assert_eq!(game.handle_click(PointF::new(5.0, 5.0)), None);
        assert_eq!(game.board, RingBoard::new());
        assert_eq!(game.current(), Marker::Blue);
    }

    #[test]
    fn column_win_freezes_the_board_until_reset() {
        let mut game = game();
        for ring in 0..3 {
            game.play(Cell::new(ring, 3));
            game.play(Cell::new(ring, 5));
        }
        assert_eq!(game.play(Cell::new(3, 3)), Some(RingOutcome::Winner(Marker::Blue)));

        assert_eq!(game.play(Cell::new(3, 5)), None);
        assert_eq!(game.board.get(Cell::new(3, 5)), None);

        game.reset();
        assert_eq!(game.outcome(), None);
        assert_eq!(game.current(), Marker::Blue);
        assert_eq!(game.board, RingBoard::new());
    }

    #[test]
    fn full_board_without_runs_is_a_draw() {
        // Pairs of slices alternate owner, shifted by two on every ring, so
        // no ring, slice or spiral ever holds four of one colour.
        let owner = |ring: usize, slice: usize| {
            if ((slice / 2) + ring) % 2 == 0 { Marker::Blue } else { Marker::Red }
        };
        let mut board = RingBoard::new();
        for ring in 0..RING_COUNT {
            for slice in 0..SLICE_COUNT {
                board.place(Cell::new(ring, slice), owner(ring, slice));
            }
        }
        assert_eq!(board.winner(), None);

        let mut game = game();
        let mut blue: Vec<Cell> = Vec::new();
        let mut red: Vec<Cell> = Vec::new();
        for ring in 0..RING_COUNT {
            for slice in 0..SLICE_COUNT {
                match owner(ring, slice) {
                    Marker::Blue => blue.push(Cell::new(ring, slice)),
                    Marker::Red => red.push(Cell::new(ring, slice)),
                }
            }
        }

        let mut last = None;
        for (b, r) in blue.into_iter().zip(red) {
            assert_eq!(game.play(b), None);
            last = game.play(r);
        }
        assert_eq!(last, Some(RingOutcome::Draw));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(RingOutcome::Winner(Marker::Red).message(), "Red wins!");
        assert_eq!(RingOutcome::Draw.message(), "It's a draw!");
    }
}
