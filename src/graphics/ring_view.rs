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

use macroquad::prelude::*;

use crate::graphics::palette;
use crate::rings::board::{Cell, Marker, RING_COUNT, SLICE_COUNT};
use crate::rings::game::RingGame;

const MARKER_RADIUS: f32 = 15.0;

pub fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::Blue => palette::MARKER_BLUE,
        Marker::Red => palette::MARKER_RED,
    }
}

pub fn draw_board(game: &RingGame) {
    let geometry = &game.geometry;
    let center = geometry.center;

    for radius in geometry.radii {
        draw_circle_lines(center.x, center.y, radius, 2.0, palette::RING_LINES);
    }

    for slice in 0..SLICE_COUNT {
        let end = geometry.spoke_end(slice);
        draw_line(center.x, center.y, end.x, end.y, 2.0, palette::RING_LINES);
    }

    for ring in 0..RING_COUNT {
        for slice in 0..SLICE_COUNT {
            let cell = Cell::new(ring, slice);
            if let Some(marker) = game.board.get(cell) {
                let at = geometry.cell_center(cell);
                draw_circle(at.x, at.y, MARKER_RADIUS, marker_color(marker));
                draw_circle_lines(at.x, at.y, MARKER_RADIUS, 1.0, palette::RING_LINES);
            }
        }
    }
}

pub fn draw_turn(game: &RingGame, y: f32) {
    let current = game.current();
    let text = format!("{current} to play");
    let dim = measure_text(&text, None, 24, 1.0);
    draw_text(&text, game.geometry.center.x - dim.width / 2.0, y, 24.0, marker_color(current));
}
