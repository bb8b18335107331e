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

use crate::clock::{Urgency, format_clock};
use crate::config::MazeConfig;
use crate::graphics::palette;
use crate::maze::game::MazeGame;
use crate::player::Player;
use crate::position::{Direction, Position};
use crate::tile::TileKind;
use crate::ui::point_f::PointF;

pub const HEADER_HEIGHT: f32 = 80.0;
pub const FOOTER_HEIGHT: f32 = 90.0;
pub const MARGIN: f32 = 10.0;

/// Sprite pixel grid; every part is laid out on a 16x16 canvas and scaled to
/// the cell size.
const SPRITE_UNITS: f32 = 16.0;

/// Pixel placement of the maze on screen.
#[derive(Clone, Copy, Debug)]
pub struct MazeLayout {
    pub offset: PointF,
    pub cell_size: f32,
    pub board_w: f32,
    pub board_h: f32,
}

impl MazeLayout {
    pub fn new(config: &MazeConfig) -> Self {
        Self {
            offset: PointF::new(MARGIN, HEADER_HEIGHT),
            cell_size: config.cell_size,
            board_w: config.width as f32 * config.cell_size,
            board_h: config.height as f32 * config.cell_size,
        }
    }

    pub fn window_size(&self) -> (f32, f32) {
        (self.board_w + 2.0 * MARGIN, HEADER_HEIGHT + self.board_h + FOOTER_HEIGHT)
    }

    pub fn footer_top(&self) -> f32 {
        self.offset.y + self.board_h
    }

    fn cell_origin(&self, pos: Position) -> PointF {
        PointF::new(
            self.offset.x + pos.x as f32 * self.cell_size,
            self.offset.y + pos.y as f32 * self.cell_size,
        )
    }
}

pub fn draw_maze(game: &MazeGame, layout: &MazeLayout) {
    let maze = game.maze();
    let size = layout.cell_size;

    draw_rectangle_lines(layout.offset.x - 3.0, layout.offset.y - 3.0, layout.board_w + 6.0, layout.board_h + 6.0, 3.0, palette::WALL);

    for x in 0..maze.width() {
        for y in 0..maze.height() {
            let pos = Position::new(x, y);
            let origin = layout.cell_origin(pos);

            if !game.is_visible(pos) {
                draw_rectangle(origin.x, origin.y, size, size, palette::FOG);
                continue;
            }

            match maze.tiles()[pos] {
                TileKind::Wall => {
                    draw_rectangle(origin.x, origin.y, size, size, palette::WALL);
                    draw_rectangle_lines(origin.x, origin.y, size, size, 1.0, palette::WALL_OUTLINE);
                }
                TileKind::Floor => draw_rectangle(origin.x, origin.y, size, size, palette::FLOOR),
            }
        }
    }

    if game.is_visible(maze.exit()) {
        let origin = layout.cell_origin(maze.exit());
        draw_rectangle(origin.x, origin.y, size, size, palette::EXIT);
    }

    draw_player(game.player(), layout);
}

/// Rectangles (x1, y1, x2, y2) in sprite units for each body part, plus its
/// colour. Head, two eyes, body and the held item shift with the facing.
fn sprite_parts(facing: Direction) -> [(f32, f32, f32, f32, Color); 5] {
    let (head_x, head_y) = match facing {
        Direction::Up | Direction::Down => (5.0, 2.0),
        Direction::Left => (4.0, 3.0),
        Direction::Right => (6.0, 3.0),
    };
    let eyes = match facing {
        Direction::Up | Direction::Down => [(1.0, 2.0), (4.0, 2.0)],
        Direction::Left => [(1.0, 2.0), (1.0, 4.0)],
        Direction::Right => [(4.0, 2.0), (4.0, 4.0)],
    };
    let item = match facing {
        Direction::Up => (11.0, 6.0),
        Direction::Down => (11.0, 12.0),
        Direction::Left => (2.0, 10.0),
        Direction::Right => (12.0, 10.0),
    };

    [
        (head_x, head_y, head_x + 6.0, head_y + 6.0, palette::SKIN),
        (head_x + eyes[0].0, head_y + eyes[0].1, head_x + eyes[0].0 + 1.0, head_y + eyes[0].1 + 1.0, palette::EYES),
        (head_x + eyes[1].0, head_y + eyes[1].1, head_x + eyes[1].0 + 1.0, head_y + eyes[1].1 + 1.0, palette::EYES),
        (head_x, head_y + 6.0, head_x + 6.0, head_y + 12.0, palette::TUNIC),
        (item.0, item.1, item.0 + 2.0, item.1 + 1.0, palette::ITEM),
    ]
}

fn draw_player(player: &Player, layout: &MazeLayout) {
    let origin = layout.cell_origin(player.pos());
    let scale = layout.cell_size / SPRITE_UNITS;

    for (x1, y1, x2, y2, color) in sprite_parts(player.facing) {
        draw_rectangle(
            origin.x + x1 * scale,
            origin.y + y1 * scale,
            (x2 - x1) * scale,
            (y2 - y1) * scale,
            color,
        );
    }
}

pub fn timer_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Calm => palette::TIMER_CALM,
        Urgency::Warning => palette::TIMER_WARNING,
        Urgency::Critical => palette::TIMER_CRITICAL,
    }
}

pub fn draw_header(game: &MazeGame, layout: &MazeLayout) {
    let title = "Cube Maze - HARD MODE";
    let dim = measure_text(title, None, 28, 1.0);
    let center_x = layout.offset.x + layout.board_w / 2.0;
    draw_text(title, center_x - dim.width / 2.0, 32.0, 28.0, palette::TITLE);

    let timer = format!("Time: {}", format_clock(game.displayed_secs()));
    let dim = measure_text(&timer, None, 24, 1.0);
    draw_text(&timer, center_x - dim.width / 2.0, 62.0, 24.0, timer_color(game.urgency()));
}

pub fn draw_instructions(layout: &MazeLayout) {
    let text = "Use arrow keys to navigate. Reach the red exit before time runs out!";
    let dim = measure_text(text, None, 16, 1.0);
    draw_text(
        text,
        layout.offset.x + layout.board_w / 2.0 - dim.width / 2.0,
        layout.footer_top() + 28.0,
        16.0,
        palette::INSTRUCTIONS,
    );
}
