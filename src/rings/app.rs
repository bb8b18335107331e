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

use crate::config::{self, RINGS_CONFIG_PATH, RingConfig};
use crate::graphics::{palette, ring_view};
use crate::input::Input;
use crate::rings::board::RING_COUNT;
use crate::rings::game::{RingGame, RingOutcome};
use crate::rings::geometry::BoardGeometry;
use crate::ui::point_f::PointF;
use crate::ui::widget_dialog::WidgetDialog;

pub const FOOTER_HEIGHT: f32 = 40.0;

fn geometry_for(config: &RingConfig) -> BoardGeometry {
    let mut radii = [0.0; RING_COUNT];
    radii.copy_from_slice(&config.radii[..RING_COUNT]);
    let center = config.size / 2.0;
    BoardGeometry::new(PointF::new(center, center), radii)
}

pub async fn run() {
    let config: RingConfig = config::load_or_default(RINGS_CONFIG_PATH).await;
    request_new_screen_size(config.size, config.size + FOOTER_HEIGHT);

    let mut game = RingGame::new(geometry_for(&config));
    let mut dialog = WidgetDialog::new();

    loop {
        let input = Input::poll();

        if dialog.is_visible() {
            if dialog.handle_input(input.confirm, input.click) {
                game.reset();
            }
        } else if let Some(click) = input.click {
            if let Some(outcome) = game.handle_click(click) {
                dialog.border_color = match outcome {
                    RingOutcome::Winner(marker) => ring_view::marker_color(marker),
                    RingOutcome::Draw => palette::RING_LINES,
                };
                dialog.show("Game Over", &outcome.message());
            }
        }

        clear_background(palette::RING_BACKGROUND);
        ring_view::draw_board(&game);
        if game.outcome().is_none() {
            ring_view::draw_turn(&game, config.size + FOOTER_HEIGHT / 2.0);
        }
        dialog.draw();

        next_frame().await;
    }
}
