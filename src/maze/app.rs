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
extern crate rand as external_rand;

use external_rand::thread_rng;
use tracing::info;

use crate::config::{self, MAZE_CONFIG_PATH, MazeConfig};
use crate::graphics::maze_view::{self, MazeLayout};
use crate::graphics::palette;
use crate::input::Input;
use crate::maze::game::{MazeGame, MazeOutcome};
use crate::ui::quad_f::QuadF;
use crate::ui::widget_button::WidgetButton;
use crate::ui::widget_dialog::WidgetDialog;

const BUTTON_WIDTH: f32 = 110.0;
const BUTTON_HEIGHT: f32 = 34.0;

fn hint_label(hints_left: u32) -> String {
    format!("Hint ({hints_left})")
}

fn show_outcome(dialog: &mut WidgetDialog, outcome: MazeOutcome) {
    dialog.border_color = match outcome {
        MazeOutcome::Won { .. } => GREEN,
        MazeOutcome::TimeUp => palette::TIMER_CRITICAL,
    };
    dialog.show(outcome.title(), &outcome.message());
}

pub async fn run() {
    let config: MazeConfig = config::load_or_default(MAZE_CONFIG_PATH).await;
    let layout = MazeLayout::new(&config);
    let (window_w, window_h) = layout.window_size();
    request_new_screen_size(window_w, window_h);

    let mut rng = thread_rng();
    let mut game = MazeGame::new(config, &mut rng, get_time());
    let mut dialog = WidgetDialog::new();

    let center_x = layout.offset.x + layout.board_w / 2.0;
    let buttons_y = layout.footer_top() + 45.0;
    let mut new_maze_button = WidgetButton::new(
        QuadF::new(center_x - BUTTON_WIDTH - 5.0, buttons_y, BUTTON_WIDTH, BUTTON_HEIGHT),
        "New Maze",
        palette::BUTTON,
    );
    let mut hint_button = WidgetButton::new(
        QuadF::new(center_x + 5.0, buttons_y, BUTTON_WIDTH, BUTTON_HEIGHT),
        &hint_label(game.hints_left()),
        palette::HINT_BUTTON,
    );

    loop {
        let now = get_time();
        let input = Input::poll();

        if dialog.is_visible() {
            if dialog.handle_input(input.confirm, input.click) {
                info!("starting a new maze");
                game.reset(&mut rng, get_time());
            }
        } else {
            if let Some(direction) = input.direction {
                if let Some(outcome) = game.move_player(direction, now) {
                    show_outcome(&mut dialog, outcome);
                }
            }
            if new_maze_button.is_clicked(input.click) {
                info!("new maze requested");
                game.reset(&mut rng, now);
            } else if hint_button.is_clicked(input.click) {
                game.use_hint(now);
            }
        }

        if let Some(outcome) = game.update(now) {
            show_outcome(&mut dialog, outcome);
        }

        hint_button.set_text(&hint_label(game.hints_left()));
        hint_button.enabled = game.is_active() && game.hints_left() > 0;
        new_maze_button.update_hover(input.mouse);
        hint_button.update_hover(input.mouse);

        clear_background(palette::BACKGROUND);
        maze_view::draw_header(&game, &layout);
        maze_view::draw_maze(&game, &layout);
        maze_view::draw_instructions(&layout);
        new_maze_button.draw();
        hint_button.draw();
        dialog.draw();

        next_frame().await;
    }
}
