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

use crate::{position::Direction, ui::point_f::PointF};
use macroquad::prelude::*;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Press and release closer than this (in pixels) count as a click.
const CLICK_TOLERANCE: f32 = 5.0;

pub struct Input {
    direction_intention: Option<Direction>,
    confirm: bool,
    mouse_position: PointF,
    clicked_position: Option<PointF>,

    mouse_press_position: Option<PointF>,
}

pub struct InputSnapshot {
    pub direction: Option<Direction>,
    pub confirm: bool,
    pub click: Option<PointF>,
    pub mouse: PointF,
}

impl Input {
    fn handle_keyboard_input(&mut self) {
        let mut direction = None;

        if is_key_pressed(KeyCode::Right) {
            direction = Some(Direction::Right);
        }
        if is_key_pressed(KeyCode::Left) {
            direction = Some(Direction::Left);
        }
        if is_key_pressed(KeyCode::Up) {
            direction = Some(Direction::Up);
        }
        if is_key_pressed(KeyCode::Down) {
            direction = Some(Direction::Down);
        }

        self.direction_intention = direction;
        self.confirm = is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Escape);
    }

    fn handle_mouse_input(&mut self) {
        let mouse_pos_tuple = mouse_position();
        self.mouse_position = PointF::new(mouse_pos_tuple.0, mouse_pos_tuple.1);
        if is_mouse_button_pressed(MouseButton::Left) {
            self.mouse_press_position = Some(self.mouse_position);
        }
        if is_mouse_button_released(MouseButton::Left) {
            if let Some(press_pos) = self.mouse_press_position.take() {
                self.clicked_position = is_click(press_pos, self.mouse_position).then_some(press_pos);
            }
        }
    }

    pub fn poll() -> InputSnapshot {
        let mut input = INPUT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        input.handle_keyboard_input();
        input.handle_mouse_input();
        InputSnapshot {
            direction: input.direction_intention,
            confirm: input.confirm,
            click: input.clicked_position.take(), // consumes click for this frame
            mouse: input.mouse_position,
        }
    }
}

fn is_click(press: PointF, release: PointF) -> bool {
    (release.x - press.x).abs() < CLICK_TOLERANCE && (release.y - press.y).abs() < CLICK_TOLERANCE
}

static INPUT: Lazy<Mutex<Input>> = Lazy::new(|| {
    Mutex::new(Input {
        direction_intention: None,
        confirm: false,
        mouse_position: PointF::zero(),
        clicked_position: None,
        mouse_press_position: None,
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drags_are_not_clicks() {
        assert!(is_click(PointF::new(10.0, 10.0), PointF::new(14.0, 6.5)));
        assert!(!is_click(PointF::new(10.0, 10.0), PointF::new(15.0, 10.0)));
    }
}
