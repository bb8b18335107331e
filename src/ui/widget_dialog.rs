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

use macroquad::prelude::*;

use crate::ui::{point_f::PointF, quad_f::QuadF};

const TITLE_FONT_SIZE: f32 = 30.0;
const MESSAGE_FONT_SIZE: u16 = 20;

/// Modal message box. While visible the game underneath takes no input;
/// Enter or a click dismisses it.
pub struct WidgetDialog {
    pub title: String,
    pub message: String,
    pub visible: bool,
    pub border_color: Color,
}

impl WidgetDialog {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            visible: false,
            border_color: WHITE,
        }
    }

    pub fn show(&mut self, title: &str, message: &str) {
        self.title = title.to_string();
        self.message = message.to_string();
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hides the dialog on confirm or click. Returns whether it was dismissed.
    pub fn handle_input(&mut self, confirm: bool, click: Option<PointF>) -> bool {
        if self.visible && (confirm || click.is_some()) {
            self.visible = false;
            return true;
        }
        false
    }

    pub fn draw(&self) {
        if !self.visible {
            return;
        }

        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.6));

        let message_dim = measure_text(&self.message, None, MESSAGE_FONT_SIZE, 1.0);
        let width = (message_dim.width + 60.0).max(320.0);
        let quad = QuadF::centered(PointF::new(screen_width() / 2.0, screen_height() / 2.0), width, 150.0);

        draw_rectangle(quad.x, quad.y, quad.w, quad.h, Color::new(0.1, 0.1, 0.24, 1.0));
        draw_rectangle_lines(quad.x, quad.y, quad.w, quad.h, 3.0, self.border_color);

        let title_dim = measure_text(&self.title, None, TITLE_FONT_SIZE as u16, 1.0);
        draw_text(&self.title, quad.center().x - title_dim.width / 2.0, quad.y + 45.0, TITLE_FONT_SIZE, self.border_color);
        draw_text(
            &self.message,
            quad.center().x - message_dim.width / 2.0,
            quad.y + 85.0,
            MESSAGE_FONT_SIZE as f32,
            WHITE,
        );

        let hint = "Press Enter or click to continue";
        let hint_dim = measure_text(hint, None, 16, 1.0);
        draw_text(hint, quad.center().x - hint_dim.width / 2.0, quad.y + 125.0, 16.0, GRAY);
    }
}

impl fmt::Debug for WidgetDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetDialog")
            .field("title", &self.title)
            .field("visible", &self.visible)
            .finish()
    }
}
