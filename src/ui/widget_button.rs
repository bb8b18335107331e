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

const BUTTON_FONT_SIZE: u16 = 20;

pub struct WidgetButton {
    pub quad: QuadF,
    pub text: String,
    pub color: Color,
    pub hovered: bool,
    pub hovered_color: Color,
    pub enabled: bool,
}

impl WidgetButton {
    pub fn new(quad: QuadF, text: &str, color: Color) -> Self {
        Self {
            quad,
            text: text.to_string(),
            color,
            hovered: false,
            hovered_color: Color::new(0.55, 0.55, 0.75, 1.0),
            enabled: true,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
        }
    }

    pub fn update_hover(&mut self, mouse: PointF) {
        self.hovered = self.enabled && self.quad.contains(mouse);
    }

    /// True when `click` landed on an enabled button.
    pub fn is_clicked(&self, click: Option<PointF>) -> bool {
        self.enabled && click.is_some_and(|point| self.quad.contains(point))
    }

    pub fn draw(&self) {
        let fill = if self.hovered { self.hovered_color } else { self.color };
        let fill = if self.enabled { fill } else { Color::new(fill.r, fill.g, fill.b, 0.4) };
        draw_rectangle(self.quad.x, self.quad.y, self.quad.w, self.quad.h, fill);
        draw_rectangle_lines(self.quad.x, self.quad.y, self.quad.w, self.quad.h, 2.0, WHITE);

        let dim = measure_text(&self.text, None, BUTTON_FONT_SIZE, 1.0);
        let center = self.quad.center();
        draw_text(
            &self.text,
            center.x - dim.width / 2.0,
            center.y + dim.offset_y / 2.0,
            BUTTON_FONT_SIZE as f32,
            WHITE,
        );
    }
}

impl fmt::Debug for WidgetButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetButton").field("text", &self.text).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_button_ignores_clicks() {
        let mut button = WidgetButton::new(QuadF::new(0.0, 0.0, 100.0, 30.0), "Hint (3)", BLUE);
        let inside = Some(PointF::new(50.0, 15.0));
        assert!(button.is_clicked(inside));
        assert!(!button.is_clicked(Some(PointF::new(150.0, 15.0))));
        assert!(!button.is_clicked(None));

        button.enabled = false;
        assert!(!button.is_clicked(inside));
        button.update_hover(PointF::new(50.0, 15.0));
        assert!(!button.hovered);
    }
}
