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

use macroquad::prelude::Color;

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

pub const BACKGROUND: Color = rgb(0x0a, 0x0a, 0x2e);
pub const FOG: Color = BACKGROUND;
pub const WALL: Color = rgb(0x4a, 0x4a, 0x8a);
pub const WALL_OUTLINE: Color = rgb(0x3a, 0x3a, 0x7a);
pub const FLOOR: Color = rgb(0x1a, 0x1a, 0x3e);
pub const EXIT: Color = rgb(0xff, 0x00, 0x00);
pub const BUTTON: Color = rgb(0x4a, 0x4a, 0x8a);
pub const HINT_BUTTON: Color = rgb(0x6a, 0x6a, 0x9a);
pub const TITLE: Color = rgb(0xff, 0x6b, 0x6b);
pub const INSTRUCTIONS: Color = rgb(0xcc, 0xcc, 0xcc);

pub const TIMER_CALM: Color = rgb(0xff, 0x6b, 0x6b);
pub const TIMER_WARNING: Color = rgb(0xff, 0xaa, 0x00);
pub const TIMER_CRITICAL: Color = rgb(0xff, 0x00, 0x00);

pub const SKIN: Color = rgb(0xff, 0xff, 0xff);
pub const EYES: Color = rgb(0x00, 0x00, 0x00);
pub const TUNIC: Color = rgb(0x41, 0x69, 0xe1);
pub const ITEM: Color = rgb(0x8b, 0x45, 0x13);

pub const RING_BACKGROUND: Color = rgb(0xff, 0xff, 0xff);
pub const RING_LINES: Color = rgb(0x00, 0x00, 0x00);
pub const MARKER_BLUE: Color = rgb(0x00, 0x00, 0xff);
pub const MARKER_RED: Color = rgb(0xff, 0x00, 0x00);
