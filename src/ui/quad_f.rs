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

use crate::ui::point_f::PointF;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl QuadF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        QuadF { x, y, w, h }
    }

    /// A `w` x `h` quad centred on `center`.
    pub fn centered(center: PointF, w: f32, h: f32) -> Self {
        QuadF::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn center(&self) -> PointF {
        PointF::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn contains(&self, point: PointF) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let quad = QuadF::new(10.0, 20.0, 100.0, 30.0);
        assert!(quad.contains(PointF::new(10.0, 20.0)));
        assert!(quad.contains(PointF::new(109.9, 49.9)));
        assert!(!quad.contains(PointF::new(110.0, 25.0)));
        assert!(!quad.contains(PointF::new(50.0, 50.0)));
    }

    #[test]
    fn centered_round_trips() {
        let quad = QuadF::centered(PointF::new(300.0, 300.0), 200.0, 100.0);
        assert_eq!(quad, QuadF::new(200.0, 250.0, 200.0, 100.0));
        assert_eq!(quad.center(), PointF::new(300.0, 300.0));
    }
}
