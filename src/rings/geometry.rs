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

use std::f32::consts::TAU;

use crate::rings::board::{Cell, RING_COUNT, SLICE_COUNT};
use crate::ui::point_f::PointF;

/// Screen placement of the board: a centre point and the outer radius of
/// every ring. Angles follow screen coordinates (y grows downward), so slice
/// indices increase clockwise from the positive x axis.
#[derive(Clone, Debug)]
pub struct BoardGeometry {
    pub center: PointF,
    pub radii: [f32; RING_COUNT],
}

impl BoardGeometry {
    pub fn new(center: PointF, radii: [f32; RING_COUNT]) -> Self {
        Self { center, radii }
    }

    pub fn slice_angle() -> f32 {
        TAU / SLICE_COUNT as f32
    }

    pub fn outer_radius(&self) -> f32 {
        self.radii[RING_COUNT - 1]
    }

    pub fn inner_radius(&self, ring: usize) -> f32 {
        if ring == 0 { 0.0 } else { self.radii[ring - 1] }
    }

    /// Maps a pointer position to the cell under it, `None` outside the
    /// outermost ring.
    pub fn cell_at(&self, point: PointF) -> Option<Cell> {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        let distance = (dx * dx + dy * dy).sqrt();

        let ring = self.radii.iter().position(|&r| distance <= r)?;

        let mut angle = dy.atan2(dx);
        if angle < 0.0 {
            angle += TAU;
        }
        let slice = ((angle / Self::slice_angle()) as usize).min(SLICE_COUNT - 1);

        Some(Cell::new(ring, slice))
    }

    /// Midpoint of a cell, where its marker is drawn.
    pub fn cell_center(&self, cell: Cell) -> PointF {
        let angle = (cell.slice as f32 + 0.5) * Self::slice_angle();
        let radius = (self.inner_radius(cell.ring) + self.radii[cell.ring]) / 2.0;
        PointF::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }

    /// Outer end of the spoke that starts slice `slice`.
    pub fn spoke_end(&self, slice: usize) -> PointF {
        let angle = slice as f32 * Self::slice_angle();
        PointF::new(
            self.center.x + self.outer_radius() * angle.cos(),
            self.center.y + self.outer_radius() * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        BoardGeometry::new(PointF::new(300.0, 300.0), [60.0, 110.0, 160.0, 210.0])
    }

    #[test]
    fn click_straight_up_lands_in_slice_six() {
        assert_eq!(geometry().cell_at(PointF::new(300.0, 250.0)), Some(Cell::new(0, 6)));
    }

    #[test]
    fn ring_boundaries_are_inclusive() {
        let g = geometry();
        assert_eq!(g.cell_at(PointF::new(360.0, 300.0)), Some(Cell::new(0, 0)));
        assert_eq!(g.cell_at(PointF::new(361.0, 300.0)), Some(Cell::new(1, 0)));
        assert_eq!(g.cell_at(PointF::new(300.0, 510.0)), Some(Cell::new(3, 2)));
    }

    #[test]
    fn outside_the_board_is_ignored() {
        assert_eq!(geometry().cell_at(PointF::new(300.0, 511.0)), None);
        assert_eq!(geometry().cell_at(PointF::new(0.0, 0.0)), None);
    }

    #[test]
    fn quadrants_map_to_slices() {
        let g = geometry();
        // down-right of centre, just below the x axis
        assert_eq!(g.cell_at(PointF::new(400.0, 310.0)).map(|c| c.slice), Some(0));
        // just above the x axis on the right wraps to the last slice
        assert_eq!(g.cell_at(PointF::new(400.0, 290.0)).map(|c| c.slice), Some(7));
        // left of centre
        assert_eq!(g.cell_at(PointF::new(200.0, 310.0)).map(|c| c.slice), Some(3));
        assert_eq!(g.cell_at(PointF::new(200.0, 290.0)).map(|c| c.slice), Some(4));
    }

    #[test]
    fn cell_center_maps_back_to_its_cell() {
        let g = geometry();
        for ring in 0..RING_COUNT {
            for slice in 0..SLICE_COUNT {
                let cell = Cell::new(ring, slice);
                assert_eq!(g.cell_at(g.cell_center(cell)), Some(cell));
            }
        }
    }
}
