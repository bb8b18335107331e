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

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::maps::maze::Maze;
use crate::maps::navigator::Navigator;
use crate::position::{Direction, Position};
use crate::tile::TileKind;
use crate::tile_map::TileMap;

#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    /// Chance of steering the carver towards the candidate with the fewest
    /// onward options instead of a uniform pick.
    pub dead_end_bias: f64,
    /// One re-walling attempt per this many cells.
    pub extra_wall_divisor: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            dead_end_bias: 0.3,
            extra_wall_divisor: 50,
        }
    }
}

pub struct MapGenerator {}

impl MapGenerator {
    pub fn generate_map<R: Rng + ?Sized>(params: &GenerationParams, rng: &mut R) -> Maze {
        let (width, height) = (params.width, params.height);
        let start = Maze::start_position();
        let exit = Maze::exit_position(width, height);

        let mut tiles = TileMap::filled(width, height, TileKind::Wall);
        Self::carve_passages(&mut tiles, start, params.dead_end_bias, rng);
        Self::add_extra_walls(&mut tiles, params.extra_wall_divisor, rng);

        tiles[start] = TileKind::Floor;
        tiles[exit] = TileKind::Floor;

        let repaired = Self::ensure_solvable(&mut tiles, start, exit, rng);
        let maze = Maze::new(tiles, start, exit);
        debug!(
            width,
            height,
            floor = maze.tiles().floor_count(),
            solution = ?maze.solution_length(),
            repaired,
            "maze generated"
        );

        maze
    }

    /// Randomized depth-first carving over the odd lattice, two cells per step.
    fn carve_passages<R: Rng + ?Sized>(tiles: &mut TileMap, start: Position, dead_end_bias: f64, rng: &mut R) {
        let mut stack = vec![start];
        tiles[start] = TileKind::Floor;

        while let Some(&current) = stack.last() {
            let candidates = Self::lattice_candidates(tiles, current);
            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let picked = if rng.gen_bool(dead_end_bias) {
                Self::fewest_options(tiles, &candidates)
            } else {
                candidates.choose(rng).copied()
            };
            let Some((next, direction)) = picked else {
                break;
            };

            if let Some(between) = current.step(direction, tiles.width(), tiles.height()) {
                tiles[between] = TileKind::Floor;
            }
            tiles[next] = TileKind::Floor;
            stack.push(next);
        }
    }

    /// Uncarved interior cells two steps away, in up/right/down/left order.
    fn lattice_candidates(tiles: &TileMap, pos: Position) -> Vec<(Position, Direction)> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| {
                pos.offset_by(dir, 2, tiles.width(), tiles.height())
                    .filter(|&next| Self::is_interior(tiles, next) && tiles[next] == TileKind::Wall)
                    .map(|next| (next, dir))
            })
            .collect()
    }

    /// The candidate with the fewest onward options; ties keep the earlier one.
    fn fewest_options(tiles: &TileMap, candidates: &[(Position, Direction)]) -> Option<(Position, Direction)> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&(pos, _)| Self::count_potential_neighbors(tiles, pos))
    }

    fn is_interior(tiles: &TileMap, pos: Position) -> bool {
        pos.x > 0 && pos.y > 0 && pos.x < tiles.width() - 1 && pos.y < tiles.height() - 1
    }

    fn count_potential_neighbors(tiles: &TileMap, pos: Position) -> usize {
        Self::lattice_candidates(tiles, pos).len()
    }

    fn count_adjacent_paths(tiles: &TileMap, pos: Position) -> usize {
        tiles.walkable_neighbors(pos).len()
    }

    /// Re-walls junction cells sampled on even coordinates.
    fn add_extra_walls<R: Rng + ?Sized>(tiles: &mut TileMap, divisor: usize, rng: &mut R) {
        let rows = tiles.height().saturating_sub(3) / 2;
        let cols = tiles.width().saturating_sub(3) / 2;
        if rows == 0 || cols == 0 || divisor == 0 {
            return;
        }

        let attempts = tiles.width() * tiles.height() / divisor;
        for _ in 0..attempts {
            let y = 2 + 2 * rng.gen_range(0..rows);
            let x = 2 + 2 * rng.gen_range(0..cols);
            let pos = Position::new(x, y);
            if tiles[pos] == TileKind::Floor && Self::count_adjacent_paths(tiles, pos) > 2 {
                tiles[pos] = TileKind::Wall;
            }
        }
    }

    /// Carves a direct path when the exit cannot be reached from the start.
    /// Returns whether the repair was needed.
    pub fn ensure_solvable<R: Rng + ?Sized>(tiles: &mut TileMap, start: Position, exit: Position, rng: &mut R) -> bool {
        if Navigator::is_reachable(tiles, start, exit) {
            return false;
        }

        debug!(?start, ?exit, "exit unreachable, carving direct path");
        Self::create_direct_path(tiles, start, exit, rng);
        true
    }

    /// Staircase walk from `start` towards `exit`, only ever moving down or
    /// right, carving every cell it lands on.
    pub fn create_direct_path<R: Rng + ?Sized>(tiles: &mut TileMap, start: Position, exit: Position, rng: &mut R) {
        let mut current = start;
        tiles[current] = TileKind::Floor;

        while current.y < exit.y || current.x < exit.x {
            if current.y < exit.y && rng.gen_bool(0.5) {
                current.y += 1;
            } else if current.x < exit.x {
                current.x += 1;
            } else {
                current.y += 1;
            }
            tiles[current] = TileKind::Floor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lattice_cells_are_carved_everywhere() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = GenerationParams { width: 11, height: 11, ..Default::default() };
        let maze = MapGenerator::generate_map(&params, &mut rng);

        // Every odd/odd room is visited by the carver before backtracking ends.
        for x in (1..10).step_by(2) {
            for y in (1..10).step_by(2) {
                assert_eq!(maze.tiles()[Position::new(x, y)], TileKind::Floor, "room {x},{y}");
            }
        }
    }

    #[test]
    fn border_stays_walled() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = MapGenerator::generate_map(&GenerationParams::default(), &mut rng);
        let tiles = maze.tiles();
        for x in 0..tiles.width() {
            assert_eq!(tiles[Position::new(x, 0)], TileKind::Wall);
            assert_eq!(tiles[Position::new(x, tiles.height() - 1)], TileKind::Wall);
        }
        for y in 0..tiles.height() {
            assert_eq!(tiles[Position::new(0, y)], TileKind::Wall);
            assert_eq!(tiles[Position::new(tiles.width() - 1, y)], TileKind::Wall);
        }
    }

    #[test]
    fn full_bias_still_yields_a_perfect_lattice() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = GenerationParams { width: 9, height: 9, dead_end_bias: 1.0, ..Default::default() };
        let maze = MapGenerator::generate_map(&params, &mut rng);

        // A spanning tree over 16 rooms has 15 connectors.
        assert_eq!(maze.tiles().floor_count(), 16 + 15);
    }

    #[test]
    fn biased_pick_prefers_the_fewest_onward_options() {
        let mut tiles = TileMap::filled(9, 9, TileKind::Wall);
        let current = Position::new(3, 3);
        tiles[current] = TileKind::Floor;

        // (3,1) and (1,3) hug the border with two options each, (5,3) and
        // (3,5) have three.
        let candidates = MapGenerator::lattice_candidates(&tiles, current);
        assert_eq!(candidates.len(), 4);
        assert_eq!(
            MapGenerator::fewest_options(&tiles, &candidates),
            Some((Position::new(3, 1), Direction::Up))
        );

        // Closing off (1,5) leaves (1,3) a single option, so the last
        // candidate wins over the earlier ones.
        tiles[Position::new(1, 5)] = TileKind::Floor;
        let candidates = MapGenerator::lattice_candidates(&tiles, current);
        assert_eq!(
            MapGenerator::fewest_options(&tiles, &candidates),
            Some((Position::new(1, 3), Direction::Left))
        );
        assert_eq!(MapGenerator::fewest_options(&tiles, &[]), None);
    }

    #[test]
    fn junctions_on_even_cells_are_rewalled() {
        let mut rng = StdRng::seed_from_u64(5);
        // On a 5x5 grid the only sampled cell is (2,2).
        let junction = Position::new(2, 2);
        let mut tiles = TileMap::filled(5, 5, TileKind::Wall);
        for pos in [junction, Position::new(1, 2), Position::new(3, 2), Position::new(2, 1)] {
            tiles[pos] = TileKind::Floor;
        }
        MapGenerator::add_extra_walls(&mut tiles, 1, &mut rng);
        assert_eq!(tiles[junction], TileKind::Wall);
        assert_eq!(tiles.floor_count(), 3);

        let mut corridor = TileMap::filled(5, 5, TileKind::Wall);
        for pos in [junction, Position::new(1, 2), Position::new(3, 2)] {
            corridor[pos] = TileKind::Floor;
        }
        let before = corridor.clone();
        MapGenerator::add_extra_walls(&mut corridor, 1, &mut rng);
        assert_eq!(corridor, before);
    }

    #[test]
    fn direct_path_connects_a_walled_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tiles = TileMap::filled(8, 6, TileKind::Wall);
        let start = Position::new(1, 1);
        let exit = Position::new(6, 4);

        assert!(MapGenerator::ensure_solvable(&mut tiles, start, exit, &mut rng));
        assert!(Navigator::is_reachable(&tiles, start, exit));
        // Monotone walk: one cell per unit of distance plus the start.
        assert_eq!(tiles.floor_count(), start.manhattan_distance(&exit) + 1);
    }

    #[test]
    fn solvable_grid_is_left_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tiles = TileMap::filled(5, 5, TileKind::Wall);
        for x in 1..4 {
            tiles[Position::new(x, 1)] = TileKind::Floor;
        }
        for y in 1..4 {
            tiles[Position::new(3, y)] = TileKind::Floor;
        }
        let before = tiles.clone();

        assert!(!MapGenerator::ensure_solvable(&mut tiles, Position::new(1, 1), Position::new(3, 3), &mut rng));
        assert_eq!(tiles, before);
    }
}
