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
use tracing::{debug, info};

use crate::clock::{Countdown, DelayedAction, Urgency, format_clock};
use crate::config::MazeConfig;
use crate::maps::fog::FogOfWar;
use crate::maps::maze::Maze;
use crate::player::Player;
use crate::position::{Direction, Position};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MazeOutcome {
    Won { elapsed_secs: f64 },
    TimeUp,
}

impl MazeOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            MazeOutcome::Won { .. } => "Congratulations!",
            MazeOutcome::TimeUp => "Time's Up!",
        }
    }

    pub fn message(&self) -> String {
        match self {
            MazeOutcome::Won { elapsed_secs } => {
                format!("You've solved the maze in {}!", format_clock(elapsed_secs.floor() as u64))
            }
            MazeOutcome::TimeUp => "You ran out of time! Try again.".to_string(),
        }
    }
}

/// Owns one round of the maze: layout, player, fog, clock and hints.
/// Every method takes the current time in seconds so the frame loop drives
/// it with `get_time()` and tests drive it with plain numbers.
pub struct MazeGame {
    config: MazeConfig,
    maze: Maze,
    player: Player,
    fog: FogOfWar,
    countdown: Countdown,
    displayed_secs: u64,
    hints_left: u32,
    hint_restore: DelayedAction,
    active: bool,
}

impl MazeGame {
    pub fn new<R: Rng + ?Sized>(config: MazeConfig, rng: &mut R, now: f64) -> Self {
        let maze = Maze::generate(&config.generation_params(), rng);
        let mut game = Self {
            player: Player::new(maze.start()),
            fog: FogOfWar::new(maze.width(), maze.height(), config.visibility_radius),
            countdown: Countdown::new(config.time_limit_secs, now),
            displayed_secs: config.time_limit_secs.ceil() as u64,
            hints_left: config.hint_count,
            hint_restore: DelayedAction::new(),
            active: true,
            maze,
            config,
        };
        game.fog.mark_visited(game.player.pos());
        info!(width = game.maze.width(), height = game.maze.height(), "new maze");
        game
    }

    /// New layout, fresh clock, hints and fog.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) {
        *self = Self::new(self.config.clone(), rng, now);
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn fog(&self) -> &FogOfWar {
        &self.fog
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn hints_left(&self) -> u32 {
        self.hints_left
    }

    pub fn is_visible(&self, cell: Position) -> bool {
        self.fog.is_visible(cell, self.player.pos())
    }

    /// Remaining seconds as of the last clock tick.
    pub fn displayed_secs(&self) -> u64 {
        self.displayed_secs
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::from_remaining(self.displayed_secs)
    }

    /// Turns the player towards `direction` and steps if the target is floor.
    /// Reaching the exit ends the round.
    pub fn move_player(&mut self, direction: Direction, now: f64) -> Option<MazeOutcome> {
        self.player.face(direction);
        if !self.active {
            return None;
        }

        let target = self.player.pos().step(direction, self.maze.width(), self.maze.height())?;
        if !self.maze.is_walkable(target) {
            return None;
        }

        self.player.set_pos(target);
        self.fog.mark_visited(target);

        if target == self.maze.exit() {
            let elapsed_secs = self.countdown.elapsed(now);
            self.active = false;
            info!(elapsed = %format_clock(elapsed_secs.floor() as u64), "maze solved");
            return Some(MazeOutcome::Won { elapsed_secs });
        }
        None
    }

    /// Widens the reveal radius for a while. A second hint before the first
    /// expires extends the reveal from the later press.
    pub fn use_hint(&mut self, now: f64) -> bool {
        if !self.active || self.hints_left == 0 {
            return false;
        }

        self.hints_left -= 1;
        self.fog.widen(self.config.hint_radius);
        let generation = self.hint_restore.schedule(now, self.config.hint_duration_secs);
        debug!(generation, hints_left = self.hints_left, "hint used");
        true
    }

    /// Clock tick plus pending timed effects. Returns the loss when time runs out.
    pub fn update(&mut self, now: f64) -> Option<MazeOutcome> {
        if let Some(generation) = self.hint_restore.poll(now) {
            debug!(generation, "hint expired");
            self.fog.restore_radius();
        }

        if !self.active {
            return None;
        }

        self.displayed_secs = self.countdown.whole_seconds_remaining(now);

        if self.countdown.is_expired(now) {
            self.active = false;
            info!("maze time up");
            return Some(MazeOutcome::TimeUp);
        }
        None
    }
}
