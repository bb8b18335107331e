use cube_maze::config::MazeConfig;
use cube_maze::maps::map_generator::{GenerationParams, MapGenerator};
use cube_maze::maps::maze::Maze;
use cube_maze::maps::navigator::Navigator;
use cube_maze::maze::game::MazeGame;
use cube_maze::position::{Direction, Position};
use cube_maze::tile::TileKind;
use cube_maze::tile_map::TileMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn every_generated_maze_is_solvable() {
    let sizes = [(25, 25), (5, 5), (11, 7), (24, 24), (31, 15), (6, 9)];
    for seed in 0..40 {
        for &(width, height) in &sizes {
            let mut rng = StdRng::seed_from_u64(seed);
            let params = GenerationParams { width, height, ..Default::default() };
            let maze = Maze::generate(&params, &mut rng);

            assert_eq!(maze.start(), Position::new(1, 1));
            assert_eq!(maze.exit(), Position::new(width - 2, height - 2));
            assert_eq!(maze.tiles()[maze.start()], TileKind::Floor);
            assert_eq!(maze.tiles()[maze.exit()], TileKind::Floor);
            assert!(maze.is_solvable(), "seed {seed}, {width}x{height}");
            assert!(maze.solution_length().is_some());
        }
    }
}

#[test]
fn bias_extremes_stay_solvable() {
    for seed in 0..20 {
        for bias in [0.0, 1.0] {
            let mut rng = StdRng::seed_from_u64(seed);
            let params = GenerationParams { dead_end_bias: bias, ..Default::default() };
            assert!(Maze::generate(&params, &mut rng).is_solvable());
        }
    }
}

#[test]
fn repair_connects_disconnected_regions() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut tiles = TileMap::filled(25, 25, TileKind::Wall);
    let start = Position::new(1, 1);
    let exit = Position::new(23, 23);
    // two isolated pockets around start and exit
    tiles[start] = TileKind::Floor;
    tiles[Position::new(2, 1)] = TileKind::Floor;
    tiles[exit] = TileKind::Floor;
    tiles[Position::new(22, 23)] = TileKind::Floor;
    assert!(!Navigator::is_reachable(&tiles, start, exit));

    assert!(MapGenerator::ensure_solvable(&mut tiles, start, exit, &mut rng));
    assert!(Navigator::is_reachable(&tiles, start, exit));
}

#[test]
fn random_walks_only_touch_floor() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = MazeGame::new(MazeConfig::default(), &mut rng, 0.0);

        for step in 0..2000 {
            let direction = Direction::ALL[rng.gen_range(0..4)];
            let outcome = game.move_player(direction, step as f64 * 0.01);
            let pos = game.player().pos();
            assert_eq!(game.maze().tiles()[pos], TileKind::Floor);
            if outcome.is_some() {
                break;
            }
        }
    }
}

#[test]
fn visited_cells_remain_visible_from_anywhere() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = MazeGame::new(MazeConfig::default(), &mut rng, 0.0);
    let path = Navigator::shortest_path(game.maze().tiles(), game.maze().start(), game.maze().exit()).unwrap();

    let mut visited = Vec::new();
    for pair in path.windows(2) {
        visited.push(pair[0]);
        let direction = Direction::ALL
            .into_iter()
            .find(|&dir| pair[0].step(dir, 25, 25) == Some(pair[1]))
            .unwrap();
        game.move_player(direction, 1.0);

        for &cell in &visited {
            assert!(game.is_visible(cell));
        }
    }
    assert!(game.fog().visited_count() >= visited.len());
}

#[test]
fn hidden_cells_are_far_and_unvisited() {
    let mut rng = StdRng::seed_from_u64(8);
    let game = MazeGame::new(MazeConfig::default(), &mut rng, 0.0);
    let player = game.player().pos();

    for x in 0..25 {
        for y in 0..25 {
            let cell = Position::new(x, y);
            let expected = cell.manhattan_distance(&player) <= 3 || cell == player;
            assert_eq!(game.is_visible(cell), expected, "{cell:?}");
        }
    }
}
