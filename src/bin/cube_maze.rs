use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Cube Maze Game - Hard Mode".to_string(),
        window_width: 645,
        window_height: 795,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();
    cube_maze::maze::app::run().await;
}
