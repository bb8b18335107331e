use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Circular Tic Tac Toe".to_string(),
        window_width: 600,
        window_height: 640,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();
    cube_maze::rings::app::run().await;
}
