use cube_maze::rings::board::{Cell, Marker, RingBoard};
use cube_maze::rings::game::{RingGame, RingOutcome};
use cube_maze::rings::geometry::BoardGeometry;
use cube_maze::ui::point_f::PointF;

fn board_with(marks: &[(usize, usize, Marker)]) -> RingBoard {
    let mut board = RingBoard::new();
    for &(ring, slice, marker) in marks {
        assert!(board.place(Cell::new(ring, slice), marker));
    }
    board
}

#[test]
fn ring_wrap_around_is_detected() {
    // ring 0 = [A, A, A, _, _, _, A, A]
    let a = Marker::Blue;
    let board = board_with(&[(0, 0, a), (0, 1, a), (0, 2, a), (0, 6, a), (0, 7, a)]);
    assert_eq!(board.winner(), Some(a));
}

#[test]
fn slice_three_column_is_detected() {
    let red = Marker::Red;
    let board = board_with(&[(0, 3, red), (1, 3, red), (2, 3, red), (3, 3, red)]);
    assert_eq!(board.winner(), Some(red));
}

#[test]
fn blue_is_reported_first_when_both_have_runs() {
    let board = board_with(&[
        (0, 0, Marker::Red),
        (1, 0, Marker::Red),
        (2, 0, Marker::Red),
        (3, 0, Marker::Red),
        (0, 4, Marker::Blue),
        (1, 4, Marker::Blue),
        (2, 4, Marker::Blue),
        (3, 4, Marker::Blue),
    ]);
    assert_eq!(board.winner(), Some(Marker::Blue));
}

#[test]
fn clicking_an_occupied_cell_changes_nothing() {
    let mut game = RingGame::new(BoardGeometry::new(PointF::new(300.0, 300.0), [60.0, 110.0, 160.0, 210.0]));
    let up = PointF::new(300.0, 250.0);

    assert_eq!(game.handle_click(up), None);
    assert_eq!(game.board.get(Cell::new(0, 6)), Some(Marker::Blue));
    let before = game.board.clone();

    assert_eq!(game.handle_click(up), None);
    assert_eq!(game.board, before);
    assert_eq!(game.current(), Marker::Red);
}

#[test]
fn clicks_play_a_full_game() {
    let geometry = BoardGeometry::new(PointF::new(300.0, 300.0), [60.0, 110.0, 160.0, 210.0]);
    let mut game = RingGame::new(geometry.clone());

    // Blue walks slice 1 outward, red answers on slice 5.
    let mut outcome = None;
    for ring in 0..4 {
        outcome = game.handle_click(geometry.cell_center(Cell::new(ring, 1)));
        if outcome.is_some() {
            break;
        }
        assert_eq!(game.handle_click(geometry.cell_center(Cell::new(ring, 5))), None);
    }
    assert_eq!(outcome, Some(RingOutcome::Winner(Marker::Blue)));
}
