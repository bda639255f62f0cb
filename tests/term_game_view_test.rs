use tui_lifewar::core::{GameSession, GameSnapshot};
use tui_lifewar::term::{AnchorY, FrameBuffer, GameView, StatusView, Viewport};
use tui_lifewar::types::{Outcome, Player};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn snapshot_after(size: usize, moves: &[(i32, i32)]) -> GameSnapshot {
    let mut session = GameSession::new(size);
    for &(row, col) in moves {
        session.apply_move(row, col).unwrap();
    }
    session.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot_after(3, &[]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 3 label columns + (3 cells * 2 + 2) frame = 11 wide; 1 label row + 5 tall.
    let fb = view.render(&snap, StatusView::default(), Viewport::new(11, 6));

    assert_eq!(fb.get(3, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(10, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(3, 5).unwrap().ch, '└');
    assert_eq!(fb.get(10, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_labels() {
    let snap = snapshot_after(3, &[]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, StatusView::default(), Viewport::new(11, 6));

    let text = screen_text(&fb);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "    0 1 2  ");
    assert!(lines[2].starts_with(" 0 │"));
    assert!(lines[4].starts_with(" 2 │"));
}

#[test]
fn term_view_draws_player_glyphs_at_cell_origin() {
    let snap = snapshot_after(5, &[(0, 0), (4, 3)]);
    let view = GameView::default();
    let vp = Viewport::new(40, 12);
    let fb = view.render(&snap, StatusView::default(), vp);

    let (x, y) = view.cell_origin(5, vp, 0, 0);
    assert_eq!(fb.get(x, y).unwrap().ch, 'O');
    let (x, y) = view.cell_origin(5, vp, 4, 3);
    assert_eq!(fb.get(x, y).unwrap().ch, 'x');
    let (x, y) = view.cell_origin(5, vp, 2, 2);
    assert_eq!(fb.get(x, y).unwrap().ch, '·');
}

#[test]
fn term_view_highlights_cursor() {
    let snap = snapshot_after(5, &[]);
    let view = GameView::default();
    let vp = Viewport::new(40, 12);

    let plain = view.render(&snap, StatusView::default(), vp);
    let with_cursor = view.render(
        &snap,
        StatusView {
            cursor: Some((1, 2)),
            message: None,
        },
        vp,
    );

    let (x, y) = view.cell_origin(5, vp, 1, 2);
    let before = plain.get(x, y).unwrap();
    let after = with_cursor.get(x, y).unwrap();
    assert_eq!(before.ch, after.ch);
    assert_ne!(before.style.bg, after.style.bg);

    let (x, y) = view.cell_origin(5, vp, 0, 0);
    assert_eq!(plain.get(x, y), with_cursor.get(x, y));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = snapshot_after(5, &[(0, 0), (4, 4)]);
    let view = GameView::default();
    let fb = view.render(
        &snap,
        StatusView {
            cursor: None,
            message: Some("Occupied!"),
        },
        Viewport::new(60, 30),
    );

    let all = screen_text(&fb);
    assert!(all.contains("ROUND"));
    assert!(all.contains("TURN"));
    assert!(all.contains("Player 1 O"));
    assert!(all.contains("WARM-UP"));
    assert!(all.contains("2 left"));
    assert!(all.contains("CELLS"));
    assert!(all.contains("Occupied!"));
}

#[test]
fn term_view_hides_side_panel_when_narrow() {
    let snap = snapshot_after(5, &[]);
    let fb = GameView::default().render(&snap, StatusView::default(), Viewport::new(16, 8));
    assert!(!screen_text(&fb).contains("ROUND"));
}

#[test]
fn term_view_shows_winner_overlay_only_after_warmup() {
    // Raw winner after one move, but the game is not over yet.
    let early = snapshot_after(5, &[(2, 2)]);
    assert_eq!(early.outcome, Outcome::Winner(Player::Player1));
    let fb = GameView::default().render(&early, StatusView::default(), Viewport::new(60, 30));
    assert!(!screen_text(&fb).contains("WINS"));

    let over = snapshot_after(5, &[(0, 0), (4, 4), (0, 1), (4, 3), (1, 0)]);
    assert_eq!(over.final_outcome, Outcome::Winner(Player::Player1));
    let fb = GameView::default().render(&over, StatusView::default(), Viewport::new(60, 30));
    let all = screen_text(&fb);
    assert!(all.contains("PLAYER 1 WINS"));
    assert!(all.contains("r restarts, q quits"));
    assert!(all.contains("AUTOMATON"));
}
