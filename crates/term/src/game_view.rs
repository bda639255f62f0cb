//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: row labels, the bordered board (column labels on
//! the line above it), then a side panel with round, turn and population.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Outcome, Player};

/// Width reserved for row labels ("99 ")
const ROW_LABEL_W: u16 = 3;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state drawn next to the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView<'a> {
    /// Highlighted (row, col), if any
    pub cursor: Option<(usize, usize)>,
    /// One-line message, e.g. why the last placement was rejected
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corners of the pieces of the layout
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Left edge of the row labels
    x: u16,
    /// Line of the column labels
    y: u16,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: StatusView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.size, viewport);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let label = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(150, 150, 160), PANEL_BG)
        };

        self.draw_labels(fb, snap.size, layout, label);
        self.draw_border(fb, layout, border);

        for row in 0..snap.size {
            for col in 0..snap.size {
                let highlighted = status.cursor == Some((row, col));
                self.draw_cell(fb, layout, row, col, snap.get(row, col), highlighted);
            }
        }

        self.draw_side_panel(fb, snap, status, viewport, layout);

        if let Outcome::Winner(winner) = snap.final_outcome {
            self.draw_overlay_text(fb, layout, winner_banner(winner));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        status: StatusView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    /// Terminal (column, row) of the glyph for board cell (row, col), given
    /// the viewport the board is laid out in.
    pub fn cell_origin(
        &self,
        size: usize,
        viewport: Viewport,
        row: usize,
        col: usize,
    ) -> (u16, u16) {
        let layout = self.layout(size, viewport);
        self.cell_px(layout, row, col)
    }

    fn layout(&self, size: usize, viewport: Viewport) -> Layout {
        let size = u16::try_from(size).unwrap_or(u16::MAX);
        let frame_w = size.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = size.saturating_mul(self.cell_h).saturating_add(2);
        let total_w = ROW_LABEL_W.saturating_add(frame_w);
        let total_h = frame_h.saturating_add(1);

        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            x,
            y,
            frame_x: x.saturating_add(ROW_LABEL_W),
            frame_y: y.saturating_add(1),
            frame_w,
            frame_h,
        }
    }

    fn cell_px(&self, layout: Layout, row: usize, col: usize) -> (u16, u16) {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        (
            layout
                .frame_x
                .saturating_add(1)
                .saturating_add(col.saturating_mul(self.cell_w)),
            layout
                .frame_y
                .saturating_add(1)
                .saturating_add(row.saturating_mul(self.cell_h)),
        )
    }

    fn draw_labels(&self, fb: &mut FrameBuffer, size: usize, layout: Layout, style: CellStyle) {
        for i in 0..size {
            let (px, py) = self.cell_px(layout, i, i);
            // Column digits repeat 0-9; row numbers are right-aligned in two columns.
            fb.put_u32(px, layout.y, (i % 10) as u32, style);
            let row_x = if i < 10 { layout.x + 1 } else { layout.x };
            fb.put_u32(row_x, py, i as u32, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
            ..
        } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + (w - 1), y, '┐', style);
        fb.put_char(x, y + (h - 1), '└', style);
        fb.put_char(x + (w - 1), y + (h - 1), '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + (h - 1), '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + (w - 1), y + dy, '│', style);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        row: usize,
        col: usize,
        cell: Cell,
        highlighted: bool,
    ) {
        let bg = if highlighted { CURSOR_BG } else { BOARD_BG };
        let (ch, style) = match cell.owner() {
            Some(player) => (
                player.glyph(),
                CellStyle {
                    bold: true,
                    ..CellStyle::plain(player_color(player), bg)
                },
            ),
            None => (
                '·',
                CellStyle {
                    dim: true,
                    ..CellStyle::plain(Rgb::new(90, 90, 100), bg)
                },
            ),
        };

        let (px, py) = self.cell_px(layout, row, col);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        status: StatusView<'_>,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "ROUND", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.round, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        let player = snap.current_player;
        let x = fb.put_str(panel_x, y, player.as_str(), value);
        fb.put_char(x.saturating_add(1), y, player.glyph(), player_style(player));
        y = y.saturating_add(2);

        if snap.warmup_remaining > 0 {
            fb.put_str(panel_x, y, "WARM-UP", label);
            y = y.saturating_add(1);
            let x = fb.put_u32(panel_x, y, snap.warmup_remaining, value);
            fb.put_str(x.saturating_add(1), y, "left", value);
        } else {
            fb.put_str(panel_x, y, "AUTOMATON", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "every move", value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CELLS", label);
        for player in Player::ALL {
            y = y.saturating_add(1);
            fb.put_char(panel_x, y, player.glyph(), player_style(player));
            let count = u32::try_from(snap.population.of(player)).unwrap_or(u32::MAX);
            fb.put_u32(panel_x + 2, y, count, value);
        }
        y = y.saturating_add(2);

        if let Some(message) = status.message {
            let warn = CellStyle::plain(Rgb::new(240, 180, 80), PANEL_BG);
            fb.put_str(panel_x, y, message, warn);
            y = y.saturating_add(2);
        }

        let hint = CellStyle {
            dim: true,
            ..value
        };
        if snap.playable() {
            fb.put_str(panel_x, y, "arrows move, space places", hint);
        } else {
            fb.put_str(panel_x, y, "r restarts, q quits", hint);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(120, 40, 40))
        };
        let len = text.chars().count() as u16;
        let x = layout.frame_x + layout.frame_w.saturating_sub(len) / 2;
        let y = layout.frame_y + layout.frame_h / 2;
        fb.put_str(x, y, text, style);
    }
}

fn winner_banner(winner: Player) -> &'static str {
    match winner {
        Player::Player1 => "PLAYER 1 WINS",
        Player::Player2 => "PLAYER 2 WINS",
    }
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::Player1 => Rgb::new(80, 170, 240),
        Player::Player2 => Rgb::new(235, 90, 80),
    }
}

fn player_style(player: Player) -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::plain(player_color(player), PANEL_BG)
    }
}
