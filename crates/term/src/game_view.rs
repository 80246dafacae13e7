//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The view owns the on-screen geometry. [`GameView::layout`] hands the same
//! geometry to the core so slide targets land exactly on the cells drawn here.

use crate::core::{GameSnapshot, GridLayout, TileView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, GameState, Vec2, BOARD_SIZE};

/// Width of the score panel to the right of the board.
const PANEL_W: u16 = 16;

const PAGE_BG: Rgb = Rgb::new(250, 248, 239);
const TEXT: Rgb = Rgb::new(119, 110, 101);
const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_CELL: Rgb = Rgb::new(205, 193, 180);
const OVERLAY_BG: Rgb = Rgb::new(238, 228, 218);

const HELP_LINES: [&str; 10] = [
    "HOW TO PLAY",
    "",
    "Use the arrow keys, WASD or",
    "hjkl to move the tiles. Tiles",
    "with the same number merge",
    "into one when they touch.",
    "Add them up to reach 2048!",
    "",
    "n  new game   Esc  back",
    "q  quit",
];

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

/// Screen drawn on top of the board.
///
/// A lost game always shows its own banner regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
    Won,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    gap_w: u16,
    gap_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap_w: 1,
            gap_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16, gap_w: u16, gap_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            gap_w,
            gap_h,
        }
    }

    /// Tile geometry relative to the board's top-left corner.
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(
            Vec2::new(self.gap_w as f32, self.gap_h as f32),
            Vec2::new(self.cell_w as f32, self.cell_h as f32),
            Vec2::new(self.gap_w as f32, self.gap_h as f32),
        )
    }

    /// Board size in terminal cells, gaps included.
    pub fn board_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        (
            n * self.cell_w + (n + 1) * self.gap_w,
            n * self.cell_h + (n + 1) * self.gap_h,
        )
    }

    /// Top-left corner of the board within `viewport`.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (board_w, board_h) = self.board_size();
        let total_w = board_w + 2 + PANEL_W;
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(board_h) / 2,
        )
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (board_w, board_h) = self.board_size();
        let (start_x, start_y) = self.board_origin(viewport);
        let layout = self.layout();

        fb.fill_rect(
            start_x,
            start_y,
            board_w,
            board_h,
            ' ',
            CellStyle::new(TEXT, BOARD_BG),
        );

        for coord in Coord::all() {
            let pos = layout.position(coord);
            fb.fill_rect(
                start_x + pos.x as u16,
                start_y + pos.y as u16,
                self.cell_w,
                self.cell_h,
                ' ',
                CellStyle::new(TEXT, EMPTY_CELL),
            );
        }

        // Still tiles first so sliding ones are drawn on top.
        for moving_pass in [false, true] {
            for tile in snap.tiles.iter() {
                if (tile.position != layout.position(tile.coord)) == moving_pass {
                    self.draw_tile(fb, start_x, start_y, tile);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + board_w + 2, start_y);

        if snap.state == GameState::Lose {
            self.draw_banner(fb, start_x, start_y, &["GAME OVER", "", "n  new game"]);
        } else {
            match overlay {
                Overlay::None => {}
                Overlay::Help => self.draw_banner(fb, start_x, start_y, &HELP_LINES),
                Overlay::Won => self.draw_banner(
                    fb,
                    start_x,
                    start_y,
                    &["YOU WIN!", "", "Esc  keep going", "n    new game"],
                ),
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, tile: &TileView) {
        // Barely-started pops are not worth a glyph.
        if tile.scale < 0.15 {
            return;
        }
        let (bg, fg) = tile_colors(tile.value);
        let style = CellStyle::new(fg, bg).bold();

        let cw = self.cell_w as f32;
        let ch = self.cell_h as f32;
        let w = (cw * tile.scale).round().max(1.0);
        let h = (ch * tile.scale).round().max(1.0);
        let x = (start_x as f32 + tile.position.x + (cw - w) / 2.0).round() as i32;
        let y = (start_y as f32 + tile.position.y + (ch - h) / 2.0).round() as i32;
        let (w, h) = (w as i32, h as i32);

        fb.fill_rect_clipped(x, y, w, h, ' ', style);

        let label_y = y + h / 2;
        let digits = digit_count(tile.magnitude) as i32;
        if digits <= w && x >= 0 && label_y >= 0 {
            let label_x = x + (w - digits) / 2;
            fb.put_u32(label_x as u16, label_y as u16, tile.magnitude, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let title = CellStyle::new(TEXT, PAGE_BG).bold();
        let label = CellStyle::new(Rgb::new(238, 228, 218), BOARD_BG).bold();
        let value = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
        let hint = CellStyle::new(TEXT, PAGE_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "2048", title);
        y = y.saturating_add(2);

        for (name, number) in [("SCORE", snap.score), ("BEST", snap.best)] {
            fb.fill_rect(panel_x, y, PANEL_W - 2, 2, ' ', label);
            fb.put_str_centered(panel_x, y, PANEL_W - 2, name, label);
            let digits = digit_count(number);
            fb.put_u32(panel_x + (PANEL_W - 2).saturating_sub(digits) / 2, y + 1, number, value);
            y = y.saturating_add(3);
        }

        for line in ["n  new game", "?  how to play", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Centered text box over the board.
    fn draw_banner(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, lines: &[&str]) {
        let (board_w, board_h) = self.board_size();
        let style = CellStyle::new(TEXT, OVERLAY_BG);
        let box_h = (lines.len() as u16 + 2).min(board_h);
        let box_y = start_y + (board_h - box_h) / 2;

        fb.fill_rect(start_x, box_y, board_w, box_h, ' ', style);
        for (i, line) in lines.iter().enumerate() {
            let row = box_y + 1 + i as u16;
            if row >= box_y + box_h {
                break;
            }
            let line_style = if i == 0 { style.bold() } else { style };
            fb.put_str_centered(start_x, row, board_w, line, line_style);
        }
    }
}

/// Background and text colors per tile value.
pub fn tile_colors(value: u8) -> (Rgb, Rgb) {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    match value {
        1 => (Rgb::new(238, 228, 218), dark),
        2 => (Rgb::new(238, 225, 201), dark),
        3 => (Rgb::new(243, 178, 122), light),
        4 => (Rgb::new(246, 150, 100), light),
        5 => (Rgb::new(247, 124, 95), light),
        6 => (Rgb::new(247, 95, 59), light),
        7 => (Rgb::new(237, 208, 115), light),
        8 => (Rgb::new(237, 204, 98), light),
        9 => (Rgb::new(237, 201, 80), light),
        10 => (Rgb::new(237, 197, 63), light),
        11 => (Rgb::new(237, 194, 46), light),
        _ => (Rgb::new(60, 58, 50), Rgb::new(255, 255, 255)),
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameConfig, SimpleRng};

    fn board(values: [[u8; 4]; 4], view: &GameView) -> Board {
        Board::from_values(
            values,
            GameConfig::default().with_layout(view.layout()),
            SimpleRng::new(1),
        )
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn board_size_includes_gaps() {
        let view = GameView::default();
        assert_eq!(view.board_size(), (33, 17));
    }

    #[test]
    fn layout_matches_drawn_cells() {
        let view = GameView::default();
        let layout = view.layout();
        assert_eq!(layout.position(Coord::new(0, 0)), Vec2::new(1.0, 1.0));
        assert_eq!(layout.position(Coord::new(3, 3)), Vec2::new(25.0, 13.0));
    }

    #[test]
    fn tiles_show_their_magnitude() {
        let view = GameView::default();
        let b = board([[1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 11, 0], [0, 0, 0, 0]], &view);
        let fb = view.render(&b.snapshot(), Overlay::None, Viewport::new(80, 24));
        let text = screen_text(&fb);
        assert!(text.contains("2048"));
        assert!(text.contains(" 2 "));
    }

    #[test]
    fn tile_label_sits_in_its_cell() {
        let view = GameView::default();
        let b = board([[0, 0, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], &view);
        let viewport = Viewport::new(80, 24);
        let fb = view.render(&b.snapshot(), Overlay::None, viewport);

        let (sx, sy) = view.board_origin(viewport);
        let pos = view.layout().position(Coord::new(1, 1));
        // Value 3 shows "8" in the middle of a 7x3 tile.
        let cell = fb.get(sx + pos.x as u16 + 3, sy + pos.y as u16 + 1).unwrap();
        assert_eq!(cell.ch, '8');
        assert_eq!(cell.style.bg, tile_colors(3).0);
    }

    #[test]
    fn side_panel_shows_score() {
        let view = GameView::default();
        let mut b = board([[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]], &view);
        b.apply_move(crate::types::Direction::Left);
        let fb = view.render(&b.snapshot(), Overlay::None, Viewport::new(80, 24));
        let text = screen_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("BEST"));
        assert!(text.contains('4'));
    }

    #[test]
    fn lost_game_shows_banner() {
        let view = GameView::default();
        let b = board([[1, 2, 3, 4], [2, 3, 4, 1], [3, 4, 1, 2], [4, 1, 2, 3]], &view);
        let fb = view.render(&b.snapshot(), Overlay::Help, Viewport::new(80, 24));
        let text = screen_text(&fb);
        assert!(text.contains("GAME OVER"));
        assert!(!text.contains("HOW TO PLAY"));
    }

    #[test]
    fn overlays_render_their_text() {
        let view = GameView::default();
        let b = board([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]], &view);
        let snap = b.snapshot();

        let help = screen_text(&view.render(&snap, Overlay::Help, Viewport::new(80, 24)));
        assert!(help.contains("HOW TO PLAY"));

        let won = screen_text(&view.render(&snap, Overlay::Won, Viewport::new(80, 24)));
        assert!(won.contains("YOU WIN!"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let b = board([[1, 2, 3, 4], [0; 4], [0; 4], [5, 6, 7, 8]], &view);
        let fb = view.render(&b.snapshot(), Overlay::Help, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }

    #[test]
    fn digit_count_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(2048), 4);
        assert_eq!(digit_count(131072), 6);
    }
}
