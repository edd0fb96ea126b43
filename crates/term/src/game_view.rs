//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn with row 0 at the bottom, so screen y grows while grid
//! rows shrink.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, PieceType, SwapRequest};

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

/// Front-end state layered over the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay<'a> {
    pub cursor: Option<Cell>,
    pub selected: Option<Cell>,
    /// Highlight both cells of a suggested move
    pub hint: Option<SwapRequest>,
    /// One-line message under the board
    pub status: Option<&'a str>,
}

const BOARD_BG: Rgb = Rgb::new(28, 28, 38);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
const SELECTED_BG: Rgb = Rgb::new(140, 120, 40);
const HINT_BG: Rgb = Rgb::new(40, 80, 60);

const PIECE_COLORS: [Rgb; 8] = [
    Rgb::new(230, 80, 80),
    Rgb::new(80, 200, 110),
    Rgb::new(90, 140, 240),
    Rgb::new(240, 210, 80),
    Rgb::new(200, 110, 220),
    Rgb::new(80, 210, 220),
    Rgb::new(255, 160, 60),
    Rgb::new(220, 220, 220),
];

const PIECE_GLYPHS: [char; 8] = ['●', '■', '▲', '◆', '★', '♥', '♣', '✚'];

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 keeps cells roughly square in common terminal fonts.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: &Overlay<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: &Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let board_w = snap.columns as u16 * self.cell_w;
        let board_h = snap.rows as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        // Leave room for the status line under the frame.
        let start_x = viewport.width.saturating_sub(frame_w + 20) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.rows {
            for column in 0..snap.columns {
                let cell = Cell::new(column, row);
                let bg = cell_background(cell, overlay);
                let (ch, style) = match snap.slot(cell) {
                    Some(piece) => piece_glyph(piece, bg),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), bg).dim()),
                };
                self.fill_cell(fb, start_x, start_y, snap.rows, cell, ch, style);
            }
        }

        if let Some(status) = overlay.status {
            let style = CellStyle::default().bold();
            fb.put_str(start_x, start_y + frame_h, status, style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.degenerate {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "NO MOVES - R TO RESTART");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Paint one board cell; the glyph sits in the middle of its rectangle.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        rows: u8,
        cell: Cell,
        ch: char,
        style: CellStyle,
    ) {
        let screen_row = (rows - 1 - cell.row) as u16;
        let px = start_x + 1 + cell.column as u16 * self.cell_w;
        let py = start_y + 1 + screen_row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "SEED", label);
        fb.put_u32(panel_x, y + 1, snap.seed, dim);
        y += 3;

        for line in [
            "arrows  move",
            "space   select",
            "+dir    swap",
            "?       hint",
            "x       shuffle",
            "0       reset score",
            "r       restart",
            "q       quit",
        ] {
            fb.put_str(panel_x, y, line, dim);
            y += 1;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn cell_background(cell: Cell, overlay: &Overlay<'_>) -> Rgb {
    if overlay.selected == Some(cell) {
        SELECTED_BG
    } else if overlay.cursor == Some(cell) {
        CURSOR_BG
    } else if overlay.hint.is_some_and(|h| h.a == cell || h.b == cell) {
        HINT_BG
    } else {
        BOARD_BG
    }
}

/// Glyph and style for a piece kind. Kinds beyond the palette wrap around.
pub fn piece_glyph(piece: PieceType, bg: Rgb) -> (char, CellStyle) {
    let i = piece.id() as usize % PIECE_COLORS.len();
    (PIECE_GLYPHS[i], CellStyle::new(PIECE_COLORS[i], bg).bold())
}
