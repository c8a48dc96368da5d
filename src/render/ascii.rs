// src/render/ascii.rs
//! Plain-text view of a finished layout. Highest row is printed first so
//! that +row points up.

use crate::generator::{GenerationReport, Placement};
use crate::grid::{Direction, GridPos};
use crate::scene::connector::openings;

pub const EMPTY_CELL: char = '.';
pub const UNKNOWN_PIECE: char = '?';

/// Box-drawing glyph for a piece with the given openings.
pub fn glyph(open: &[Direction]) -> char {
    let has = |d: Direction| open.contains(&d);
    let (n, e, s, w) = (
        has(Direction::North),
        has(Direction::East),
        has(Direction::South),
        has(Direction::West),
    );
    match (n, e, s, w) {
        (true, true, true, true) => '┼',
        (true, true, true, false) => '├',
        (true, false, true, true) => '┤',
        (true, true, false, true) => '┴',
        (false, true, true, true) => '┬',
        (true, false, true, false) => '│',
        (false, true, false, true) => '─',
        (true, true, false, false) => '└',
        (true, false, false, true) => '┘',
        (false, true, true, false) => '┌',
        (false, false, true, true) => '┐',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╶',
        (false, false, true, false) => '╷',
        (false, false, false, true) => '╴',
        (false, false, false, false) => UNKNOWN_PIECE,
    }
}

pub fn placement_glyph(placement: &Placement) -> char {
    glyph(&openings(&placement.category, placement.rotation))
}

pub fn render_layout(report: &GenerationReport) -> String {
    let mut cells = vec![EMPTY_CELL; report.columns * report.rows];
    for placement in &report.placements {
        let GridPos { col, row } = placement.pos;
        if col < report.columns && row < report.rows {
            cells[row * report.columns + col] = placement_glyph(placement);
        }
    }

    let mut out = String::with_capacity((report.columns + 1) * report.rows * 3);
    for row in (0..report.rows).rev() {
        out.extend(&cells[row * report.columns..(row + 1) * report.columns]);
        out.push('\n');
    }
    out
}
