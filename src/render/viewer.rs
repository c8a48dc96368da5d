// src/render/viewer.rs
//! # Layout Viewer
//!
//! A small eframe/egui window that draws a finished layout: one square per
//! cell, with a bar from the cell centre towards every opening of the piece.
//! The status bar shows the piece count and any pieces that were left
//! unrotated.

use eframe::egui::{self, Align2, CentralPanel, Color32, FontId, Pos2, Rect, Stroke, TopBottomPanel, Vec2};
use std::error::Error;

use crate::generator::GenerationReport;
use crate::grid::GridPos;
use crate::scene::connector::openings;

const BACKGROUND: Color32 = Color32::from_rgb(16, 16, 20);
const EMPTY_FILL: Color32 = Color32::from_rgb(32, 32, 38);
const PIECE_FILL: Color32 = Color32::from_rgb(70, 90, 120);
const SEED_FILL: Color32 = Color32::from_rgb(120, 90, 60);
const PATH_COLOR: Color32 = Color32::from_rgb(230, 230, 210);

/// Holds a finished layout and draws it every frame.
pub struct LayoutViewer {
    report: GenerationReport,
    show_order: bool,
}

impl LayoutViewer {
    pub fn new(report: GenerationReport) -> Self {
        Self {
            report,
            show_order: false,
        }
    }

    fn status_line(&self) -> String {
        format!(
            "{}x{} grid, {} pieces, {} unrotated",
            self.report.columns,
            self.report.rows,
            self.report.filled_count(),
            self.report.issues.len()
        )
    }

    /// Screen rectangle of a cell; rows grow upwards.
    fn cell_rect(&self, area: Rect, cell: f32, pos: GridPos) -> Rect {
        let flipped_row = self.report.rows - 1 - pos.row;
        let min = area.min + Vec2::new(pos.col as f32 * cell, flipped_row as f32 * cell);
        Rect::from_min_size(min, Vec2::splat(cell))
    }

    fn draw_layout(&self, ui: &mut egui::Ui) {
        let area = ui.available_rect_before_wrap();
        let painter = ui.painter_at(area);
        painter.rect_filled(area, 0.0, BACKGROUND);

        if self.report.columns == 0 || self.report.rows == 0 {
            return;
        }
        let cell = (area.width() / self.report.columns as f32)
            .min(area.height() / self.report.rows as f32);

        for col in 0..self.report.columns {
            for row in 0..self.report.rows {
                let rect = self.cell_rect(area, cell, GridPos::new(col, row)).shrink(1.0);
                painter.rect_filled(rect, 2.0, EMPTY_FILL);
            }
        }

        let stroke = Stroke::new((cell * 0.2).max(1.0), PATH_COLOR);
        for placement in &self.report.placements {
            let rect = self.cell_rect(area, cell, placement.pos).shrink(1.0);
            let fill = if placement.order == 0 { SEED_FILL } else { PIECE_FILL };
            painter.rect_filled(rect, 2.0, fill);

            let center: Pos2 = rect.center();
            for dir in openings(&placement.category, placement.rotation) {
                let (dc, dr) = dir.delta();
                // Screen y grows downwards.
                let edge = center + Vec2::new(dc as f32, -(dr as f32)) * (cell * 0.5);
                painter.line_segment([center, edge], stroke);
            }

            if self.show_order {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    placement.order.to_string(),
                    FontId::monospace((cell * 0.3).max(8.0)),
                    Color32::WHITE,
                );
            }
        }
    }

    pub fn update(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("top_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_order, "Show placement order");
            });
        });

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Status: {}", self.status_line()));
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            self.draw_layout(ui);
        });
    }
}

impl eframe::App for LayoutViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        LayoutViewer::update(self, ctx);
    }
}

/// Opens the viewer window and blocks until it is closed.
pub fn run_viewer(report: GenerationReport) -> Result<(), Box<dyn Error>> {
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "maze_gen layout",
        native_options,
        Box::new(move |_cc| Box::new(LayoutViewer::new(report))),
    );
    // Since run_native returns (), we simply return Ok.
    Ok(())
}
