//! Text and info overlays drawn with egui on top of the wgpu scene

use egui::{Align2, Color32, Context, FontId, Pos2, RichText};

use crate::elements::ELEMENTS;
use crate::nucleus::{cluster_radius, draw_counts, neutron_count};
use crate::session::{ViewMode, ViewSession};
use crate::shells::shell_counts;
use crate::table::TableCell;

const TITLE: &str = "Interactive Periodic Table - 118 Elements";

/// Build the full overlay for the current frame.
pub fn draw_overlay(ctx: &Context, session: &ViewSession, cells: &[TableCell]) {
    match session.mode {
        ViewMode::Table => draw_table_overlay(ctx, session, cells),
        ViewMode::Atom => draw_atom_overlay(ctx, session),
    }
}

fn selection_line(session: &ViewSession) -> String {
    let e = session.selected_element();
    format!(
        "{} ({}), Z = {}, Period = {}, Group = {}",
        e.name,
        e.symbol,
        e.z,
        e.period,
        e.group_label()
    )
}

fn draw_table_overlay(ctx: &Context, session: &ViewSession, cells: &[TableCell]) {
    egui::TopBottomPanel::top("table_title").show(ctx, |ui| {
        ui.label(
            RichText::new(TITLE)
                .color(Color32::from_rgb(255, 255, 204))
                .strong(),
        );
    });

    egui::TopBottomPanel::bottom("table_status").show(ctx, |ui| {
        ui.label(
            RichText::new(format!("Selected: {}", selection_line(session)))
                .color(Color32::LIGHT_GREEN),
        );
        ui.label(
            RichText::new("LEFT/RIGHT: change element  |  Click: select  |  A: atom view  |  Esc: quit")
                .small()
                .color(Color32::GRAY),
        );
    });

    paint_cell_symbols(ctx, cells);
}

/// Paint each element's symbol over its wgpu-rendered cell.
fn paint_cell_symbols(ctx: &Context, cells: &[TableCell]) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("cell_symbols"),
    ));
    let screen = ctx.screen_rect();

    for cell in cells {
        let e = &ELEMENTS[cell.element];
        // Table space is 0..100 with y up; egui points run y down
        let cx = screen.width() * (cell.x + cell.w * 0.5) / 100.0;
        let cy = screen.height() * (1.0 - (cell.y + cell.h * 0.55) / 100.0);
        painter.text(
            Pos2::new(cx, cy),
            Align2::CENTER_CENTER,
            e.symbol,
            FontId::proportional(11.0),
            Color32::WHITE,
        );
    }
}

fn draw_atom_overlay(ctx: &Context, session: &ViewSession) {
    egui::TopBottomPanel::top("atom_status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(selection_line(session)).color(Color32::LIGHT_GREEN));
            if session.paused {
                ui.separator();
                ui.label(RichText::new("PAUSED").color(Color32::YELLOW));
            }
        });
    });

    egui::TopBottomPanel::bottom("atom_help").show(ctx, |ui| {
        ui.label(
            RichText::new(
                "Arrows: rotate  |  Drag: orbit  |  +/- or scroll: zoom  |  Space: pause  |  T: table view",
            )
            .small()
            .color(Color32::GRAY),
        );
    });

    draw_element_panel(ctx, session);
}

/// Details sidebar for the selected element.
fn draw_element_panel(ctx: &Context, session: &ViewSession) {
    let e = session.selected_element();

    egui::SidePanel::right("element_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new(e.symbol).color(Color32::LIGHT_BLUE).size(32.0));
            ui.label(RichText::new(e.name).strong());
            ui.separator();

            egui::Grid::new("element_facts")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Atomic number");
                    ui.label(e.z.to_string());
                    ui.end_row();
                    ui.label("Period");
                    ui.label(e.period.to_string());
                    ui.end_row();
                    ui.label("Group");
                    ui.label(e.group_label());
                    ui.end_row();
                    ui.label("Neutrons (est.)");
                    ui.label(neutron_count(e.z).to_string());
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.label(RichText::new("Shells").strong());
            let counts = shell_counts(e.z);
            ui.label(
                counts
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" / "),
            );

            ui.add_space(8.0);
            ui.label(RichText::new("Nucleus").strong());
            let (protons, neutrons) = draw_counts(e.z);
            ui.label(format!("{} p + {} n drawn", protons, neutrons));
            ui.label(format!("cluster r = {:.2}", cluster_radius(e.z)));
        });
}
