use chrono::{DateTime, Utc};
use egui::{Align, Layout, RichText};
use itertools::Itertools;
use log::debug;

use beekeeper::{
    Hive,
    format::{days_ago, last_inspected},
    model::HiveStatus,
    styles::Icon,
};

use super::DashboardApp;
use crate::ui::{PALETTE_MUTED, badge, card_frame, icon};

const HIVE_GRID_COLUMNS: usize = 2;

impl DashboardApp {
    pub(crate) fn hives_view(&mut self, ui: &mut egui::Ui, hives: &[Hive], now: DateTime<Utc>) {
        card_frame(None).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("🏠 My Hives ({})", hives.len())).strong().size(16.));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Add New Hive").clicked() {
                        debug!("'Add New Hive' clicked");
                    }
                });
            });

            if hives.is_empty() {
                empty_state(ui);
                return;
            }

            status_summary(ui, hives);
            ui.add_space(8.);

            for row in hives.chunks(HIVE_GRID_COLUMNS) {
                ui.columns(HIVE_GRID_COLUMNS, |columns| {
                    for (column, hive) in columns.iter_mut().zip(row) {
                        hive_card(column, hive, now);
                    }
                });
                ui.add_space(8.);
            }
        });
    }
}

/// One badge per status present, with the number of hives in it.
fn status_summary(ui: &mut egui::Ui, hives: &[Hive]) {
    let counts = hives.iter().counts_by(|hive| hive.status);
    ui.horizontal(|ui| {
        for (status, count) in counts.into_iter().sorted_by_key(|(status, _)| *status) {
            let style = status.style();
            badge(ui, format!("{} {} {}", style.icon.glyph(), count, style.label), style.tone);
        }
    });
}

fn hive_card(ui: &mut egui::Ui, hive: &Hive, now: DateTime<Utc>) {
    let status = hive.status.style();
    let queen = hive.queen_status.style();
    let temperament = hive.temperament.style();

    let tone = match hive.status {
        HiveStatus::Healthy => None,
        HiveStatus::Attention | HiveStatus::Warning => Some(status.tone),
    };

    card_frame(tone).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&hive.name).strong().size(15.));
                ui.label(
                    RichText::new(format!("{} {}", Icon::MapPin.glyph(), hive.location))
                        .size(11.)
                        .color(PALETTE_MUTED),
                );
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                badge(ui, format!("{} {}", status.icon.glyph(), status.label), status.tone);
            });
        });
        ui.add_space(6.);

        ui.horizontal(|ui| {
            icon(ui, queen, 14.);
            ui.label(format!("Queen: {}", queen.label));
            ui.add_space(12.);
            icon(ui, temperament, 14.);
            badge(ui, temperament.label, temperament.tone);
        });
        ui.label(
            RichText::new(format!(
                "{} Last inspected: {}",
                Icon::Calendar.glyph(),
                last_inspected(hive, now)
            ))
            .size(11.)
            .color(PALETTE_MUTED),
        )
        .on_hover_text(format!("Installed {}", days_ago(hive.install_date, now)));
        ui.add_space(6.);

        ui.horizontal(|ui| {
            if ui.button(format!("{} Inspect", Icon::Eye.glyph())).clicked() {
                debug!("'Inspect' clicked for hive {}", hive.id);
            }
            if ui.button("View History").clicked() {
                debug!("'View History' clicked for hive {}", hive.id);
            }
        });
    });
}

fn empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.);
        ui.label(RichText::new(Icon::Bee.glyph()).size(36.));
        ui.label(RichText::new("No Hives Yet").strong().size(16.));
        ui.label(
            RichText::new(
                "Add your first hive to start tracking inspections and get AI recommendations.",
            )
            .color(PALETTE_MUTED),
        );
        if ui.button("Add Your First Hive").clicked() {
            debug!("'Add Your First Hive' clicked");
        }
        ui.add_space(24.);
    });
}
