use chrono::{DateTime, Utc};
use egui::RichText;

use beekeeper::{DashboardSnapshot, format::time_ago};

use super::DashboardApp;
use crate::ui::{PALETTE_MUTED, card_frame, icon};

impl DashboardApp {
    pub(crate) fn activity_view(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &DashboardSnapshot,
        now: DateTime<Utc>,
    ) {
        card_frame(None).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Recent Activity").strong().size(16.));
            ui.add_space(6.);

            if snapshot.activity.is_empty() {
                ui.label(RichText::new("Nothing logged yet").italics().color(PALETTE_MUTED));
                return;
            }

            for activity in &snapshot.activity {
                let hive_name = activity
                    .hive_id
                    .as_deref()
                    .and_then(|id| snapshot.hive(id))
                    .map(|hive| hive.name.as_str());

                ui.horizontal(|ui| {
                    icon(ui, activity.kind.style(), 16.);
                    ui.vertical(|ui| {
                        let title = ui.label(RichText::new(activity.title(hive_name)).strong());
                        if !activity.notes.is_empty() {
                            title.on_hover_text(activity.notes.as_str());
                        }
                        ui.label(
                            RichText::new(time_ago(activity.date, now))
                                .size(11.)
                                .color(PALETTE_MUTED),
                        );
                    });
                });
                ui.add_space(4.);
            }
        });
    }
}
