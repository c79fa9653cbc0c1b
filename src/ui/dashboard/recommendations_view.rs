use egui::{Align, Layout, RichText};
use log::debug;

use beekeeper::{Recommendation, Selection, rank_recommendations, select_for_display};

use super::DashboardApp;
use crate::ui::{PALETTE_MUTED, badge, card_frame, icon};
use beekeeper::styles::Tone;

impl DashboardApp {
    /// Recommendations banner: the foregrounded recommendation, then the
    /// "Other Recommendations" card, or the "All Clear!" card when there is
    /// nothing to show.
    pub(crate) fn recommendations_view(&mut self, ui: &mut egui::Ui, recommendations: &[Recommendation]) {
        let selection = select_for_display(recommendations);

        let Selection::Foregrounded {
            top,
            secondary,
            secondary_total_count,
        } = selection
        else {
            self.all_clear_card(ui);
            return;
        };

        self.top_recommendation_card(ui, top);

        if secondary_total_count > 0 {
            ui.add_space(12.);
            card_frame(None).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Other Recommendations ({})", secondary_total_count))
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let toggle_text = if self.app_config.show_all_recommendations {
                            "Show Less"
                        } else {
                            "View All"
                        };
                        if ui.button(toggle_text).clicked() {
                            self.app_config.show_all_recommendations =
                                !self.app_config.show_all_recommendations;
                            self.save_config();
                        }
                    });
                });
                ui.add_space(6.);

                if self.app_config.show_all_recommendations {
                    // Full ranked list without the foregrounded item
                    for rec in rank_recommendations(recommendations).into_iter().skip(1) {
                        secondary_row(ui, rec);
                    }
                } else {
                    for rec in secondary {
                        secondary_row(ui, rec);
                    }
                }
            });
        }
    }

    fn all_clear_card(&self, ui: &mut egui::Ui) {
        card_frame(Some(Tone::Accent)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("✔").size(24.).color(crate::ui::tone_color(Tone::Accent)));
                ui.vertical(|ui| {
                    ui.label(RichText::new("All Clear!").strong());
                    ui.label(
                        RichText::new(
                            "No urgent recommendations at this time. Keep up the great work!",
                        )
                        .size(12.),
                    );
                });
            });
        });
    }

    fn top_recommendation_card(&self, ui: &mut egui::Ui, top: &Recommendation) {
        let style = top.priority.style();

        card_frame(Some(style.tone)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                icon(ui, style, 24.);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&top.title).strong().size(16.));
                        badge(ui, top.priority.as_str().to_uppercase(), style.tone);
                        if top.weather_based {
                            badge(ui, "🌤 Weather", Tone::Muted);
                        }
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            if ui.small_button("✖").clicked() {
                                debug!("Dismiss clicked for recommendation {}", top.id);
                            }
                        });
                    });
                    ui.label(top.description.as_str());
                    ui.add_space(6.);
                    egui::Frame::new()
                        .fill(egui::Color32::from_white_alpha(140))
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new("Action Required:").strong());
                            ui.label(top.action.as_str());
                        });
                });
            });

            ui.add_space(10.);
            ui.horizontal(|ui| {
                // These actions have no behavior yet, clicks are only logged
                for label in ["Take Action", "View Details", "Remind Later"] {
                    if ui.button(label).clicked() {
                        debug!("'{}' clicked for recommendation {}", label, top.id);
                    }
                }
            });
        });
    }
}

fn secondary_row(ui: &mut egui::Ui, rec: &Recommendation) {
    let style = rec.priority.style();
    ui.horizontal(|ui| {
        icon(ui, style, 14.);
        ui.vertical(|ui| {
            ui.label(RichText::new(&rec.title).strong());
            ui.label(RichText::new(&rec.description).size(11.).color(PALETTE_MUTED));
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            badge(ui, rec.priority.as_str(), style.tone);
        });
    });
    ui.add_space(4.);
}
