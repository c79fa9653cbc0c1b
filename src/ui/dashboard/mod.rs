mod activity_view;
pub(crate) mod config;
mod hives_view;
mod quick_actions_view;
mod recommendations_view;
mod weather_view;

use chrono::Utc;
use config::AppConfig;
use egui::{Align, Color32, Layout, RichText, Visuals, style::Widgets};
use log::{error, info};

use beekeeper::{DashboardDataProvider, DashboardSnapshot};

use super::{PALETTE_CARD, PALETTE_FIELD, PALETTE_HONEY, PALETTE_INK, PALETTE_MUTED};

const HERO_HEIGHT: f32 = 110.;

/// `DashboardApp` shows weather, hives and recommendations for one apiary.
///
/// # Fields
///
/// * `provider` - Where dashboard data comes from, injected at construction.
/// * `snapshot` - The data currently displayed, `None` if loading failed.
/// * `status` - Last load outcome shown in the footer.
/// * `app_config` - Persisted view settings.
pub struct DashboardApp {
    provider: Box<dyn DashboardDataProvider>,
    snapshot: Option<DashboardSnapshot>,
    status: String,
    app_config: AppConfig,
}

impl DashboardApp {
    pub fn new(
        provider: Box<dyn DashboardDataProvider>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: false,
            hyperlink_color: PALETTE_HONEY,
            faint_bg_color: PALETTE_CARD,
            panel_fill: PALETTE_FIELD,
            window_fill: PALETTE_CARD,
            override_text_color: Some(PALETTE_INK),
            button_frame: true,
            widgets: Widgets::light(),
            striped: true,
            ..Visuals::light()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        let mut app = Self {
            provider,
            snapshot: None,
            status: String::new(),
            app_config,
        };
        app.reload();
        app
    }

    /// Ask the provider for fresh data. On failure the previous snapshot is
    /// kept and the error is reported in the status line.
    fn reload(&mut self) {
        match self.provider.snapshot() {
            Ok(snapshot) => {
                info!(
                    "Loaded dashboard from {}: {} hives, {} recommendations",
                    self.provider.name(),
                    snapshot.hives.len(),
                    snapshot.recommendations.len()
                );
                self.status = format!(
                    "Loaded {} at {}",
                    self.provider.name(),
                    Utc::now().format("%H:%M:%S")
                );
                self.snapshot = Some(snapshot);
            }
            Err(e) => {
                error!("Unable to load dashboard data from {}: {}", self.provider.name(), e);
                self.status = format!("Unable to load {}: {}", self.provider.name(), e);
            }
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn hero(&mut self, ui: &mut egui::Ui) {
        ui.set_min_height(HERO_HEIGHT);
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.vertical(|ui| {
                ui.add_space(20.);
                ui.label(
                    RichText::new("BeeKeeper Pro")
                        .size(32.)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new("Smart insights for successful beekeeping")
                        .size(16.)
                        .color(Color32::from_white_alpha(230)),
                );
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("⟳ Reload").clicked() {
                    self.reload();
                }
                ui.label(RichText::new("🐝").size(28.));
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_config();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("hero")
            .frame(
                egui::Frame::new()
                    .fill(PALETTE_HONEY)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| self.hero(ui));

        egui::TopBottomPanel::bottom("status")
            .frame(egui::Frame::new().inner_margin(egui::Margin::same(4)))
            .show(ctx, |ui| {
                ui.label(RichText::new(&self.status).size(11.).color(PALETTE_MUTED));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Clone the snapshot so the views can borrow `self` mutably for settings
            let Some(snapshot) = self.snapshot.clone() else {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.);
                    ui.heading("No dashboard data");
                    ui.label(RichText::new(&self.status).color(PALETTE_MUTED));
                });
                return;
            };
            let now = Utc::now();

            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.recommendations_view(ui, &snapshot.recommendations);
                    ui.add_space(16.);

                    ui.columns(2, |columns| {
                        self.weather_view(&mut columns[0], &snapshot.weather);
                        self.quick_actions_view(&mut columns[1]);
                    });
                    ui.add_space(16.);

                    self.hives_view(ui, &snapshot.hives, now);
                    ui.add_space(16.);

                    self.activity_view(ui, &snapshot, now);
                });
        });
    }
}
