use crate::QuizApp;
use crate::ui::layout::dialog_card;
use egui::{Button, Color32, Context, RichText};

pub fn ui_finished(app: &mut QuizApp, ctx: &Context) {
    let summary = app.finished_summary();
    let mut reiniciar = false;

    dialog_card(ctx, "finished_card", 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("¡Fin del quiz!");
            ui.add_space(16.0);

            egui::Frame::default()
                .fill(ui.visuals().extreme_bg_color)
                .corner_radius(20.0)
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.label(RichText::new(summary.label()).size(18.0).strong());
                });

            ui.add_space(10.0);
            ui.label(RichText::new(summary.highscore_label()).color(Color32::GRAY));
            ui.add_space(24.0);

            reiniciar = ui
                .add_sized([200.0, 36.0], Button::new("⟲ Reiniciar quiz"))
                .clicked();
        });
    });

    if reiniciar {
        app.reiniciar();
    }
}
