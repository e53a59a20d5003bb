use crate::QuizApp;
use crate::ui::layout::dialog_card;
use egui::{Context, RichText, Spinner};

pub fn ui_loader(app: &mut QuizApp, ctx: &Context) {
    dialog_card(ctx, "loader_card", 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(Spinner::new().size(32.0));
            ui.add_space(16.0);
            ui.label(RichText::new("Cargando preguntas...").heading());
            ui.add_space(6.0);
            ui.small(&app.config.questions_url);
        });
    });
}
