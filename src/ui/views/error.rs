use crate::QuizApp;
use crate::ui::layout::dialog_card;
use egui::{Button, Color32, Context, RichText};

pub fn ui_error(app: &mut QuizApp, ctx: &Context) {
    let mut reintentar = false;

    dialog_card(ctx, "error_card", 460.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(
                RichText::new("💥 No se han podido cargar las preguntas.")
                    .heading()
                    .color(Color32::LIGHT_RED),
            );
            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
            ui.add_space(20.0);
            // No hay reintento automático: la recarga la pide el usuario
            reintentar = ui.add_sized([220.0, 36.0], Button::new("🔄 Volver a cargar")).clicked();
        });
    });

    if reintentar {
        app.solicitar_preguntas();
    }
}
