use crate::QuizApp;
use crate::machine::SECS_PER_QUESTION;
use crate::clock::format_clock;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    let num_questions = app.state().num_questions();
    let max_points = app.state().max_possible_points();
    let countdown = app.state().seconds_remaining().unwrap_or(0);
    let mut empezar = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 230.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading("¡Bienvenido al quiz!");
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(format!(
                                "{num_questions} preguntas para poner a prueba tus conocimientos"
                            ))
                            .strong(),
                        );
                        ui.add_space(4.0);
                        ui.label(format!(
                            "{max_points} puntos en juego · {} para terminar ({SECS_PER_QUESTION} s por pregunta)",
                            format_clock(countdown)
                        ));
                        ui.add_space(18.0);

                        let btn_w = (content_width * 0.6).clamp(120.0, 320.0);
                        let btn = ui.add_enabled(
                            num_questions > 0,
                            Button::new("▶ Empezar").min_size(egui::vec2(btn_w, 40.0)),
                        );
                        empezar = btn.clicked();
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });

    if empezar {
        app.empezar();
    }
}
