use crate::QuizApp;
use crate::ui::helpers::option_button;
use crate::ui::layout::two_sided_row;
use egui::{Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

enum Intent {
    Answer(usize),
    Next,
}

pub fn ui_active(app: &mut QuizApp, ctx: &Context) {
    let Some(question) = app.state().current_question().cloned() else {
        // Sin pregunta actual no hay nada que pintar; el tick terminará la ronda
        CentralPanel::default().show(ctx, |ui| {
            ui.label("No hay preguntas en este quiz.");
        });
        return;
    };
    let progress = app.progress_info();
    let answer = app.state().answer();
    let is_last = app.state().is_last_question();
    let mut intent = None;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 120.0 + 56.0 * question.options.len() as f32 + 60.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.set_width(panel_width);
                ui.vertical_centered(|ui| {
                    // Cabecera de progreso
                    ui.add(
                        ProgressBar::new(progress.fraction())
                            .desired_width(panel_width)
                            .desired_height(10.0),
                    );
                    two_sided_row(ui, |ui| {
                        ui.label(RichText::new(progress.question_label()).strong());
                    }, |ui| {
                        ui.label(RichText::new(progress.points_label()).strong());
                    });
                    ui.add_space(12.0);

                    ui.label(RichText::new(&question.text).heading());
                    ui.add_space(12.0);

                    ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                        for (i, option) in question.options.iter().enumerate() {
                            if option_button(ui, option, i, &question, answer, panel_width) {
                                intent = Some(Intent::Answer(i));
                            }
                            ui.add_space(6.0);
                        }
                    });

                    ui.add_space(12.0);

                    // Pie: temporizador + siguiente/terminar
                    two_sided_row(ui, |ui| {
                        ui.label(RichText::new(format!("⏱ {}", progress.clock)).monospace().size(16.0));
                    }, |ui| {
                        // El botón sólo aparece una vez respondida la pregunta
                        if answer.is_some() {
                            let label = if is_last { "Terminar" } else { "Siguiente" };
                            if ui.add_sized([120.0, 32.0], Button::new(label)).clicked() {
                                intent = Some(Intent::Next);
                            }
                        }
                    });
                });
            });

        ui.add_space(extra_space);
    });

    match intent {
        Some(Intent::Answer(i)) => app.responder(i),
        Some(Intent::Next) => app.siguiente(),
        None => {}
    }
}
