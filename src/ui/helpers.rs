// src/ui/helpers.rs
use crate::model::Question;
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Botón de una opción. Antes de responder todos están activos; después se
/// bloquean y se colorean: verde la correcta, rojo la elegida si falló.
/// Devuelve si se ha pulsado.
pub fn option_button(
    ui: &mut Ui,
    label: &str,
    option: usize,
    question: &Question,
    answer: Option<usize>,
    width: f32,
) -> bool {
    let Some(chosen) = answer else {
        return ui
            .add(Button::new(label).min_size(Vec2::new(width, 44.0)))
            .clicked();
    };

    let text = if option == chosen {
        RichText::new(format!("➜ {label}")).strong()
    } else {
        RichText::new(label)
    };
    let fill = if question.is_correct(option) {
        Color32::from_rgb(46, 125, 50)
    } else if option == chosen {
        Color32::from_rgb(183, 28, 28)
    } else {
        ui.visuals().widgets.inactive.weak_bg_fill
    };

    ui.add_enabled(
        false,
        Button::new(text.color(Color32::WHITE))
            .fill(fill)
            .min_size(Vec2::new(width, 44.0)),
    );
    false
}
