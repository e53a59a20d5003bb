use crate::model::Status;
use egui::{
    Align, Align2, Area, CentralPanel, Context, Frame, Id, Layout, Margin, RichText, Ui, Vec2,
    Visuals,
};

pub fn top_panel(ctx: &Context, highscore: u32) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("⏱ Quiz cronometrado").heading().strong());
            if highscore > 0 {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(format!("🏆 Récord: {highscore}"));
                });
            }
        });
    });
}

/// Pie con la fase actual y un único botón que alterna el tema.
pub fn status_footer(ctx: &Context, status: Status) {
    egui::TopBottomPanel::bottom("status_footer").show(ctx, |ui| {
        two_sided_row(
            ui,
            |ui| {
                ui.weak(format!("Fase: {status}"));
            },
            |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Claro" } else { "🌙 Oscuro" };
                if ui.small_button(label).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            },
        );
    });
}

/// Tarjeta flotante anclada al centro de la ventana. El panel central queda
/// vacío debajo, así que no hace falta estimar la altura del contenido.
pub fn dialog_card(ctx: &Context, id: &'static str, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |_| {});
    let width = max_width.min(ctx.screen_rect().width() - 32.0).max(0.0);
    Area::new(Id::new(id))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            Frame::window(ui.style())
                .inner_margin(Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(width);
                    inner(ui);
                });
        });
}

/// Fila con un bloque pegado a la izquierda y otro a la derecha.
pub fn two_sided_row(ui: &mut Ui, left: impl FnOnce(&mut Ui), right: impl FnOnce(&mut Ui)) {
    ui.horizontal(|ui| {
        left(ui);
        ui.with_layout(Layout::right_to_left(Align::Center), right);
    });
}
