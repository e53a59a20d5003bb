mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Status;
use eframe::{App, Frame};
use egui::Context;
use layout::{status_footer, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_question_source();
        if self.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // El temporizador vive aquí, no en la máquina de estados
        let now = ctx.input(|i| i.time);
        if let Some(delay) = self.drive_timer(now) {
            ctx.request_repaint_after(delay);
        }

        top_panel(ctx, self.state().highscore());
        status_footer(ctx, self.status());

        // Una vista por estado
        match self.status() {
            Status::Uninitialized | Status::Loading => views::loader::ui_loader(self, ctx),
            Status::Error => views::error::ui_error(self, ctx),
            Status::Ready => views::start::ui_start(self, ctx),
            Status::Active => views::active::ui_active(self, ctx),
            Status::Finished => views::finished::ui_finished(self, ctx),
        }
    }
}
