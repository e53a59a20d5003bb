pub mod app;
pub mod clock;
pub mod config;
pub mod machine;
pub mod model;
pub mod source;
pub mod ui;

pub use app::QuizApp;
pub use config::QuizConfig;
pub use machine::{Event, QuizState, TransitionError, reduce};
