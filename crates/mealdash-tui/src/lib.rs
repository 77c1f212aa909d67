// Terminal UI for MealDash
pub mod app;
pub mod runner;
pub mod ui;

pub use app::{App, ConfirmAction, Modal, Screen};
pub use runner::run_tui;
