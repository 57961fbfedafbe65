mod app;
mod dom;
mod logging;
mod persistence;
mod render;
mod rough;
mod state;

pub use app::run;
