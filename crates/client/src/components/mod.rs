mod app;
pub use app::App;

mod routes;
pub use routes::*;

pub mod components;
pub mod forms;
pub mod pages;
