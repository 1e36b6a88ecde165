pub mod api;
pub mod calendar;
pub mod model;
pub mod types;
