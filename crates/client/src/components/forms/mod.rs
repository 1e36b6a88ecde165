mod habit;
pub use habit::*;

mod participant_settings;
pub use participant_settings::*;
