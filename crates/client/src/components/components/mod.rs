mod habit_card;
pub use habit_card::*;

mod calendar_grid;
pub use calendar_grid::*;
