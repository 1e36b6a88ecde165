mod home;
pub use home::*;

mod habits;
pub use habits::*;

mod habit_detail;
pub use habit_detail::*;

mod friends;
pub use friends::*;

mod profile;
pub use profile::*;

mod feed;
pub use feed::*;

mod achievements;
pub use achievements::*;

mod yearly_report;
pub use yearly_report::*;
