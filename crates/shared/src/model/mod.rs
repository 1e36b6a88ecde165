mod user;
pub use user::*;

mod habit;
pub use habit::*;

mod participant;
pub use participant::*;

mod completion_log;
pub use completion_log::*;

mod friendship;
pub use friendship::*;

mod stats;
pub use stats::*;

mod feed;
pub use feed::*;

mod achievement;
pub use achievement::*;

use crate::api::error::ValidationError;

pub trait ValidateModel {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl ValidateModel for () {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
