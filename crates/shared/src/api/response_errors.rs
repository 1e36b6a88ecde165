use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::Nothing;

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error("{}::{}: {:?}", stringify!($name), stringify!($variant), self)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl $name {
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $( $name::$variant { .. } => $variant_code, )*
                }
            }
        }
    };
}

response_error!(HabitError {
    #[code(StatusCode::NOT_FOUND)]
    NotFound,
    #[code(StatusCode::BAD_REQUEST)]
    NameInvalid { message: String },
    #[code(StatusCode::CONFLICT)]
    AlreadyCompleted { date: String },
    #[code(StatusCode::NOT_FOUND)]
    LogNotFound { date: String },
    #[code(StatusCode::CONFLICT)]
    ColorTaken,
    #[code(StatusCode::FORBIDDEN)]
    NotOwner,
    #[code(StatusCode::FORBIDDEN)]
    NotInvited,
});

response_error!(FriendError {
    #[code(StatusCode::NOT_FOUND)]
    NotFound,
    #[code(StatusCode::CONFLICT)]
    AlreadyFriends,
});

response_error!(ProfileError {
    #[code(StatusCode::BAD_REQUEST)]
    UsernameInvalid { message: String },
});

// Alias used to allow future expansion of the errors without having to go
// back and update all routes that use it
pub type FetchError = Nothing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_variant() {
        assert_eq!(HabitError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            HabitError::AlreadyCompleted {
                date: "2024-01-02".to_string()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            FriendError::AlreadyFriends.status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn round_trips_through_json() {
        let err = HabitError::AlreadyCompleted {
            date: "2024-01-02".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: HabitError = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, HabitError::AlreadyCompleted { date } if date == "2024-01-02"));
    }
}
