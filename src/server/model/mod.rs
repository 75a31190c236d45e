//! Domain models and operation parameters.
//!
//! Domain models are produced by the data layer from SeaORM entities (`from_entity`) and
//! converted to wire DTOs by controllers (`into_dto`). Parameter types carry validated
//! input from controllers into services (`from_dto`).
//!
//! Enumerated columns are stored as lowercase strings. `string_enum!` generates the
//! conversion in both directions so the rest of the server only deals with Rust enums.

use sea_orm::DbErr;

/// A stored or submitted string that matches no variant of the target enum.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl From<UnknownVariant> for DbErr {
    fn from(err: UnknownVariant) -> Self {
        DbErr::Type(err.to_string())
    }
}

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::server::model::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::server::model::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use string_enum;

pub mod activity;
pub mod auth;
pub mod club;
pub mod connection;
pub mod course;
pub mod deadline;
pub mod event;
pub mod mark;
pub mod resource;
pub mod review;
pub mod study;
pub mod upload;
pub mod user;
pub mod vote;
