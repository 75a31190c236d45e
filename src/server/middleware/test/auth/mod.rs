use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::auth::Identity,
};
use test_utils::{builder::TestBuilder, factory};

mod identity;
mod optional;
mod require;

/// Session identity for a user created by the factory.
fn identity_for(user: &entity::user::Model) -> Identity {
    Identity {
        external_id: user.external_id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        picture: None,
    }
}
