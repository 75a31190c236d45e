use serde::{Deserialize, Serialize};

use crate::model::auth::IdentityDto;

/// Identity returned by the OAuth provider and kept in the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Identity {
    /// Opaque, stable user id from the provider (`sub`).
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

impl Identity {
    pub fn into_dto(self) -> IdentityDto {
        IdentityDto {
            external_id: self.external_id,
            name: self.name,
            email: self.email,
            picture: self.picture,
        }
    }
}
