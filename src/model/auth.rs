use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Identity returned by the identity provider for the logged in account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Session state: the identity plus the registered user when one exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusDto {
    pub identity: IdentityDto,
    pub registered: bool,
    pub user: Option<UserDto>,
}
