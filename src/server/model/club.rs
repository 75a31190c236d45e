use chrono::{DateTime, Utc};

use crate::{
    model::club::{AdminStatusDto, ClubDto, CreateClubDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub admin_email: String,
    pub secret_key: String,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            admin_email: entity.admin_email,
            secret_key: entity.secret_key,
            created_at: entity.created_at,
        }
    }

    /// Converts to the DTO. The secret key is never exposed.
    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            admin_email: self.admin_email,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateClubParam {
    pub name: String,
    pub admin_email: String,
    pub secret_key: String,
}

impl CreateClubParam {
    pub fn from_dto(dto: CreateClubDto) -> Result<Self, AppError> {
        let field = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::BadRequest("All fields are required".to_string()))
        };

        Ok(Self {
            name: field(dto.name)?,
            admin_email: field(dto.admin_email)?.to_lowercase(),
            secret_key: field(dto.secret_key)?,
        })
    }
}

/// Club admin status of the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminStatus {
    pub is_admin: bool,
    pub club: Option<Club>,
}

impl AdminStatus {
    pub fn into_dto(self) -> AdminStatusDto {
        AdminStatusDto {
            is_admin: self.is_admin,
            club: self.club.map(Club::into_dto),
        }
    }
}
