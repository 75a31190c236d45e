//! Clubs and club-admin verification.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, user::UserRepository},
    error::AppError,
    model::{
        club::{AdminStatus, Club, CreateClubParam},
        user::User,
    },
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        Ok(ClubRepository::new(self.db).get_all().await?)
    }

    /// Creates a club.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Name, admin email or secret key already used
    pub async fn create(&self, param: CreateClubParam) -> Result<Club, AppError> {
        let repo = ClubRepository::new(self.db);
        if repo.exists_conflict(&param).await? {
            return Err(AppError::BadRequest(
                "A club with this name, admin email or secret key already exists".to_string(),
            ));
        }

        let club = repo.create(param).await?;
        tracing::info!("Created club {} ({})", club.name, club.id);

        Ok(club)
    }

    /// Verifies the user as admin of the club owning `secret_key`.
    ///
    /// # Returns
    /// - `Ok(Club)` - The user is now the club's admin
    /// - `Err(AppError::BadRequest)` - Unknown secret key
    /// - `Err(AppError::Forbidden)` - The club is registered to another email
    pub async fn verify(&self, user: &User, secret_key: &str) -> Result<Club, AppError> {
        let Some(club) = ClubRepository::new(self.db)
            .find_by_secret_key(secret_key.trim())
            .await?
        else {
            return Err(AppError::BadRequest("Invalid secret key".to_string()));
        };

        if !club.admin_email.eq_ignore_ascii_case(user.email.trim()) {
            return Err(AppError::Forbidden(
                "This club is registered to a different email".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .set_club_admin(user.id, club.id)
            .await?;

        Ok(club)
    }

    pub async fn get_status(&self, user: &User) -> Result<AdminStatus, AppError> {
        let club = match user.admin_club_id.filter(|_| user.is_admin) {
            Some(club_id) => ClubRepository::new(self.db).find_by_id(club_id).await?,
            None => None,
        };

        Ok(AdminStatus {
            is_admin: user.is_admin && club.is_some(),
            club,
        })
    }
}
