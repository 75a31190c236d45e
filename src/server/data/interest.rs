use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Interests a user listed on their profile, kept in the submitted order.
pub struct InterestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InterestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's interests in the order they were listed.
    pub async fn get(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::UserInterest::find()
            .filter(entity::user_interest::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_interest::Column::Position)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.interest).collect())
    }

    /// Replaces all interests of a user.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the interests
    /// - `interests` - Already normalized, duplicate-free list
    ///
    /// # Returns
    /// - `Ok(())` - Previous interests removed and the new list stored
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn replace(&self, user_id: i32, interests: &[String]) -> Result<(), DbErr> {
        entity::prelude::UserInterest::delete_many()
            .filter(entity::user_interest::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if interests.is_empty() {
            return Ok(());
        }

        let rows = interests
            .iter()
            .enumerate()
            .map(|(position, interest)| entity::user_interest::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                interest: ActiveValue::Set(interest.clone()),
                position: ActiveValue::Set(position as i32),
            });

        entity::prelude::UserInterest::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
