//! Connection edges between users.
//!
//! At most one edge exists per unordered pair. The sender is whoever asked first, so
//! lookups that don't care about direction check both orientations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::connection::{Connection, ConnectionStatus};

pub struct ConnectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the edge between two users in either direction.
    pub async fn find_between(&self, a: i32, b: i32) -> Result<Option<Connection>, DbErr> {
        entity::prelude::Connection::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::connection::Column::SenderId.eq(a))
                            .add(entity::connection::Column::ReceiverId.eq(b)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::connection::Column::SenderId.eq(b))
                            .add(entity::connection::Column::ReceiverId.eq(a)),
                    ),
            )
            .one(self.db)
            .await?
            .map(Connection::from_entity)
            .transpose()
    }

    /// Finds the edge sent by `sender_id` to `receiver_id`.
    pub async fn find_edge(&self, sender_id: i32, receiver_id: i32) -> Result<Option<Connection>, DbErr> {
        entity::prelude::Connection::find_by_id((sender_id, receiver_id))
            .one(self.db)
            .await?
            .map(Connection::from_entity)
            .transpose()
    }

    /// Inserts a new pending request.
    pub async fn create_request(
        &self,
        sender_id: i32,
        receiver_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Connection, DbErr> {
        let entity = entity::connection::ActiveModel {
            sender_id: ActiveValue::Set(sender_id),
            receiver_id: ActiveValue::Set(receiver_id),
            status: ActiveValue::Set(ConnectionStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Connection::from_entity(entity)
    }

    /// Changes the status of an existing edge.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge found and updated
    /// - `Ok(false)` - No edge from `sender_id` to `receiver_id`
    pub async fn set_status(
        &self,
        sender_id: i32,
        receiver_id: i32,
        status: ConnectionStatus,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Connection::update_many()
            .set(entity::connection::ActiveModel {
                status: ActiveValue::Set(status.as_str().to_string()),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::connection::Column::SenderId.eq(sender_id))
            .filter(entity::connection::Column::ReceiverId.eq(receiver_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_edge(&self, sender_id: i32, receiver_id: i32) -> Result<(), DbErr> {
        entity::prelude::Connection::delete_many()
            .filter(entity::connection::Column::SenderId.eq(sender_id))
            .filter(entity::connection::Column::ReceiverId.eq(receiver_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Users with a pending request to `receiver_id`, newest request first.
    pub async fn pending_senders_to(&self, receiver_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Connection::find()
            .filter(entity::connection::Column::ReceiverId.eq(receiver_id))
            .filter(entity::connection::Column::Status.eq(ConnectionStatus::Pending.as_str()))
            .order_by_desc(entity::connection::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.sender_id).collect())
    }

    /// Ids of everyone with an accepted connection to the user.
    pub async fn accepted_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Connection::find()
            .filter(
                Condition::any()
                    .add(entity::connection::Column::SenderId.eq(user_id))
                    .add(entity::connection::Column::ReceiverId.eq(user_id)),
            )
            .filter(entity::connection::Column::Status.eq(ConnectionStatus::Accepted.as_str()))
            .all(self.db)
            .await?;

        let mut ids: Vec<i32> = rows
            .into_iter()
            .map(|row| if row.sender_id == user_id { row.receiver_id } else { row.sender_id })
            .collect();
        ids.sort_unstable();
        ids.dedup();

        Ok(ids)
    }

    pub async fn is_connected(&self, a: i32, b: i32) -> Result<bool, DbErr> {
        Ok(self
            .find_between(a, b)
            .await?
            .is_some_and(|edge| edge.status == ConnectionStatus::Accepted))
    }
}
