//! Connection factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a connection edge from `sender_id` to `receiver_id` with the given status.
pub async fn create_connection(
    db: &DatabaseConnection,
    sender_id: i32,
    receiver_id: i32,
    status: &str,
) -> Result<entity::connection::Model, DbErr> {
    let now = Utc::now();
    entity::connection::ActiveModel {
        sender_id: ActiveValue::Set(sender_id),
        receiver_id: ActiveValue::Set(receiver_id),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Inserts an accepted connection between two users.
pub async fn connect(
    db: &DatabaseConnection,
    sender_id: i32,
    receiver_id: i32,
) -> Result<entity::connection::Model, DbErr> {
    create_connection(db, sender_id, receiver_id, "accepted").await
}

/// Inserts an active study invite.
pub async fn create_study_invite(
    db: &DatabaseConnection,
    user_id: i32,
    host_id: i32,
    room_slug: &str,
) -> Result<entity::study_invite::Model, DbErr> {
    entity::study_invite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        host_id: ActiveValue::Set(host_id),
        room_slug: ActiveValue::Set(room_slug.to_string()),
        active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
