//! Peer connection service.
//!
//! A connection is a directed edge from the requesting user to the receiver. Once
//! accepted it counts for both users regardless of direction.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{connection::ConnectionRepository, user::UserRepository},
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        connection::{AcceptOutcome, Connection, ConnectionStatus, RequestOutcome},
        user::User,
    },
    service::activity::ActivityService,
};

pub struct ConnectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a connection request from `sender` to `target_id`.
    ///
    /// A rejected edge in either direction is replaced by a fresh pending request from
    /// the sender.
    ///
    /// # Returns
    /// - `Ok(RequestOutcome)` - Sent, or already connected/pending (both 200)
    /// - `Err(AppError::BadRequest)` - Requesting oneself
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn request(&self, sender: &User, target_id: i32) -> Result<RequestOutcome, AppError> {
        if sender.id == target_id {
            return Err(AppError::BadRequest(
                "Cannot send a connection request to yourself".to_string(),
            ));
        }

        let Some(target) = UserRepository::new(self.db).find_by_id(target_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let repo = ConnectionRepository::new(self.db);
        let now = Utc::now();
        match repo.find_between(sender.id, target.id).await? {
            Some(edge) if edge.status == ConnectionStatus::Accepted => {
                return Ok(RequestOutcome::AlreadyConnected)
            }
            Some(edge) if edge.status == ConnectionStatus::Pending => {
                return Ok(RequestOutcome::AlreadyPending)
            }
            Some(edge) if edge.sender_id == sender.id => {
                repo.set_status(sender.id, target.id, ConnectionStatus::Pending, now)
                    .await?;
            }
            Some(edge) => {
                repo.delete_edge(edge.sender_id, edge.receiver_id).await?;
                repo.create_request(sender.id, target.id, now).await?;
            }
            None => {
                repo.create_request(sender.id, target.id, now).await?;
            }
        }

        ActivityService::new(self.db)
            .log(
                sender.id,
                NewActivity::new(
                    ActivityAction::ConnectionRequested,
                    format!("Sent a connection request to {}", target.name),
                )
                .resource(ActivityResourceType::Connection, target.id),
            )
            .await;

        Ok(RequestOutcome::Sent)
    }

    /// Accepts the pending request `from_id` sent to `receiver`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No pending request from that user
    pub async fn accept(&self, receiver: &User, from_id: i32) -> Result<AcceptOutcome, AppError> {
        let repo = ConnectionRepository::new(self.db);
        if repo.is_connected(receiver.id, from_id).await? {
            return Ok(AcceptOutcome::AlreadyConnected);
        }

        self.pending_request(from_id, receiver.id).await?;
        repo.set_status(from_id, receiver.id, ConnectionStatus::Accepted, Utc::now())
            .await?;

        ActivityService::new(self.db)
            .log(
                receiver.id,
                NewActivity::new(ActivityAction::ConnectionAccepted, "Accepted a connection request")
                    .resource(ActivityResourceType::Connection, from_id),
            )
            .await;

        Ok(AcceptOutcome::Accepted)
    }

    /// Rejects the pending request `from_id` sent to `receiver`.
    pub async fn reject(&self, receiver: &User, from_id: i32) -> Result<(), AppError> {
        self.pending_request(from_id, receiver.id).await?;
        ConnectionRepository::new(self.db)
            .set_status(from_id, receiver.id, ConnectionStatus::Rejected, Utc::now())
            .await?;

        ActivityService::new(self.db)
            .log(
                receiver.id,
                NewActivity::new(ActivityAction::ConnectionRejected, "Rejected a connection request")
                    .resource(ActivityResourceType::Connection, from_id),
            )
            .await;

        Ok(())
    }

    /// Withdraws the sender's own pending request.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - There is no pending request to withdraw
    pub async fn cancel(&self, sender: &User, target_id: i32) -> Result<(), AppError> {
        let repo = ConnectionRepository::new(self.db);
        let pending = repo
            .find_edge(sender.id, target_id)
            .await?
            .is_some_and(|edge| edge.status == ConnectionStatus::Pending);
        if !pending {
            return Err(AppError::Conflict("No pending request to cancel".to_string()));
        }

        repo.delete_edge(sender.id, target_id).await?;

        Ok(())
    }

    /// Removes an accepted connection, whichever side created it.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The users are not connected
    pub async fn disconnect(&self, user: &User, other_id: i32) -> Result<(), AppError> {
        let repo = ConnectionRepository::new(self.db);
        let Some(edge) = repo
            .find_between(user.id, other_id)
            .await?
            .filter(|edge| edge.status == ConnectionStatus::Accepted)
        else {
            return Err(AppError::BadRequest("Not connected".to_string()));
        };

        repo.delete_edge(edge.sender_id, edge.receiver_id).await?;

        ActivityService::new(self.db)
            .log(
                user.id,
                NewActivity::new(ActivityAction::ConnectionRemoved, "Removed a connection")
                    .resource(ActivityResourceType::Connection, other_id),
            )
            .await;

        Ok(())
    }

    /// Users with a pending request to `user_id`, newest request first.
    pub async fn get_incoming_requests(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        let sender_ids = ConnectionRepository::new(self.db)
            .pending_senders_to(user_id)
            .await?;
        let mut users = UserRepository::new(self.db).find_by_ids(&sender_ids).await?;
        users.sort_by_key(|user| sender_ids.iter().position(|id| *id == user.id));

        Ok(users)
    }

    pub async fn get_connections(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        let ids = ConnectionRepository::new(self.db).accepted_ids(user_id).await?;

        Ok(UserRepository::new(self.db).find_by_ids(&ids).await?)
    }

    async fn pending_request(&self, sender_id: i32, receiver_id: i32) -> Result<Connection, AppError> {
        ConnectionRepository::new(self.db)
            .find_edge(sender_id, receiver_id)
            .await?
            .filter(|edge| edge.status == ConnectionStatus::Pending)
            .ok_or_else(|| AppError::NotFound("Connection request not found".to_string()))
    }
}
