use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::model::string_enum;

string_enum!(
    ConnectionStatus, "connection status" {
        Pending => "pending",
        Accepted => "accepted",
        Rejected => "rejected",
    }
);

/// Directed connection edge from the user who sent the request to its receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub sender_id: i32,
    pub receiver_id: i32,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    pub fn from_entity(entity: entity::connection::Model) -> Result<Self, DbErr> {
        Ok(Self {
            sender_id: entity.sender_id,
            receiver_id: entity.receiver_id,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// The user on the other end of the edge from `user_id`.
    pub fn other(&self, user_id: i32) -> i32 {
        if self.sender_id == user_id {
            self.receiver_id
        } else {
            self.sender_id
        }
    }
}

/// Result of sending a connection request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestOutcome {
    Sent,
    AlreadyConnected,
    AlreadyPending,
}

impl RequestOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RequestOutcome::Sent => "Connection request sent",
            RequestOutcome::AlreadyConnected => "Already connected",
            RequestOutcome::AlreadyPending => "Request already sent",
        }
    }
}

/// Result of accepting a connection request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AcceptOutcome {
    Accepted,
    AlreadyConnected,
}

impl AcceptOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            AcceptOutcome::Accepted => "Connection accepted",
            AcceptOutcome::AlreadyConnected => "Already connected",
        }
    }
}
