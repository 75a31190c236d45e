use chrono::{DateTime, Utc};

use crate::model::study::{StartStudySessionDto, StudyInviteDto, StudySessionDto};

#[derive(Debug, Clone, PartialEq)]
pub struct StudyInvite {
    pub id: i32,
    /// Invited user.
    pub user_id: i32,
    pub host_id: i32,
    pub room_slug: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl StudyInvite {
    pub fn from_entity(entity: entity::study_invite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            host_id: entity.host_id,
            room_slug: entity.room_slug,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Invite joined with its host for the invite list.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyInviteView {
    pub invite: StudyInvite,
    pub host_name: String,
    pub host_email: String,
    pub meet_url: String,
}

impl StudyInviteView {
    pub fn into_dto(self) -> StudyInviteDto {
        StudyInviteDto {
            id: self.invite.id,
            room_slug: self.invite.room_slug,
            meet_url: self.meet_url,
            host_id: self.invite.host_id,
            host_name: self.host_name,
            host_email: self.host_email,
            created_at: self.invite.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    pub room_slug: String,
    pub meet_url: String,
    pub invited_count: usize,
}

impl StudySession {
    pub fn into_dto(self) -> StudySessionDto {
        StudySessionDto {
            room_slug: self.room_slug,
            meet_url: self.meet_url,
            invited_count: self.invited_count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartStudySessionParam {
    pub room_slug: Option<String>,
    /// `None` invites every accepted connection.
    pub invitees: Option<Vec<i32>>,
}

impl StartStudySessionParam {
    pub fn from_dto(dto: StartStudySessionDto) -> Self {
        Self {
            room_slug: dto.room_slug,
            invitees: dto.invitees,
        }
    }
}
