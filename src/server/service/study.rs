//! Study sessions: video-conference rooms shared with connections through invites.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{connection::ConnectionRepository, study_invite::StudyInviteRepository, user::UserRepository},
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        study::{StartStudySessionParam, StudyInviteView, StudySession},
        user::User,
    },
    service::activity::ActivityService,
    util::text::default_room_slug,
};

const MEET_BASE_URL: &str = "https://meet.jit.si";
/// Everything but alphanumerics and the RFC 2396 unreserved marks is encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
pub const INVITE_LIST_LIMIT: u64 = 20;
/// Invites older than this are deactivated by the scheduler.
pub const INVITE_TTL: Duration = Duration::hours(24);

pub struct StudyService<'a> {
    db: &'a DatabaseConnection,
    room_prefix: &'a str,
}

impl<'a> StudyService<'a> {
    pub fn new(db: &'a DatabaseConnection, room_prefix: &'a str) -> Self {
        Self { db, room_prefix }
    }

    /// Opens a room and invites the chosen users, or every accepted connection.
    ///
    /// Ids in an explicit list that belong to no user are skipped.
    pub async fn start(
        &self,
        host: &User,
        param: StartStudySessionParam,
    ) -> Result<StudySession, AppError> {
        let room_slug = param
            .room_slug
            .map(|slug| slug.trim().to_string())
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(default_room_slug);

        let mut invitees: Vec<i32> = match param.invitees {
            Some(requested) => UserRepository::new(self.db)
                .find_by_ids(&requested)
                .await?
                .into_iter()
                .map(|user| user.id)
                .collect(),
            None => ConnectionRepository::new(self.db).accepted_ids(host.id).await?,
        };
        invitees.retain(|id| *id != host.id);
        invitees.sort_unstable();
        invitees.dedup();

        let invited_count = StudyInviteRepository::new(self.db)
            .create_many(host.id, &room_slug, &invitees, Utc::now())
            .await?;

        ActivityService::new(self.db)
            .log(
                host.id,
                NewActivity::new(ActivityAction::StudySessionCreated, "Started a study session")
                    .resource(ActivityResourceType::StudySession, &room_slug)
                    .metadata(serde_json::json!({ "invitedCount": invited_count })),
            )
            .await;

        Ok(StudySession {
            meet_url: meet_url(self.room_prefix, &room_slug),
            room_slug,
            invited_count,
        })
    }

    /// Active invites of the user with host details, newest first.
    pub async fn get_invites(&self, user_id: i32) -> Result<Vec<StudyInviteView>, AppError> {
        let invites = StudyInviteRepository::new(self.db)
            .active_for_user(user_id, INVITE_LIST_LIMIT)
            .await?;

        let host_ids: Vec<i32> = invites.iter().map(|invite| invite.host_id).collect();
        let hosts: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(&host_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Ok(invites
            .into_iter()
            .map(|invite| {
                let host = hosts.get(&invite.host_id);
                StudyInviteView {
                    host_name: host.map(|h| h.name.clone()).unwrap_or_default(),
                    host_email: host.map(|h| h.email.clone()).unwrap_or_default(),
                    meet_url: meet_url(self.room_prefix, &invite.room_slug),
                    invite,
                }
            })
            .collect())
    }

    /// Deactivates one of the user's invites.
    pub async fn dismiss(&self, user_id: i32, invite_id: i32) -> Result<(), AppError> {
        if !StudyInviteRepository::new(self.db)
            .deactivate(invite_id, user_id)
            .await?
        {
            return Err(AppError::NotFound("Invite not found".to_string()));
        }

        Ok(())
    }

    /// Deactivates every invite created before `now - 24h`.
    pub async fn expire_stale(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        Ok(StudyInviteRepository::new(self.db)
            .deactivate_older_than(now - INVITE_TTL)
            .await?)
    }
}

/// Link to the conference room for a slug, skipping the pre-join page.
///
/// The slug is percent-encoded as a URI component, so a space becomes `%20`.
pub fn meet_url(prefix: &str, room_slug: &str) -> String {
    let slug = utf8_percent_encode(room_slug, URI_COMPONENT);
    format!(
        "{}/{}-{}#config.prejoinPageEnabled=true",
        MEET_BASE_URL, prefix, slug
    )
}
