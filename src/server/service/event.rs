//! Club events and registrations.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, interest::InterestRepository, is_unique_violation,
        registration::RegistrationRepository,
    },
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        event::{
            CreateEventParam, Event, EventPage, RegisterOutcome, RegisteredEvent, Registrant,
            RegistrationStatus, UpdateEventParam,
        },
        user::User,
    },
    service::{activity::ActivityService, storage::StorageClient},
    util::page::{clamp_page, offset},
};

pub const DEFAULT_EVENT_LIMIT: u64 = 50;
pub const MAX_EVENT_LIMIT: u64 = 100;

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of events dated today or later.
    pub async fn get_upcoming(&self, page: u64, limit: u64) -> Result<EventPage, AppError> {
        let (page, limit) = page_bounds(page, limit);
        let today = Utc::now().date_naive();

        let (events, total) = EventRepository::new(self.db)
            .get_upcoming_paginated(today, page, limit)
            .await?;

        Ok(EventPage {
            events,
            page,
            per_page: limit,
            total,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(event_not_found)
    }

    /// Creates an event for the admin's club.
    ///
    /// The caller must already have passed the club-admin guard.
    pub async fn create(&self, admin: &User, param: CreateEventParam) -> Result<Event, AppError> {
        let club_id = admin_club(admin)?;

        let event = EventRepository::new(self.db)
            .create(club_id, admin.id, param, Utc::now())
            .await?;

        ActivityService::new(self.db)
            .log(
                admin.id,
                NewActivity::new(ActivityAction::EventCreated, format!("Created event {}", event.title))
                    .resource(ActivityResourceType::Event, event.id),
            )
            .await;

        Ok(event)
    }

    /// Applies a partial edit to an event of the admin's club.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such event
    /// - `Err(AppError::Forbidden)` - The event belongs to another club
    pub async fn update(&self, admin: &User, id: i32, param: UpdateEventParam) -> Result<Event, AppError> {
        self.find_managed(admin, id).await?;

        EventRepository::new(self.db)
            .update(id, param, Utc::now())
            .await?
            .ok_or_else(event_not_found)
    }

    /// Deletes an event of the admin's club with its registrations, then removes the
    /// stored banner image.
    pub async fn delete(
        &self,
        admin: &User,
        id: i32,
        storage: &StorageClient<'_>,
    ) -> Result<(), AppError> {
        let event = self.find_managed(admin, id).await?;

        EventRepository::new(self.db).delete(id).await?;

        if let (Some(bucket), Some(path)) = (&event.image_bucket, &event.image_path) {
            storage
                .remove_best_effort(bucket, std::slice::from_ref(path))
                .await;
        }

        ActivityService::new(self.db)
            .log(
                admin.id,
                NewActivity::new(ActivityAction::EventDeleted, format!("Deleted event {}", event.title))
                    .resource(ActivityResourceType::Event, event.id),
            )
            .await;

        Ok(())
    }

    /// Registers the user for an event that has not started yet.
    ///
    /// # Returns
    /// - `Ok(RegisterOutcome)` - Registered, reactivated, or already registered
    /// - `Err(AppError::NotFound)` - No such event
    /// - `Err(AppError::BadRequest)` - The event has already started
    pub async fn register(&self, user_id: i32, event_id: i32) -> Result<RegisterOutcome, AppError> {
        let event = self.get_by_id(event_id).await?;
        let now = Utc::now();
        if event.has_started(now) {
            return Err(AppError::BadRequest("Registration is closed".to_string()));
        }

        let repo = RegistrationRepository::new(self.db);
        let outcome = match repo.find(event_id, user_id).await? {
            Some(existing) if existing.status == RegistrationStatus::Registered => {
                return Ok(RegisterOutcome::AlreadyRegistered)
            }
            Some(_) => {
                repo.set_status(event_id, user_id, RegistrationStatus::Registered, now)
                    .await?;
                RegisterOutcome::Reactivated
            }
            None => match repo.create(event_id, user_id, now).await {
                Ok(_) => RegisterOutcome::Registered,
                // A concurrent request registered first.
                Err(err) if is_unique_violation(&err) => {
                    return Ok(RegisterOutcome::AlreadyRegistered)
                }
                Err(err) => return Err(err.into()),
            },
        };

        ActivityService::new(self.db)
            .log(
                user_id,
                NewActivity::new(
                    ActivityAction::EventRegistered,
                    format!("Registered for {}", event.title),
                )
                .resource(ActivityResourceType::Event, event.id),
            )
            .await;

        Ok(outcome)
    }

    /// Cancels the user's active registration.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The event has already started
    /// - `Err(AppError::NotFound)` - No such event or no active registration
    pub async fn cancel_registration(&self, user_id: i32, event_id: i32) -> Result<(), AppError> {
        let event = self.get_by_id(event_id).await?;
        let now = Utc::now();
        if event.has_started(now) {
            return Err(AppError::BadRequest(
                "Cannot cancel registration for a past event".to_string(),
            ));
        }

        let repo = RegistrationRepository::new(self.db);
        let active = repo
            .find(event_id, user_id)
            .await?
            .is_some_and(|registration| registration.status == RegistrationStatus::Registered);
        if !active {
            return Err(AppError::NotFound("Registration not found".to_string()));
        }

        repo.set_status(event_id, user_id, RegistrationStatus::Cancelled, now)
            .await?;

        ActivityService::new(self.db)
            .log(
                user_id,
                NewActivity::new(
                    ActivityAction::EventCancelled,
                    format!("Cancelled registration for {}", event.title),
                )
                .resource(ActivityResourceType::Event, event.id),
            )
            .await;

        Ok(())
    }

    /// Active registrants of an event of the admin's club.
    pub async fn get_registrants(&self, admin: &User, event_id: i32) -> Result<Vec<Registrant>, AppError> {
        self.find_managed(admin, event_id).await?;

        Ok(RegistrationRepository::new(self.db)
            .get_registrants(event_id)
            .await?)
    }

    pub async fn get_club_events(&self, admin: &User) -> Result<Vec<Event>, AppError> {
        let club_id = admin_club(admin)?;

        Ok(EventRepository::new(self.db).get_for_club(club_id).await?)
    }

    /// Upcoming events tagged with one of the user's interests, ignoring case.
    ///
    /// Returns an empty first page when the user has no interests.
    pub async fn get_recommended(&self, user_id: i32, page: u64, limit: u64) -> Result<EventPage, AppError> {
        let (page, limit) = page_bounds(page, limit);
        let interests: HashSet<String> = InterestRepository::new(self.db)
            .get(user_id)
            .await?
            .into_iter()
            .map(|interest| interest.to_lowercase())
            .collect();
        if interests.is_empty() {
            return Ok(EventPage::empty(1, limit));
        }

        let now = Utc::now();
        let matching = EventRepository::new(self.db)
            .get_upcoming(now.date_naive())
            .await?
            .into_iter()
            .filter(|event| !event.has_started(now) && matches_interests(event, &interests))
            .collect();

        Ok(paginate(matching, page, limit))
    }

    /// The user's active registrations, by event date.
    pub async fn get_registered(&self, user_id: i32) -> Result<Vec<RegisteredEvent>, AppError> {
        let registrations = RegistrationRepository::new(self.db)
            .get_active_for_user(user_id)
            .await?;
        let event_ids: Vec<i32> = registrations.iter().map(|r| r.event_id).collect();
        let mut events = EventRepository::new(self.db).find_by_ids(&event_ids).await?;

        let mut registered: Vec<RegisteredEvent> = registrations
            .into_iter()
            .filter_map(|registration| {
                events
                    .remove(&registration.event_id)
                    .map(|event| RegisteredEvent { event, registration })
            })
            .collect();
        registered.sort_by_key(|item| item.event.starts_at());

        Ok(registered)
    }

    async fn find_managed(&self, admin: &User, id: i32) -> Result<Event, AppError> {
        let club_id = admin_club(admin)?;
        let event = self.get_by_id(id).await?;
        if event.club_id != club_id {
            return Err(AppError::Forbidden(
                "You can only manage events of your own club".to_string(),
            ));
        }

        Ok(event)
    }
}

fn admin_club(user: &User) -> Result<i32, AppError> {
    user.admin_club_id
        .filter(|_| user.is_admin)
        .ok_or_else(|| AppError::Forbidden("Club admin privileges required".to_string()))
}

fn event_not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}

/// Clamps a 1-based page and a page size to the allowed range.
pub fn page_bounds(page: u64, limit: u64) -> (u64, u64) {
    (clamp_page(page), limit.clamp(1, MAX_EVENT_LIMIT))
}

fn matches_interests(event: &Event, interests: &HashSet<String>) -> bool {
    event
        .tags
        .iter()
        .any(|tag| interests.contains(&tag.to_lowercase()))
}

fn paginate(events: Vec<Event>, page: u64, limit: u64) -> EventPage {
    let total = events.len() as u64;
    let skip = usize::try_from(offset(page, limit)).unwrap_or(usize::MAX);

    EventPage {
        events: events.into_iter().skip(skip).take(limit as usize).collect(),
        page,
        per_page: limit,
        total,
    }
}
