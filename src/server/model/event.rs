//! Club event models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::event::{
        CreateEventDto, EventDto, EventPageDto, EventPaginationDto, RegisteredEventDto,
        RegistrationDto, UpdateEventDto,
    },
    server::{error::AppError, model::string_enum},
};

string_enum!(
    RegistrationStatus, "registration status" {
        Registered => "registered",
        Cancelled => "cancelled",
    }
);

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub club_id: i32,
    pub club_name: String,
    pub created_by: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// `HH:MM`, 24-hour clock.
    pub time: String,
    pub location: String,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub image_bucket: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model, club_name: String, tags: Vec<String>) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            club_name,
            created_by: entity.created_by,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            time: entity.time,
            location: entity.location,
            image_url: entity.image_url,
            image_path: entity.image_path,
            image_bucket: entity.image_bucket,
            tags,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Start of the event in UTC. An unparsable time counts as midnight.
    pub fn starts_at(&self) -> DateTime<Utc> {
        let time = parse_time(&self.time).unwrap_or(NaiveTime::MIN);
        self.date.and_time(time).and_utc()
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.starts_at() < now
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            club_id: self.club_id,
            club_name: self.club_name,
            created_by: self.created_by,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            image_url: self.image_url,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One page of events with the 1-based page number it was requested with.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl EventPage {
    pub fn empty(page: u64, per_page: u64) -> Self {
        Self {
            events: Vec::new(),
            page,
            per_page,
            total: 0,
        }
    }

    pub fn into_dto(self) -> EventPageDto {
        let total_pages = self.total.div_ceil(self.per_page.max(1));

        EventPageDto {
            events: self.events.into_iter().map(Event::into_dto).collect(),
            pagination: EventPaginationDto {
                current_page: self.page,
                total_pages,
                total_events: self.total,
                has_next_page: self.page * self.per_page < self.total,
                has_prev_page: self.page > 1,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateEventParam {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub image_bucket: Option<String>,
}

impl CreateEventParam {
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, AppError> {
        let required = |value: Option<String>| {
            trimmed(value)
                .ok_or_else(|| AppError::BadRequest("All fields are required".to_string()))
        };

        let title = required(dto.title)?;
        let description = required(dto.description)?;
        let date = parse_date(&required(dto.date)?)?;
        let time = validate_time(required(dto.time)?)?;
        let location = required(dto.location)?;

        Ok(Self {
            title,
            description,
            date,
            time,
            location,
            tags: clean_tags(dto.tags),
            image_url: trimmed(dto.image_url),
            image_path: trimmed(dto.image_path),
            image_bucket: trimmed(dto.image_bucket),
        })
    }
}

/// Partial event edit. Blank strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEventParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub image_bucket: Option<String>,
}

impl UpdateEventParam {
    /// Validates formats and rejects a date before `today`.
    pub fn from_dto(dto: UpdateEventDto, today: NaiveDate) -> Result<Self, AppError> {
        let date = match trimmed(dto.date) {
            Some(raw) => {
                let date = parse_date(&raw)?;
                if date < today {
                    return Err(AppError::BadRequest(
                        "Event date cannot be in the past".to_string(),
                    ));
                }
                Some(date)
            }
            None => None,
        };
        let time = trimmed(dto.time).map(validate_time).transpose()?;

        Ok(Self {
            title: trimmed(dto.title),
            description: trimmed(dto.description),
            date,
            time,
            location: trimmed(dto.location),
            tags: dto.tags.map(clean_tags),
            image_url: trimmed(dto.image_url),
            image_path: trimmed(dto.image_path),
            image_bucket: trimmed(dto.image_bucket),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub event_id: i32,
    pub user_id: i32,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Registration {
    pub fn from_entity(entity: entity::event_registration::Model) -> Result<Self, DbErr> {
        Ok(Self {
            event_id: entity.event_id,
            user_id: entity.user_id,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Result of a registration request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegisterOutcome {
    Registered,
    Reactivated,
    AlreadyRegistered,
}

impl RegisterOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RegisterOutcome::Registered | RegisterOutcome::Reactivated => {
                "Registration completed"
            }
            RegisterOutcome::AlreadyRegistered => "Already registered",
        }
    }
}

/// Registered attendee, as listed to the organizing club admin.
#[derive(Debug, Clone, PartialEq)]
pub struct Registrant {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub picture_url: String,
    pub registered_at: DateTime<Utc>,
}

impl Registrant {
    pub fn into_dto(self) -> RegistrationDto {
        RegistrationDto {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            student_id: self.student_id,
            picture_url: self.picture_url,
            registered_at: self.registered_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredEvent {
    pub event: Event,
    pub registration: Registration,
}

impl RegisteredEvent {
    pub fn into_dto(self, now: DateTime<Utc>) -> RegisteredEventDto {
        let is_past = self.event.has_started(now);

        RegisteredEventDto {
            event: self.event.into_dto(),
            status: self.registration.status.as_str().to_string(),
            registered_at: self.registration.created_at,
            is_past,
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims tags and drops empty ones, keeping order and removing duplicates.
pub fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !cleaned.contains(&tag) {
            cleaned.push(tag);
        }
    }
    cleaned
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Date must be in YYYY-MM-DD format".to_string()))
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

fn validate_time(raw: String) -> Result<String, AppError> {
    match parse_time(&raw) {
        Some(time) => Ok(time.format("%H:%M").to_string()),
        None => Err(AppError::BadRequest(
            "Time must be in HH:MM format".to_string(),
        )),
    }
}
