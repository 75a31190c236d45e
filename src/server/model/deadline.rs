//! Deadline models. A `Deadline` is the canonical row; a `UserDeadline` is the
//! denormalized per-user copy that carries course details and completion state.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::{
    model::deadline::{
        CreateDeadlineDto, DeadlineDto, FinishedDeadlinesDto, UpdateDeadlineDto, UserDeadlineDto,
    },
    server::{
        error::AppError,
        model::{course::ClassKind, vote::VoteTally},
        util::time::parse_instant,
    },
};

/// How long after creation the creator may still edit or delete a deadline.
pub const EDIT_WINDOW: Duration = Duration::hours(24);

#[derive(Debug, Clone, PartialEq)]
pub struct Deadline {
    pub id: String,
    pub course_id: i32,
    pub section: String,
    pub kind: ClassKind,
    pub title: String,
    pub details: String,
    pub submission_link: Option<String>,
    pub last_date: DateTime<Utc>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl Deadline {
    pub fn from_entity(entity: entity::deadline::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            course_id: entity.course_id,
            section: entity.section,
            kind: entity.kind.parse()?,
            title: entity.title,
            details: entity.details,
            submission_link: entity.submission_link,
            last_date: entity.last_date,
            created_by: entity.created_by,
            created_at: entity.created_at,
        })
    }

    /// Whether the edit window is still open at `now`.
    pub fn is_editable_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at <= EDIT_WINDOW
    }
}

/// Deadline enriched with creator details and votes for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineView {
    pub deadline: Deadline,
    pub creator_name: String,
    pub creator_student_id: String,
    pub votes: VoteTally,
}

impl DeadlineView {
    pub fn into_dto(self) -> DeadlineDto {
        let user_vote = self.votes.viewer_choice();
        let deadline = self.deadline;

        DeadlineDto {
            id: deadline.id,
            course_id: deadline.course_id,
            section: deadline.section,
            kind: deadline.kind.as_str().to_string(),
            title: deadline.title,
            details: deadline.details,
            submission_link: deadline.submission_link,
            last_date: deadline.last_date,
            created_by: deadline.created_by,
            created_by_name: self.creator_name,
            created_by_student_id: self.creator_student_id,
            created_at: deadline.created_at,
            agree_count: self.votes.positive,
            disagree_count: self.votes.negative,
            user_vote,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDeadline {
    pub user_id: i32,
    pub deadline_id: String,
    pub course_id: i32,
    pub course_code: String,
    pub course_name: String,
    pub section: String,
    pub kind: ClassKind,
    pub title: String,
    pub details: String,
    pub submission_link: Option<String>,
    pub last_date: DateTime<Utc>,
    pub created_by_name: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl UserDeadline {
    pub fn from_entity(entity: entity::user_deadline::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: entity.user_id,
            deadline_id: entity.deadline_id,
            course_id: entity.course_id,
            course_code: entity.course_code,
            course_name: entity.course_name,
            section: entity.section,
            kind: entity.kind.parse()?,
            title: entity.title,
            details: entity.details,
            submission_link: entity.submission_link,
            last_date: entity.last_date,
            created_by_name: entity.created_by_name,
            completed: entity.completed,
            completed_at: entity.completed_at,
        })
    }

    pub fn into_dto(self) -> UserDeadlineDto {
        UserDeadlineDto {
            deadline_id: self.deadline_id,
            course_id: self.course_id,
            course_code: self.course_code,
            course_name: self.course_name,
            section: self.section,
            kind: self.kind.as_str().to_string(),
            title: self.title,
            details: self.details,
            submission_link: self.submission_link,
            last_date: self.last_date,
            created_by_name: self.created_by_name,
            completed: self.completed,
            completed_at: self.completed_at,
        }
    }
}

/// Past or completed deadlines of the caller's section, split by class kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinishedDeadlines {
    pub theory: Vec<DeadlineView>,
    pub lab: Vec<DeadlineView>,
}

impl FinishedDeadlines {
    pub fn into_dto(self) -> FinishedDeadlinesDto {
        FinishedDeadlinesDto {
            theory: self.theory.into_iter().map(DeadlineView::into_dto).collect(),
            lab: self.lab.into_iter().map(DeadlineView::into_dto).collect(),
        }
    }
}

/// Course and creator details copied into every user's deadline row.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineCopySource {
    pub course_code: String,
    pub course_name: String,
    pub created_by_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDeadlineParam {
    pub course_id: i32,
    pub section: String,
    pub kind: ClassKind,
    pub title: String,
    pub details: String,
    pub submission_link: Option<String>,
    pub last_date: DateTime<Utc>,
}

impl CreateDeadlineParam {
    /// Validates the request body.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - A required field is missing or blank, the type is
    ///   not `theory`/`lab`, or `lastDate` is not a recognizable date
    pub fn from_dto(dto: CreateDeadlineDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest("Missing required fields".to_string());

        let course_id = dto.course_id.ok_or_else(missing)?;
        let section = non_blank(dto.section).ok_or_else(missing)?;
        let kind = non_blank(dto.kind).ok_or_else(missing)?;
        let title = non_blank(dto.title).ok_or_else(missing)?;
        let details = non_blank(dto.details).ok_or_else(missing)?;
        let last_date = non_blank(dto.last_date).ok_or_else(missing)?;

        let kind = kind
            .parse::<ClassKind>()
            .map_err(|_| AppError::BadRequest("Invalid deadline type".to_string()))?;
        let last_date = parse_instant(&last_date)
            .ok_or_else(|| AppError::BadRequest("Invalid lastDate".to_string()))?;

        Ok(Self {
            course_id,
            section,
            kind,
            title,
            details,
            submission_link: non_blank(dto.submission_link),
            last_date,
        })
    }
}

/// Partial edit of a deadline; applied to the canonical row and every copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDeadlineParam {
    pub title: Option<String>,
    pub details: Option<String>,
    /// `Some(None)` clears the link.
    pub submission_link: Option<Option<String>>,
    pub last_date: Option<DateTime<Utc>>,
}

impl UpdateDeadlineParam {
    pub fn from_dto(dto: UpdateDeadlineDto) -> Result<Self, AppError> {
        let last_date = match dto.last_date {
            Some(raw) => Some(
                parse_instant(&raw)
                    .ok_or_else(|| AppError::BadRequest("Invalid lastDate".to_string()))?,
            ),
            None => None,
        };

        let param = Self {
            title: non_blank(dto.title),
            details: non_blank(dto.details),
            submission_link: dto.submission_link.map(|link| non_blank(Some(link))),
            last_date,
        };

        if param.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        Ok(param)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.details.is_none()
            && self.submission_link.is_none()
            && self.last_date.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
