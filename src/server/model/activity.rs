//! Activity log models.

use chrono::{DateTime, Utc};

use crate::{
    model::activity::{
        ActionCountDto, ActivityDto, ActivityPageDto, ActivityPaginationDto, CreateActivityDto,
    },
    server::{error::AppError, model::{resource::Visibility, string_enum}},
};

string_enum!(
    /// Actions the server records on behalf of users.
    ActivityAction, "activity action" {
        ResourceUpload => "resource_upload",
        ResourceDownload => "resource_download",
        ResourceDeleted => "resource_deleted",
        DeadlineCreated => "deadline_created",
        DeadlineCompleted => "deadline_completed",
        DeadlineDeleted => "deadline_deleted",
        DeadlineUpdated => "deadline_updated",
        DeadlineVoted => "deadline_voted",
        EventRegistered => "event_registered",
        EventCreated => "event_created",
        EventCancelled => "event_cancelled",
        EventDeleted => "event_deleted",
        CourseEnrolled => "course_enrolled",
        CourseDropped => "course_dropped",
        ReviewPosted => "review_posted",
        ConnectionAccepted => "connection_accepted",
        ConnectionRequested => "connection_requested",
        ConnectionRejected => "connection_rejected",
        ConnectionRemoved => "connection_removed",
        StudySessionCreated => "study_session_created",
        ProfileUpdated => "profile_updated",
        DirectoryCreated => "directory_created",
        DirectoryDeleted => "directory_deleted",
        InterestsUpdated => "interests_updated",
    }
);

string_enum!(
    ActivityResourceType, "activity resource type" {
        Course => "course",
        Event => "event",
        Resource => "resource",
        Deadline => "deadline",
        Review => "review",
        Connection => "connection",
        StudySession => "study_session",
        Profile => "profile",
        Directory => "directory",
    }
);

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub user_id: i32,
    pub action: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Converts the stored row. Metadata that is not valid JSON is dropped.
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        let metadata = entity
            .metadata
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok());

        Self {
            id: entity.id,
            user_id: entity.user_id,
            action: entity.action,
            resource_type: entity.resource_type,
            resource_id: entity.resource_id,
            title: entity.title,
            description: entity.description,
            metadata,
            visibility: entity.visibility,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            action: self.action,
            resource_type: self.resource_type,
            resource_id: self.resource_id,
            title: self.title,
            description: self.description,
            metadata: self.metadata,
            visibility: self.visibility,
            created_at: self.created_at,
        }
    }
}

/// Entry to append to a user's activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub action: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub visibility: Visibility,
}

impl NewActivity {
    /// Private entry for a server-recorded action.
    pub fn new(action: ActivityAction, title: impl Into<String>) -> Self {
        Self {
            action: action.as_str().to_string(),
            resource_type: None,
            resource_id: None,
            title: title.into(),
            description: None,
            metadata: None,
            visibility: Visibility::Private,
        }
    }

    pub fn resource(mut self, resource_type: ActivityResourceType, id: impl ToString) -> Self {
        self.resource_type = Some(resource_type.as_str().to_string());
        self.resource_id = Some(id.to_string());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validates a client-submitted entry.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `action` or `details.title` is blank, or the
    ///   visibility is not `private`/`public`
    pub fn from_dto(dto: CreateActivityDto) -> Result<Self, AppError> {
        let action = dto.action.trim().to_string();
        let title = dto
            .details
            .title
            .map(|title| title.trim().to_string())
            .unwrap_or_default();
        if action.is_empty() || title.is_empty() {
            return Err(AppError::BadRequest(
                "Missing required fields: action and details.title".to_string(),
            ));
        }

        let visibility = match dto.visibility.as_deref().map(str::trim) {
            None | Some("") | Some("private") => Visibility::Private,
            Some("public") => Visibility::Public,
            Some(_) => {
                return Err(AppError::BadRequest(
                    "Visibility must be private or public".to_string(),
                ))
            }
        };

        Ok(Self {
            action,
            resource_type: dto.resource_type,
            resource_id: dto.resource_id,
            title,
            description: dto.details.description,
            metadata: dto.details.metadata,
            visibility,
        })
    }
}

/// Filters for listing activities; `None` means no filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub action: Option<String>,
    pub resource_type: Option<String>,
}

impl ActivityFilter {
    /// Builds a filter from query values, treating blank and `all` as absent.
    pub fn from_query(action: Option<String>, resource_type: Option<String>) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty() && v != "all")
        };

        Self {
            action: clean(action),
            resource_type: clean(resource_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPage {
    pub activities: Vec<Activity>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    /// Per-action counts over all of the user's entries, largest first.
    pub counts: Vec<(String, u64)>,
}

impl ActivityPage {
    pub fn into_dto(self) -> ActivityPageDto {
        ActivityPageDto {
            activities: self.activities.into_iter().map(Activity::into_dto).collect(),
            pagination: ActivityPaginationDto {
                page: self.page,
                limit: self.limit,
                total: self.total,
                total_pages: self.total.div_ceil(self.limit.max(1)),
            },
            counts: self
                .counts
                .into_iter()
                .map(|(action, count)| ActionCountDto { action, count })
                .collect(),
        }
    }
}
