//! Resource directory and resource models, including the visibility rule shared by both.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::resource::{
        CourseResourcesDto, CreateDirectoryDto, CreateResourceDto, DirectoryDto,
        DirectoryPageDto, DirectoryValidationDto, ResourceDto, ResourcePageDto, VoteTallyDto,
    },
    server::{
        error::AppError,
        model::{course::ClassKind, string_enum, vote::VoteTally},
        util::{
            file::{extract_youtube_id, file_type_label, format_bytes},
            page::clamp_page,
        },
    },
};

string_enum!(
    /// Who may see a directory, resource or activity entry.
    Visibility, "visibility" {
        Public => "public",
        Private => "private",
        Connections => "connections",
    }
);

impl Visibility {
    /// Whether `viewer` may see an item owned by `owner` with this visibility.
    ///
    /// `is_connected` reports whether viewer and owner share an accepted connection.
    pub fn allows(&self, owner: Option<i32>, viewer: Option<i32>, is_connected: bool) -> bool {
        match self {
            Visibility::Public => true,
            Visibility::Private => owner.is_some() && owner == viewer,
            Visibility::Connections => {
                owner.is_some() && viewer.is_some() && (owner == viewer || is_connected)
            }
        }
    }

    /// Parses a visibility chosen for a user-owned directory (`private` or `connections`).
    pub fn parse_personal(raw: &str) -> Result<Self, AppError> {
        match raw.trim().parse::<Visibility>() {
            Ok(v @ (Visibility::Private | Visibility::Connections)) => Ok(v),
            _ => Err(AppError::BadRequest(
                "Visibility must be private or connections".to_string(),
            )),
        }
    }
}

string_enum!(
    ResourceKind, "resource kind" {
        File => "file",
        Youtube => "youtube",
    }
);

#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub title: String,
    /// `None` for system directories.
    pub owner_id: Option<i32>,
    pub visibility: Visibility,
    pub parent_id: Option<i32>,
    pub subdirectory_kind: Option<ClassKind>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Directory {
    pub fn from_entity(entity: entity::resource_directory::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            course_code: entity.course_code,
            course_name: entity.course_name,
            title: entity.title,
            owner_id: entity.owner_id,
            visibility: entity.visibility.parse()?,
            parent_id: entity.parent_id,
            subdirectory_kind: entity
                .subdirectory_kind
                .map(|kind| kind.parse())
                .transpose()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_subdirectory(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Converts a directory without loaded counts, as returned right after a write.
    pub fn into_dto(self) -> DirectoryDto {
        DirectoryView {
            directory: self,
            resource_count: 0,
            subdirectories: Vec::new(),
        }
        .into_dto()
    }
}

/// Directory with its resource count and, when loaded, its subdirectories.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    pub directory: Directory,
    pub resource_count: u64,
    pub subdirectories: Vec<DirectoryView>,
}

impl DirectoryView {
    pub fn into_dto(self) -> DirectoryDto {
        let directory = self.directory;

        DirectoryDto {
            id: directory.id,
            course_code: directory.course_code,
            course_name: directory.course_name,
            title: directory.title,
            owner_id: directory.owner_id,
            visibility: directory.visibility.as_str().to_string(),
            parent_id: directory.parent_id,
            subdirectory_kind: directory
                .subdirectory_kind
                .map(|kind| kind.as_str().to_string()),
            resource_count: self.resource_count,
            created_at: directory.created_at,
            updated_at: directory.updated_at,
            subdirectories: self
                .subdirectories
                .into_iter()
                .map(DirectoryView::into_dto)
                .collect(),
        }
    }
}

string_enum!(
    DirectorySort, "sort" {
        Newest => "newest",
        Oldest => "oldest",
        CodeAsc => "code_asc",
        CodeDesc => "code_desc",
        TitleAsc => "title_asc",
        TitleDesc => "title_desc",
    }
);

impl DirectorySort {
    /// Parses the `sort` query value, falling back to `code_asc`.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok())
            .unwrap_or(DirectorySort::CodeAsc)
    }
}

/// Listing query for directories. `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    pub sort: DirectorySort,
    pub page: u64,
    pub limit: u64,
}

impl DirectoryQuery {
    /// Builds a query from request values, clamping the page to `>= 1` and the limit
    /// to `1..=max_limit`.
    pub fn from_request(
        q: Option<String>,
        sort: Option<&str>,
        page: Option<u64>,
        limit: Option<u64>,
        default_limit: u64,
        max_limit: u64,
    ) -> Self {
        Self {
            q: trimmed(q),
            sort: DirectorySort::from_query(sort),
            page: clamp_page(page.unwrap_or(1)),
            limit: limit.unwrap_or(default_limit).clamp(1, max_limit),
        }
    }
}

/// Directory page with the total number of matching directories.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryPage {
    pub items: Vec<DirectoryView>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl DirectoryPage {
    /// `with_total_pages` adds the page count, which only the private listing reports.
    pub fn into_dto(self, with_total_pages: bool) -> DirectoryPageDto {
        let total_pages = self.total.div_ceil(self.limit.max(1));

        DirectoryPageDto {
            items: self.items.into_iter().map(DirectoryView::into_dto).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: with_total_pages.then_some(total_pages),
        }
    }
}

/// Outcome of checking whether a course code can back a new directory.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryValidation {
    Valid { has_lab: bool, course_name: String },
    Invalid(String),
}

impl DirectoryValidation {
    pub fn into_dto(self) -> DirectoryValidationDto {
        match self {
            DirectoryValidation::Valid {
                has_lab,
                course_name,
            } => DirectoryValidationDto {
                valid: true,
                has_lab: Some(has_lab),
                course_name: Some(course_name),
                message: None,
            },
            DirectoryValidation::Invalid(message) => DirectoryValidationDto {
                valid: false,
                has_lab: None,
                course_name: None,
                message: Some(message),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDirectoryParam {
    pub course_code: String,
    /// Empty when the client left it out; the service fills it from the catalog.
    pub course_name: String,
    pub title: String,
    pub visibility: Visibility,
}

impl CreateDirectoryParam {
    pub fn from_dto(dto: CreateDirectoryDto) -> Result<Self, AppError> {
        let course_code = dto.course_code.trim().to_uppercase();
        let title = dto.title.trim().to_string();
        if course_code.is_empty() || title.is_empty() {
            return Err(AppError::BadRequest(
                "Course code and title are required".to_string(),
            ));
        }

        let visibility = match trimmed(dto.visibility) {
            Some(raw) => Visibility::parse_personal(&raw)?,
            None => Visibility::Private,
        };

        Ok(Self {
            course_code,
            course_name: trimmed(dto.course_name).unwrap_or_default(),
            title,
            visibility,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub directory_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub kind: ResourceKind,
    pub url: String,
    pub mime: Option<String>,
    pub bytes: Option<i64>,
    pub provider: Option<String>,
    pub storage_path: Option<String>,
    pub original_name: Option<String>,
    pub video_id: Option<String>,
    pub owner_id: Option<i32>,
    pub visibility: Visibility,
    pub inherit_visibility: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    pub fn from_entity(entity: entity::resource::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            course_code: entity.course_code,
            course_name: entity.course_name,
            directory_id: entity.directory_id,
            title: entity.title,
            description: entity.description,
            kind: entity.kind.parse()?,
            url: entity.url,
            mime: entity.mime,
            bytes: entity.bytes,
            provider: entity.provider,
            storage_path: entity.storage_path,
            original_name: entity.original_name,
            video_id: entity.video_id,
            owner_id: entity.owner_id,
            visibility: entity.visibility.parse()?,
            inherit_visibility: entity.inherit_visibility,
            created_at: entity.created_at,
        })
    }

    /// Visibility that applies to this resource, taking the directory's when inherited.
    pub fn effective_visibility(&self, directory: Option<&Directory>) -> Visibility {
        match directory {
            Some(directory) if self.inherit_visibility => directory.visibility,
            _ => self.visibility,
        }
    }
}

/// Resource with its vote tally, ready for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceView {
    pub resource: Resource,
    pub visibility: Visibility,
    pub votes: VoteTally,
}

impl ResourceView {
    pub fn into_dto(self) -> ResourceDto {
        let resource = self.resource;
        let file_type = file_type_label(resource.kind, resource.mime.as_deref(), &resource.url);

        ResourceDto {
            id: resource.id,
            course_code: resource.course_code,
            course_name: resource.course_name,
            directory_id: resource.directory_id,
            title: resource.title,
            description: resource.description,
            kind: resource.kind.as_str().to_string(),
            url: resource.url,
            mime: resource.mime,
            bytes: resource.bytes,
            file_type: file_type.to_string(),
            size_label: resource.bytes.map(format_bytes),
            original_name: resource.original_name,
            video_id: resource.video_id,
            owner_id: resource.owner_id,
            visibility: self.visibility.as_str().to_string(),
            created_at: resource.created_at,
            upvotes: self.votes.positive,
            downvotes: self.votes.negative,
            score: self.votes.score(),
            user_vote: self.votes.viewer_direction(),
        }
    }
}

/// Validated resource upload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResourceParam {
    pub course_code: String,
    pub course_name: String,
    pub directory_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub kind: ResourceKind,
    pub url: String,
    pub mime: Option<String>,
    pub bytes: Option<i64>,
    pub provider: Option<String>,
    pub storage_path: Option<String>,
    pub original_name: Option<String>,
    pub video_id: Option<String>,
}

impl NewResourceParam {
    /// Validates an upload body.
    ///
    /// The kind defaults to `youtube` when only a YouTube URL is given and to `file`
    /// otherwise.
    pub fn from_dto(dto: CreateResourceDto) -> Result<Self, AppError> {
        let course_code = trimmed(dto.course_code).map(|code| code.to_uppercase());
        let course_name = trimmed(dto.course_name);
        let title = trimmed(dto.title);
        let (Some(course_code), Some(course_name), Some(title)) = (course_code, course_name, title)
        else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        let youtube_url = dto.youtube.and_then(|youtube| trimmed(youtube.url));
        let kind = match dto.kind.as_deref().map(str::parse::<ResourceKind>) {
            Some(Ok(kind)) => kind,
            _ if youtube_url.is_some() => ResourceKind::Youtube,
            _ => ResourceKind::File,
        };

        let mut param = Self {
            course_code,
            course_name,
            directory_id: dto.directory_id,
            title,
            description: trimmed(dto.description),
            kind,
            url: String::new(),
            mime: None,
            bytes: None,
            provider: None,
            storage_path: None,
            original_name: None,
            video_id: None,
        };

        match kind {
            ResourceKind::File => {
                let file = dto.file.unwrap_or_default();
                param.url = trimmed(file.url)
                    .ok_or_else(|| AppError::BadRequest("File url required".to_string()))?;
                param.mime = trimmed(file.mime);
                param.bytes = file.bytes.filter(|bytes| *bytes >= 0);
                param.provider = trimmed(file.provider);
                param.storage_path = trimmed(file.storage_path);
                param.original_name = trimmed(file.original_name);
            }
            ResourceKind::Youtube => {
                let url = youtube_url
                    .ok_or_else(|| AppError::BadRequest("YouTube url required".to_string()))?;
                let video_id = extract_youtube_id(&url)
                    .ok_or_else(|| AppError::BadRequest("Invalid YouTube url".to_string()))?;
                param.url = url;
                param.video_id = Some(video_id);
            }
        }

        Ok(param)
    }
}

/// Public resources of one course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseResources {
    pub course_code: String,
    pub course_name: String,
    pub resources: Vec<ResourceView>,
}

impl CourseResources {
    pub fn into_dto(self) -> CourseResourcesDto {
        CourseResourcesDto {
            course_code: self.course_code,
            course_name: self.course_name,
            count: self.resources.len() as u64,
            resources: self.resources.into_iter().map(ResourceView::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePage {
    pub items: Vec<ResourceView>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl ResourcePage {
    pub fn into_dto(self) -> ResourcePageDto {
        ResourcePageDto {
            total_pages: self.total.div_ceil(self.limit.max(1)),
            items: self.items.into_iter().map(ResourceView::into_dto).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

impl VoteTally {
    pub fn into_resource_dto(self) -> VoteTallyDto {
        VoteTallyDto {
            up: self.positive,
            down: self.negative,
            score: self.score(),
            user_vote: self.viewer_direction(),
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
