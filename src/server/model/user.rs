//! User domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::user::{
    CheckUserDto, CreateUserDto, ProfileDto, UpdateProfileDto, UserCardDto, UserDto, UserSummaryDto,
};

/// Shown when a user has no profile picture.
pub const DEFAULT_PICTURE_URL: &str = "/logo.svg";
pub const DEFAULT_THEME_COLOR: &str = "blue";

/// Optional profile fields edited through the profile page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub school: Option<String>,
    pub college: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub snapchat: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
}

/// Registered portal user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub external_id: String,
    pub name: String,
    pub username: String,
    /// Always stored lowercased.
    pub email: String,
    pub student_id: String,
    pub picture_url: String,
    pub profile: ProfileFields,
    pub theme_color: String,
    /// Verified club admin.
    pub is_admin: bool,
    pub admin_club_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            external_id: entity.external_id,
            name: entity.name,
            username: entity.username,
            email: entity.email,
            student_id: entity.student_id,
            picture_url: entity.picture_url,
            profile: ProfileFields {
                phone: entity.phone,
                bio: entity.bio,
                date_of_birth: entity.date_of_birth,
                blood_group: entity.blood_group,
                address: entity.address,
                department: entity.department,
                school: entity.school,
                college: entity.college,
                linkedin: entity.linkedin,
                github: entity.github,
                facebook: entity.facebook,
                instagram: entity.instagram,
                snapchat: entity.snapchat,
                twitter: entity.twitter,
                website: entity.website,
                youtube: entity.youtube,
            },
            theme_color: entity.theme_color,
            is_admin: entity.is_admin,
            admin_club_id: entity.admin_club_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            username: self.username,
            email: self.email,
            student_id: self.student_id,
            picture_url: self.picture_url,
            theme_color: self.theme_color,
            is_admin: self.is_admin,
            admin_club_id: self.admin_club_id,
            created_at: self.created_at,
        }
    }

    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            picture_url: self.picture_url,
        }
    }

    pub fn into_card_dto(self) -> UserCardDto {
        UserCardDto {
            id: self.id,
            name: self.name,
            username: self.username,
            email: self.email,
            picture_url: self.picture_url,
        }
    }
}

/// Relationship between a profile and the registered user viewing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerRelation {
    pub is_connected: bool,
    pub has_sent_request: bool,
}

/// Public profile page of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    pub interests: Vec<String>,
    pub viewer: Option<ViewerRelation>,
}

impl Profile {
    /// Converts to the DTO, substituting defaults for an empty picture or theme.
    pub fn into_dto(self) -> ProfileDto {
        let user = self.user;
        let picture_url = if user.picture_url.trim().is_empty() {
            DEFAULT_PICTURE_URL.to_string()
        } else {
            user.picture_url
        };
        let theme_color = if user.theme_color.trim().is_empty() {
            DEFAULT_THEME_COLOR.to_string()
        } else {
            user.theme_color
        };

        ProfileDto {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            student_id: user.student_id,
            picture_url,
            phone: user.profile.phone,
            bio: user.profile.bio,
            date_of_birth: user.profile.date_of_birth,
            blood_group: user.profile.blood_group,
            address: user.profile.address,
            department: user.profile.department,
            school: user.profile.school,
            college: user.profile.college,
            linkedin: user.profile.linkedin,
            github: user.profile.github,
            facebook: user.profile.facebook,
            instagram: user.profile.instagram,
            snapchat: user.profile.snapchat,
            twitter: user.profile.twitter,
            website: user.profile.website,
            youtube: user.profile.youtube,
            theme_color,
            interests: self.interests,
            is_connected: self.viewer.map(|v| v.is_connected),
            has_sent_request: self.viewer.map(|v| v.has_sent_request),
        }
    }
}

/// Fields required to insert or refresh a user row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserParam {
    pub external_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub student_id: String,
    pub picture_url: String,
}

/// Fields to check for format and uniqueness before registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub student_id: Option<String>,
}

/// Partial profile update; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub theme_color: Option<String>,
    pub profile: ProfileFields,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            theme_color: dto.theme_color,
            profile: ProfileFields {
                phone: dto.phone,
                bio: dto.bio,
                date_of_birth: dto.date_of_birth,
                blood_group: dto.blood_group,
                address: dto.address,
                department: dto.department,
                school: dto.school,
                college: dto.college,
                linkedin: dto.linkedin,
                github: dto.github,
                facebook: dto.facebook,
                instagram: dto.instagram,
                snapchat: dto.snapchat,
                twitter: dto.twitter,
                website: dto.website,
                youtube: dto.youtube,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.theme_color.is_none() && self.profile == ProfileFields::default()
    }
}

/// Where a search prefix matched, in ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchTier {
    FirstWord,
    SecondWord,
    Username,
}

impl SearchTier {
    pub const ALL: [SearchTier; 3] = [
        SearchTier::FirstWord,
        SearchTier::SecondWord,
        SearchTier::Username,
    ];
}

/// Explicit registration submitted by the sign-up form.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParam {
    pub name: String,
    pub username: String,
    pub email: String,
    pub student_id: String,
    pub picture_url: Option<String>,
}

impl CreateUserParam {
    /// Trims every field. Missing fields become empty and fail validation in the service.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();

        Self {
            name: trimmed(dto.name),
            username: trimmed(dto.username),
            email: trimmed(dto.email),
            student_id: trimmed(dto.student_id),
            picture_url: dto.picture_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

impl CheckUserParam {
    pub fn from_dto(dto: CheckUserDto) -> Self {
        let trimmed = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            username: trimmed(dto.username),
            email: trimmed(dto.email),
            student_id: trimmed(dto.student_id),
        }
    }
}
