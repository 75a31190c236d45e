use crate::server::{
    error::AppError,
    model::{
        resource::{NewResourceParam, Resource, ResourceKind, Visibility},
        user::User,
        vote::ResourceVoteAction,
    },
    service::resource::ResourceService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        resource::{DirectoryFactory, ResourceFactory},
    },
};

mod create;
mod visibility;
mod vote;

fn link_param(course_code: &str, directory_id: Option<i32>) -> NewResourceParam {
    NewResourceParam {
        course_code: course_code.to_string(),
        course_name: "Algorithms".to_string(),
        directory_id,
        title: "Lecture recordings".to_string(),
        description: None,
        kind: ResourceKind::Youtube,
        url: "https://www.youtube.com/watch?v=abc123".to_string(),
        mime: None,
        bytes: None,
        provider: Some("youtube".to_string()),
        storage_path: None,
        original_name: None,
        video_id: Some("abc123".to_string()),
    }
}
