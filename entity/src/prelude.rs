pub use super::activity::Entity as Activity;
pub use super::class_schedule::Entity as ClassSchedule;
pub use super::club::Entity as Club;
pub use super::connection::Entity as Connection;
pub use super::course::Entity as Course;
pub use super::course_section::Entity as CourseSection;
pub use super::deadline::Entity as Deadline;
pub use super::deadline_vote::Entity as DeadlineVote;
pub use super::enrollment::Entity as Enrollment;
pub use super::event::Entity as Event;
pub use super::event_registration::Entity as EventRegistration;
pub use super::event_tag::Entity as EventTag;
pub use super::mark::Entity as Mark;
pub use super::resource::Entity as Resource;
pub use super::resource_directory::Entity as ResourceDirectory;
pub use super::resource_vote::Entity as ResourceVote;
pub use super::review::Entity as Review;
pub use super::review_vote::Entity as ReviewVote;
pub use super::study_invite::Entity as StudyInvite;
pub use super::user::Entity as User;
pub use super::user_deadline::Entity as UserDeadline;
pub use super::user_interest::Entity as UserInterest;
