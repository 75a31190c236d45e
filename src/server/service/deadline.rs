//! Deadline service.
//!
//! A deadline lives in two places: the canonical `deadline` row and one `user_deadline`
//! copy per enrolled user. Create, edit and delete write both inside a single database
//! transaction so a failure can never leave copies out of step with the canonical row.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, deadline::DeadlineRepository, enrollment::EnrollmentRepository,
        user::UserRepository, user_deadline::UserDeadlineRepository,
    },
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        course::ClassKind,
        deadline::{
            CreateDeadlineParam, Deadline, DeadlineCopySource, DeadlineView, FinishedDeadlines,
            UpdateDeadlineParam, UserDeadline,
        },
        user::User,
        vote::{VoteChoice, VoteTally},
    },
    service::activity::ActivityService,
    util::text::deadline_id,
};

const NOT_FOUND_OR_UNAUTHORIZED: &str = "Deadline not found or not authorized";
const EDIT_WINDOW_CLOSED: &str = "Deadlines can only be changed within 24 hours of creation";

pub struct DeadlineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeadlineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a deadline and copies it to every user enrolled in the section.
    ///
    /// The creator always receives a copy, enrolled or not.
    ///
    /// # Returns
    /// - `Ok(DeadlineView)` - The new deadline with empty votes
    /// - `Err(AppError::NotFound)` - Course or section does not exist
    /// - `Err(AppError::BadRequest)` - A lab deadline on a section without a lab
    pub async fn create(
        &self,
        creator: &User,
        param: CreateDeadlineParam,
    ) -> Result<DeadlineView, AppError> {
        let Some(course) = CourseRepository::new(self.db)
            .find_by_id(param.course_id)
            .await?
        else {
            return Err(AppError::NotFound("Course not found".to_string()));
        };
        let Some(section) = course.section(&param.section) else {
            return Err(AppError::NotFound("Section not found".to_string()));
        };
        if param.kind == ClassKind::Lab && !section.has_lab() {
            return Err(AppError::BadRequest(
                "This section does not have a lab".to_string(),
            ));
        }

        let now = Utc::now();
        let id = deadline_id(now.timestamp_millis(), &creator.external_id);
        let source = DeadlineCopySource {
            course_code: course.course_code.clone(),
            course_name: course.course_name.clone(),
            created_by_name: creator.name.clone(),
        };

        let txn = self.db.begin().await?;
        let deadline = DeadlineRepository::new(&txn)
            .create(id, &param, creator.id, now)
            .await?;
        let mut recipients = EnrollmentRepository::new(&txn)
            .user_ids_in_section(deadline.course_id, &deadline.section)
            .await?;
        recipients.push(creator.id);
        recipients.sort_unstable();
        recipients.dedup();
        UserDeadlineRepository::new(&txn)
            .insert_copies(&deadline, &source, &recipients)
            .await?;
        txn.commit().await?;

        tracing::debug!(
            "Deadline {} copied to {} users",
            deadline.id,
            recipients.len()
        );

        ActivityService::new(self.db)
            .log(
                creator.id,
                NewActivity::new(
                    ActivityAction::DeadlineCreated,
                    format!("Created deadline: {}", deadline.title),
                )
                .resource(ActivityResourceType::Deadline, &deadline.id)
                .metadata(serde_json::json!({
                    "courseCode": course.course_code,
                    "section": deadline.section,
                    "type": deadline.kind.as_str(),
                })),
            )
            .await;

        Ok(DeadlineView {
            deadline,
            creator_name: creator.name.clone(),
            creator_student_id: creator.student_id.clone(),
            votes: VoteTally::default(),
        })
    }

    /// Loads a deadline the caller created and may still change.
    async fn find_editable(&self, user_id: i32, id: &str) -> Result<Deadline, AppError> {
        let deadline = DeadlineRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|deadline| deadline.created_by == user_id)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_OR_UNAUTHORIZED.to_string()))?;

        if !deadline.is_editable_at(Utc::now()) {
            return Err(AppError::Forbidden(EDIT_WINDOW_CLOSED.to_string()));
        }

        Ok(deadline)
    }

    /// Edits a deadline and every user copy.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Missing, or the caller is not the creator
    /// - `Err(AppError::Forbidden)` - More than 24 hours since creation
    pub async fn update(
        &self,
        user: &User,
        id: &str,
        param: UpdateDeadlineParam,
    ) -> Result<DeadlineView, AppError> {
        self.find_editable(user.id, id).await?;

        let txn = self.db.begin().await?;
        DeadlineRepository::new(&txn)
            .update(id, &param, Utc::now())
            .await?;
        let copies = UserDeadlineRepository::new(&txn)
            .update_copies(id, &param)
            .await?;
        txn.commit().await?;

        tracing::debug!("Deadline {} updated across {} copies", id, copies);

        let deadline = DeadlineRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_OR_UNAUTHORIZED.to_string()))?;

        ActivityService::new(self.db)
            .log(
                user.id,
                NewActivity::new(
                    ActivityAction::DeadlineUpdated,
                    format!("Updated deadline: {}", deadline.title),
                )
                .resource(ActivityResourceType::Deadline, id),
            )
            .await;

        Ok(self
            .enrich(vec![deadline], Some(user.id))
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("deadline {} vanished", id)))?)
    }

    /// Deletes a deadline, its votes and every user copy.
    pub async fn delete(&self, user: &User, id: &str) -> Result<(), AppError> {
        let deadline = self.find_editable(user.id, id).await?;

        let txn = self.db.begin().await?;
        UserDeadlineRepository::new(&txn).delete_copies(id).await?;
        DeadlineRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        ActivityService::new(self.db)
            .log(
                user.id,
                NewActivity::new(
                    ActivityAction::DeadlineDeleted,
                    format!("Deleted deadline: {}", deadline.title),
                )
                .resource(ActivityResourceType::Deadline, id),
            )
            .await;

        Ok(())
    }

    /// Marks the caller's copy as completed or not.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The caller holds no copy of the deadline
    pub async fn set_completion(
        &self,
        user_id: i32,
        id: &str,
        completed: bool,
    ) -> Result<UserDeadline, AppError> {
        let repo = UserDeadlineRepository::new(self.db);
        if !repo.set_completed(user_id, id, completed, Utc::now()).await? {
            return Err(AppError::NotFound("Deadline not found".to_string()));
        }

        let copy = repo
            .find(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Deadline not found".to_string()))?;

        if completed {
            ActivityService::new(self.db)
                .log(
                    user_id,
                    NewActivity::new(
                        ActivityAction::DeadlineCompleted,
                        format!("Completed deadline: {}", copy.title),
                    )
                    .resource(ActivityResourceType::Deadline, id),
                )
                .await;
        }

        Ok(copy)
    }

    /// Records an agree/disagree vote. Repeating the current vote clears it.
    pub async fn vote(
        &self,
        user_id: i32,
        id: &str,
        choice: VoteChoice,
    ) -> Result<DeadlineView, AppError> {
        let repo = DeadlineRepository::new(self.db);
        let Some(deadline) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Deadline not found".to_string()));
        };

        let agree = choice.is_agree();
        if repo.find_vote(id, user_id).await? == Some(agree) {
            repo.clear_vote(id, user_id).await?;
        } else {
            repo.set_vote(id, user_id, agree).await?;
        }

        ActivityService::new(self.db)
            .log(
                user_id,
                NewActivity::new(
                    ActivityAction::DeadlineVoted,
                    format!("Voted on deadline: {}", deadline.title),
                )
                .resource(ActivityResourceType::Deadline, id)
                .metadata(serde_json::json!({ "voteType": choice.as_str() })),
            )
            .await;

        self.enrich(vec![deadline], Some(user_id))
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("deadline {} vanished", id)))
    }

    /// Upcoming deadlines of a section, soonest first.
    pub async fn get_upcoming(
        &self,
        viewer_id: i32,
        course_id: i32,
        section: &str,
        kind: Option<ClassKind>,
    ) -> Result<Vec<DeadlineView>, AppError> {
        let deadlines = DeadlineRepository::new(self.db)
            .get_upcoming(course_id, section, kind, Utc::now())
            .await?;

        self.enrich(deadlines, Some(viewer_id)).await
    }

    /// The caller's upcoming copies, incomplete first.
    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<UserDeadline>, AppError> {
        Ok(UserDeadlineRepository::new(self.db)
            .get_upcoming(user_id, Utc::now())
            .await?)
    }

    /// Past or completed deadlines of the caller's enrolled section.
    ///
    /// Returns empty lists when the caller is not enrolled in the course.
    pub async fn get_finished(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<FinishedDeadlines, AppError> {
        let Some(section) = EnrollmentRepository::new(self.db)
            .find_section(user_id, course_id)
            .await?
        else {
            return Ok(FinishedDeadlines::default());
        };

        let now = Utc::now();
        let completed = UserDeadlineRepository::new(self.db)
            .completed_ids(user_id, course_id)
            .await?;
        let deadlines: Vec<Deadline> = DeadlineRepository::new(self.db)
            .get_for_section(course_id, &section)
            .await?
            .into_iter()
            .filter(|deadline| deadline.last_date < now || completed.contains(&deadline.id))
            .collect();

        let (theory, lab) = self
            .enrich(deadlines, Some(user_id))
            .await?
            .into_iter()
            .partition(|view| view.deadline.kind == ClassKind::Theory);

        Ok(FinishedDeadlines { theory, lab })
    }

    /// Adds creator details and vote tallies, keeping the input order.
    async fn enrich(
        &self,
        deadlines: Vec<Deadline>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<DeadlineView>, AppError> {
        let mut creator_ids: Vec<i32> = deadlines.iter().map(|d| d.created_by).collect();
        creator_ids.sort_unstable();
        creator_ids.dedup();
        let creators: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(&creator_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let ids: Vec<String> = deadlines.iter().map(|d| d.id.clone()).collect();
        let mut votes = DeadlineRepository::new(self.db).get_votes(&ids).await?;

        Ok(deadlines
            .into_iter()
            .map(|deadline| {
                let creator = creators.get(&deadline.created_by);
                let tally = VoteTally::from_votes(
                    votes.remove(&deadline.id).unwrap_or_default(),
                    viewer_id,
                );

                DeadlineView {
                    creator_name: creator.map(|u| u.name.clone()).unwrap_or_default(),
                    creator_student_id: creator.map(|u| u.student_id.clone()).unwrap_or_default(),
                    votes: tally,
                    deadline,
                }
            })
            .collect())
    }
}
