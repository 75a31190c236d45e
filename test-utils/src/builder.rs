use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Tables are created from the SeaORM entities in the order they are added, so parents
/// should be added before children. The grouped helpers below already follow that order.
/// Composite unique keys declared on an entity are created once every table exists.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_deadline_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds a single entity table to the schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Users, their interests and the clubs they may administer.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Club)
            .with_table(User)
            .with_table(UserInterest)
    }

    /// User tables plus the course catalog and enrollments.
    pub fn with_course_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Course)
            .with_table(CourseSection)
            .with_table(ClassSchedule)
            .with_table(Enrollment)
    }

    /// Course tables plus deadlines, their votes, per-user copies and marks.
    pub fn with_deadline_tables(self) -> Self {
        self.with_course_tables()
            .with_table(Deadline)
            .with_table(DeadlineVote)
            .with_table(UserDeadline)
            .with_table(Mark)
    }

    /// User tables plus connections and study invites.
    pub fn with_connection_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Connection)
            .with_table(StudyInvite)
    }

    /// User tables plus events, tags and registrations.
    pub fn with_event_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Event)
            .with_table(EventTag)
            .with_table(EventRegistration)
    }

    /// Course and connection tables plus directories, resources and their votes.
    pub fn with_resource_tables(self) -> Self {
        self.with_course_tables()
            .with_table(Connection)
            .with_table(ResourceDirectory)
            .with_table(Resource)
            .with_table(ResourceVote)
    }

    /// Every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_deadline_tables()
            .with_table(Connection)
            .with_table(StudyInvite)
            .with_table(Event)
            .with_table(EventTag)
            .with_table(EventRegistration)
            .with_table(Review)
            .with_table(ReviewVote)
            .with_table(ResourceDirectory)
            .with_table(Resource)
            .with_table(ResourceVote)
            .with_table(Activity)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
