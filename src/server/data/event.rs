//! Club events and their tags.
//!
//! Events are always returned with the organizing club's name and the tag list, so every
//! read goes through `hydrate`, which loads both for a batch of rows in two queries.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    model::event::{CreateEventParam, Event, UpdateEventParam},
    util::page::clamp_page,
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with its tags.
    ///
    /// # Arguments
    /// - `club_id` - Organizing club
    /// - `created_by` - Club admin creating the event
    /// - `param` - Validated event fields
    ///
    /// # Returns
    /// - `Ok(Event)` - The stored event with club name and tags
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        club_id: i32,
        created_by: i32,
        param: CreateEventParam,
        now: DateTime<Utc>,
    ) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            club_id: ActiveValue::Set(club_id),
            created_by: ActiveValue::Set(created_by),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            location: ActiveValue::Set(param.location),
            image_url: ActiveValue::Set(param.image_url),
            image_path: ActiveValue::Set(param.image_path),
            image_bucket: ActiveValue::Set(param.image_bucket),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.replace_tags(entity.id, &param.tags).await?;

        self.hydrate_one(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        match entity::prelude::Event::find_by_id(id).one(self.db).await? {
            Some(entity) => Ok(Some(self.hydrate_one(entity).await?)),
            None => Ok(None),
        }
    }

    /// Applies the fields present in `param`. Tags are replaced when given.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The event as it now reads
    /// - `Ok(None)` - No event with that id
    pub async fn update(
        &self,
        id: i32,
        param: UpdateEventParam,
        now: DateTime<Utc>,
    ) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = entity.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(date) = param.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(time) = param.time {
            active.time = ActiveValue::Set(time);
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(image_url) = param.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(image_path) = param.image_path {
            active.image_path = ActiveValue::Set(Some(image_path));
        }
        if let Some(image_bucket) = param.image_bucket {
            active.image_bucket = ActiveValue::Set(Some(image_bucket));
        }
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;
        if let Some(tags) = param.tags {
            self.replace_tags(id, &tags).await?;
        }

        Ok(Some(self.hydrate_one(entity).await?))
    }

    /// Deletes an event with its registrations and tags.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::EventRegistration::delete_many()
            .filter(entity::event_registration::Column::EventId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::EventId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// One page of events dated `today` or later, by date then time.
    ///
    /// # Arguments
    /// - `today` - First date still considered upcoming
    /// - `page` - 1-based page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((events, total))` - The page and the number of upcoming events overall
    pub async fn get_upcoming_paginated(
        &self,
        today: NaiveDate,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Event>, u64), DbErr> {
        let paginator = Self::upcoming_query(today).paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(clamp_page(page) - 1).await?;

        Ok((self.hydrate(rows).await?, total))
    }

    /// Every upcoming event, by date then time.
    pub async fn get_upcoming(&self, today: NaiveDate) -> Result<Vec<Event>, DbErr> {
        let rows = Self::upcoming_query(today).all(self.db).await?;

        self.hydrate(rows).await
    }

    /// Events organized by a club, by date then time.
    pub async fn get_for_club(&self, club_id: i32) -> Result<Vec<Event>, DbErr> {
        let rows = entity::prelude::Event::find()
            .filter(entity::event::Column::ClubId.eq(club_id))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Time)
            .all(self.db)
            .await?;

        self.hydrate(rows).await
    }

    /// Events with the given ids, keyed by id.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Event>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(self
            .hydrate(rows)
            .await?
            .into_iter()
            .map(|event| (event.id, event))
            .collect())
    }

    fn upcoming_query(today: NaiveDate) -> Select<entity::prelude::Event> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Date.gte(today))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Time)
            .order_by_asc(entity::event::Column::Id)
    }

    async fn replace_tags(&self, event_id: i32, tags: &[String]) -> Result<(), DbErr> {
        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        if tags.is_empty() {
            return Ok(());
        }

        let rows = tags.iter().map(|tag| entity::event_tag::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            tag: ActiveValue::Set(tag.clone()),
        });
        entity::prelude::EventTag::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn hydrate_one(&self, entity: entity::event::Model) -> Result<Event, DbErr> {
        let id = entity.id;
        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("event {}", id)))
    }

    /// Loads club names and tags for the given rows, keeping their order.
    async fn hydrate(&self, rows: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let club_ids: Vec<i32> = rows.iter().map(|row| row.club_id).collect();

        let club_names: HashMap<i32, String> = entity::prelude::Club::find()
            .filter(entity::club::Column::Id.is_in(club_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|club| (club.id, club.name))
            .collect();

        let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
        for tag in entity::prelude::EventTag::find()
            .filter(entity::event_tag::Column::EventId.is_in(event_ids))
            .order_by_asc(entity::event_tag::Column::Tag)
            .all(self.db)
            .await?
        {
            tags.entry(tag.event_id).or_default().push(tag.tag);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let club_name = club_names.get(&row.club_id).cloned().unwrap_or_default();
                let event_tags = tags.remove(&row.id).unwrap_or_default();
                Event::from_entity(row, club_name, event_tags)
            })
            .collect())
    }
}
