use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, QueryFilter, Schema,
};
use tracing::warn;

use crate::active_models::{prelude::*, *};
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

use self::event::Column;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            medal_count: value.medal_count,
            status: value.status,
        }
    }
}

impl From<EventFields> for event::ActiveModel {
    fn from(value: EventFields) -> Self {
        Self {
            id: ActiveValue::not_set(),
            name: ActiveValue::set(value.name),
            medal_count: ActiveValue::set(value.medal_count),
            status: ActiveValue::set(value.status),
        }
    }
}

impl EventRepository {
    /// Creates the `events` table when it does not exist yet.
    pub async fn create_table(&self) -> Response<()> {
        let backend = self.db.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(Event);
        statement.if_not_exists();

        self.db
            .execute(backend.build(&statement))
            .await
            .into_response("in create events table")?;

        Ok(())
    }

    pub async fn find_all(&self) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .all(&self.db)
            .await
            .into_response("in find all events")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Response<Option<EventEntity>> {
        let event = Event::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find event by id")?;

        Ok(event.map(EventEntity::from))
    }

    pub async fn save(&self, fields: EventFields) -> Response<EventEntity> {
        let result = Event::insert(event::ActiveModel::from(fields.clone()))
            .exec(&self.db)
            .await
            .into_response("in insert event")?;

        Ok(EventEntity::with_fields(result.last_insert_id, fields))
    }

    /// Overwrites all mutable fields of the row. Returns the number of rows
    /// affected, which is zero when `id` does not exist.
    pub async fn update(&self, id: i32, fields: EventFields) -> Response<u64> {
        let result = Event::update_many()
            .set(event::ActiveModel::from(fields))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .into_response("in update event")?;

        if result.rows_affected == 0 {
            warn!(event_id = id, "update matched no event");
        }

        Ok(result.rows_affected)
    }

    pub async fn update_status(&self, id: i32, status: String) -> Response<u64> {
        let result = Event::update_many()
            .col_expr(Column::Status, Expr::value(status))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .into_response("in update event status")?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Response<u64> {
        let result = Event::delete_by_id(id)
            .exec(&self.db)
            .await
            .into_response("in delete event")?;

        if result.rows_affected == 0 {
            warn!(event_id = id, "delete matched no event");
        }

        Ok(result.rows_affected)
    }
}
