use entity::prelude::EventEntity;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EventResp {
    pub id: i32,
    pub name: String,
    pub medal_count: i32,
    pub status: String,
}

impl From<EventEntity> for EventResp {
    fn from(value: EventEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            medal_count: value.medal_count,
            status: value.status,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DeleteEventResp {
    pub message: String,
}
