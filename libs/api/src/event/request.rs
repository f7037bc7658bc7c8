use entity::prelude::EventFields;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EventParam {
    #[schema(example = "100m Dash")]
    pub name: String,
    #[schema(example = 3)]
    pub medal_count: i32,
    #[schema(example = "pending")]
    pub status: String,
}

impl From<EventParam> for EventFields {
    fn from(value: EventParam) -> Self {
        Self {
            name: value.name,
            medal_count: value.medal_count,
            status: value.status,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct PatchEventStatusParam {
    #[schema(example = "completed")]
    pub status: String,
}
