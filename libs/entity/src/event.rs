use serde::{Deserialize, Serialize};

/// A competition item tracked on the medal tally.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub medal_count: i32,
    pub status: String,
}

/// The mutable part of an [`Event`]. Create and update always carry all
/// three fields together.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct EventFields {
    pub name: String,
    pub medal_count: i32,
    pub status: String,
}

impl Event {
    pub fn with_fields(id: i32, fields: EventFields) -> Self {
        Self {
            id,
            name: fields.name,
            medal_count: fields.medal_count,
            status: fields.status,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_with_fields() {
        // Arrange
        let fields = EventFields {
            name: "100m Dash".to_string(),
            medal_count: 3,
            status: "pending".to_string(),
        };

        // Act
        let event = Event::with_fields(1, fields);

        // Assert
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({
                "id": 1,
                "name": "100m Dash",
                "medal_count": 3,
                "status": "pending"
            })
        );
    }
}
