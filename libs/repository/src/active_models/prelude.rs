pub use super::event::Entity as Event;
