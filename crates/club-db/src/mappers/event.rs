//! Event entity <-> model mapper

use club_core::entities::Event;

use crate::models::EventModel;

/// Convert EventModel to Event entity
impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            name: model.name,
            date: model.date,
            time: model.time,
            description: model.description,
            location: model.location,
            image: model.image,
            registration_link: model.registration_link,
            repeat_interval_days: model.repeat_interval_days,
        }
    }
}
