use std::sync::{Mutex, PoisonError};

use barky_domain::{events::DomainEvent, models::Service};

/// Collects the events of services registered within a unit of work.
///
/// `track` moves the pending events out of the aggregate, so an event is
/// handed out by `drain_events` exactly once, whichever store the aggregate
/// is reloaded from afterwards.
#[derive(Debug, Default)]
pub struct SeenServices {
    events: Mutex<Vec<DomainEvent>>,
}

impl SeenServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, service: &mut Service) {
        let mut new_events = service.take_events();
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .append(&mut new_events);
    }

    /// Returns pending events in the order they were recorded and clears them.
    pub fn drain_events(&self) -> Vec<DomainEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barky_domain::test_utils::{BookmarkFactoryOptions, bookmark_factory};

    fn service_with(sku: &str, ids: &[i64]) -> Service {
        let mut service = Service::new(sku).unwrap();
        for id in ids {
            service.add_bookmark(bookmark_factory(BookmarkFactoryOptions {
                id: Some(*id),
                name: Some(sku),
                ..Default::default()
            }));
        }
        service
    }

    #[test]
    fn test_drain_events_in_recording_order() {
        let seen = SeenServices::new();
        seen.track(&mut service_with("b", &[1]));
        seen.track(&mut service_with("a", &[2]));

        let skus: Vec<String> = seen
            .drain_events()
            .iter()
            .map(|e| e.sku().to_string())
            .collect();
        assert_eq!(skus, vec!["b".to_string(), "a".to_string()]);
        assert!(seen.drain_events().is_empty());
    }

    #[test]
    fn test_track_takes_events_from_the_aggregate() {
        let seen = SeenServices::new();
        let mut service = service_with("a", &[1]);
        seen.track(&mut service);
        assert!(service.pending_events().is_empty());

        // Tracking again without new changes adds nothing.
        seen.track(&mut service);
        assert_eq!(seen.drain_events().len(), 1);

        service.add_bookmark(bookmark_factory(BookmarkFactoryOptions {
            id: Some(2),
            name: Some("a"),
            ..Default::default()
        }));
        seen.track(&mut service);

        let events = seen.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            DomainEvent::BookmarkAdded { bookmark_id: 2, .. }
        ));
    }
}
