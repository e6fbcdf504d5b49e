#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use barky_core::{ApplicationError, DbError};
    use barky_domain::{events::DomainEvent, models::Service};

    use crate::{
        bootstrap::{BootstrapOptions, bootstrap},
        config::Config,
        context::Publish,
        message_bus::MessageBus,
        notifications::Notifications,
        repository::{SeenServices, ServiceRepository},
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// Committed state shared by every unit of work of one provider.
    #[derive(Default)]
    struct InMemoryState {
        services: HashMap<String, Service>,
        committed: bool,
        rolled_back: bool,
        begin_count: usize,
        commit_count: usize,
        fail_next_commit: bool,
    }

    pub struct InMemoryServiceRepository {
        state: Arc<Mutex<InMemoryState>>,
        staged: Mutex<HashMap<String, Service>>,
        seen: SeenServices,
    }

    impl InMemoryServiceRepository {
        fn new(state: Arc<Mutex<InMemoryState>>) -> Self {
            Self {
                state,
                staged: Mutex::new(HashMap::new()),
                seen: SeenServices::new(),
            }
        }

        fn take_staged(&self) -> HashMap<String, Service> {
            std::mem::take(&mut *self.staged.lock().unwrap())
        }
    }

    #[async_trait]
    impl ServiceRepository for InMemoryServiceRepository {
        async fn add(&self, service: &mut Service) -> Result<(), ApplicationError> {
            self.seen.track(service);
            self.staged
                .lock()
                .unwrap()
                .insert(service.sku().to_string(), service.clone());
            Ok(())
        }

        async fn get(&self, sku: &str) -> Result<Option<Service>, ApplicationError> {
            if let Some(service) = self.staged.lock().unwrap().get(sku) {
                return Ok(Some(service.clone()));
            }
            Ok(self.state.lock().unwrap().services.get(sku).cloned())
        }

        async fn get_by_bookmark_id(
            &self,
            bookmark_id: i64,
        ) -> Result<Option<Service>, ApplicationError> {
            let staged = self.staged.lock().unwrap();
            if let Some(service) = staged.values().find(|s| s.contains_bookmark(bookmark_id)) {
                return Ok(Some(service.clone()));
            }

            let state = self.state.lock().unwrap();
            Ok(state
                .services
                .values()
                .filter(|s| !staged.contains_key(s.sku()))
                .find(|s| s.contains_bookmark(bookmark_id))
                .cloned())
        }

        fn collect_new_events(&self) -> Vec<DomainEvent> {
            self.seen.drain_events()
        }
    }

    pub struct InMemoryUnitOfWork {
        state: Arc<Mutex<InMemoryState>>,
        services: Arc<InMemoryServiceRepository>,
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for InMemoryUnitOfWork {
        fn services(&self) -> Arc<dyn ServiceRepository + 'a> {
            self.services.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            let staged = self.services.take_staged();
            let mut state = self.state.lock().unwrap();

            if state.fail_next_commit {
                state.fail_next_commit = false;
                state.rolled_back = true;
                return Err(DbError::Transaction("commit rejected by store".to_string()).into());
            }

            state.services.extend(staged);
            state.committed = true;
            state.commit_count += 1;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.state.lock().unwrap().rolled_back = true;
            Ok(())
        }
    }

    /// In-memory store. Clones share the same committed state.
    #[derive(Default, Clone)]
    pub struct InMemoryUnitOfWorkProvider {
        state: Arc<Mutex<InMemoryState>>,
    }

    impl InMemoryUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        /// True once any unit of work has committed.
        pub fn committed(&self) -> bool {
            self.state.lock().unwrap().committed
        }

        pub fn rolled_back(&self) -> bool {
            self.state.lock().unwrap().rolled_back
        }

        pub fn begin_count(&self) -> usize {
            self.state.lock().unwrap().begin_count
        }

        pub fn commit_count(&self) -> usize {
            self.state.lock().unwrap().commit_count
        }

        /// Makes the next commit fail with a `DbError::Transaction`.
        pub fn fail_next_commit(&self) {
            self.state.lock().unwrap().fail_next_commit = true;
        }

        /// Committed state of a service.
        pub fn service(&self, sku: &str) -> Option<Service> {
            self.state.lock().unwrap().services.get(sku).cloned()
        }

        /// Seeds committed state, bypassing units of work.
        pub fn insert(&self, service: Service) {
            self.state
                .lock()
                .unwrap()
                .services
                .insert(service.sku().to_string(), service);
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            self.state.lock().unwrap().begin_count += 1;

            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(InMemoryUnitOfWork {
                state: self.state.clone(),
                services: Arc::new(InMemoryServiceRepository::new(self.state.clone())),
            });
            Ok(uow)
        }
    }

    #[derive(Default, Clone)]
    pub struct FakeNotifications {
        sent: Arc<Mutex<HashMap<String, Vec<String>>>>,
        failing: Arc<Mutex<bool>>,
    }

    impl FakeNotifications {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn sent_to(&self, destination: &str) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .get(destination)
                .cloned()
                .unwrap_or_default()
        }

        /// Makes every following `send` fail.
        pub fn fail(&self) {
            *self.failing.lock().unwrap() = true;
        }
    }

    #[async_trait]
    impl Notifications for FakeNotifications {
        async fn send(&self, destination: &str, message: &str) -> Result<(), ApplicationError> {
            if *self.failing.lock().unwrap() {
                return Err(ApplicationError::Infrastructure(format!(
                    "cannot reach {destination}"
                )));
            }

            self.sent
                .lock()
                .unwrap()
                .entry(destination.to_string())
                .or_default()
                .push(message.to_string());
            Ok(())
        }
    }

    /// Publish callback that records every event it receives.
    #[derive(Default, Clone)]
    pub struct RecordingPublisher {
        published: Arc<Mutex<Vec<DomainEvent>>>,
    }

    impl RecordingPublisher {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn publish(&self) -> Publish {
            let published = self.published.clone();
            Arc::new(move |event: &DomainEvent| -> Result<(), ApplicationError> {
                published.lock().unwrap().push(event.clone());
                Ok(())
            })
        }

        pub fn published(&self) -> Vec<DomainEvent> {
            self.published.lock().unwrap().clone()
        }
    }

    /// Fakes wired together by `bootstrap_test_app`.
    pub struct TestApp {
        pub bus: MessageBus,
        pub uow_provider: InMemoryUnitOfWorkProvider,
        pub notifications: FakeNotifications,
        pub publisher: RecordingPublisher,
    }

    /// Builds a bus over in-memory fakes, without store initialization.
    pub async fn bootstrap_test_app() -> Result<TestApp, ApplicationError> {
        let uow_provider = InMemoryUnitOfWorkProvider::new();
        let notifications = FakeNotifications::new();
        let publisher = RecordingPublisher::new();

        let bus = bootstrap(BootstrapOptions {
            start_store: false,
            uow_provider: Arc::new(uow_provider.clone()),
            notifications: Arc::new(notifications.clone()),
            publish: publisher.publish(),
            config: Arc::new(Config::default()),
        })
        .await?;

        Ok(TestApp {
            bus,
            uow_provider,
            notifications,
            publisher,
        })
    }

}
