use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    event::EventRepositoryImpl, health::HealthCheckRepositoryImpl, in_memory::InMemoryStore,
    registration::RegistrationRepositoryImpl,
};
use kernel::repository::{
    event::EventRepository, health::HealthCheckRepository,
    registration::RegistrationRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    event_repository: Arc<dyn EventRepository>,
    registration_repository: Arc<dyn RegistrationRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(pool.clone()));
        let registration_repository = Arc::new(RegistrationRepositoryImpl::new(pool));
        Self {
            health_check_repository,
            event_repository,
            registration_repository,
        }
    }

    /// Wires every repository to the same in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            health_check_repository: store.clone(),
            event_repository: store.clone(),
            registration_repository: store,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn registration_repository(&self) -> Arc<dyn RegistrationRepository> {
        self.registration_repository.clone()
    }
}
