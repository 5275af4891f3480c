//! Booking service seam.
//!
//! Views talk to a `BookingService` handed to them through context. The site
//! ships `SimulatedService`, which waits a fixed latency and reports success;
//! a networked implementation can replace it without touching call sites.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::Serialize;
use thiserror::Error;

use super::search::SearchRequest;
use super::timing;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub farms_found: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

pub trait BookingService {
    fn search(&self, request: SearchRequest)
        -> LocalBoxFuture<'static, Result<SearchOutcome, ServiceError>>;

    fn log_in(&self, credentials: Credentials) -> LocalBoxFuture<'static, Result<(), ServiceError>>;

    fn register(&self, account: NewAccount) -> LocalBoxFuture<'static, Result<(), ServiceError>>;
}

/// Shared handle provided as context at the app root.
#[derive(Clone)]
pub struct Services(pub Rc<dyn BookingService>);

impl Services {
    pub fn new(service: impl BookingService + 'static) -> Self {
        Self(Rc::new(service))
    }

    pub fn booking(&self) -> &dyn BookingService {
        self.0.as_ref()
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(SimulatedService::default())
    }
}

/// Fixed-latency stand-in for the booking backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedService {
    pub search_latency_ms: u64,
    pub auth_latency_ms: u64,
    pub farms_found: u32,
}

impl Default for SimulatedService {
    fn default() -> Self {
        Self {
            search_latency_ms: 2_000,
            auth_latency_ms: 3_000,
            farms_found: 15,
        }
    }
}

impl SimulatedService {
    /// No waiting; for tests.
    pub fn instant() -> Self {
        Self {
            search_latency_ms: 0,
            auth_latency_ms: 0,
            ..Self::default()
        }
    }
}

async fn simulate_latency(ms: u64) {
    if ms > 0 {
        timing::sleep_ms(ms).await;
    }
}

impl BookingService for SimulatedService {
    fn search(
        &self,
        request: SearchRequest,
    ) -> LocalBoxFuture<'static, Result<SearchOutcome, ServiceError>> {
        let latency = self.search_latency_ms;
        let farms_found = self.farms_found;
        async move {
            tracing::debug!(location = %request.location, "simulated search started");
            simulate_latency(latency).await;
            Ok(SearchOutcome { farms_found })
        }
        .boxed_local()
    }

    fn log_in(&self, credentials: Credentials) -> LocalBoxFuture<'static, Result<(), ServiceError>> {
        let latency = self.auth_latency_ms;
        async move {
            tracing::debug!(email = %credentials.email, "simulated login started");
            simulate_latency(latency).await;
            Ok(())
        }
        .boxed_local()
    }

    fn register(&self, account: NewAccount) -> LocalBoxFuture<'static, Result<(), ServiceError>> {
        let latency = self.auth_latency_ms;
        async move {
            tracing::debug!(email = %account.email, "simulated registration started");
            simulate_latency(latency).await;
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::guests::GuestCounts;
    use futures::executor::block_on;
    use time::macros::date;

    #[test]
    fn instant_service_reports_fixed_result() {
        let services = Services::new(SimulatedService::instant());
        let request = SearchRequest {
            location: "Anapoima".into(),
            checkin: date!(2024 - 03 - 10),
            checkout: date!(2024 - 03 - 12),
            guests: GuestCounts::default(),
            with_pets: true,
        };
        let outcome = block_on(services.booking().search(request)).unwrap();
        assert_eq!(outcome.farms_found, 15);
    }

    #[test]
    fn instant_auth_succeeds() {
        let service = SimulatedService::instant();
        let credentials = Credentials {
            email: "ana@example.com".into(),
            password: "secret".into(),
        };
        assert_eq!(block_on(service.log_in(credentials)), Ok(()));
    }
}
