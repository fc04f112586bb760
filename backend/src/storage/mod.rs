//! # Storage Layer
//!
//! SQLite persistence for the lending tracker. `DbConnection` owns the
//! pool and schema setup; the repositories implement the storage
//! traits the domain services are built against.

pub mod connection;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_fixtures;

pub use connection::DbConnection;
pub use repositories::{
    CategoryRepository, CreditRepository, PaymentRepository, PlanRepository, UserRepository,
};
pub use traits::{CategoryStorage, CreditStorage, PaymentStorage, PlanStorage, UserStorage};
