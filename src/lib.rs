//! Employee CRUD service library.

pub mod config;
pub mod employee;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{EmployeeStore, MemoryStore, MongoStore};
