//! Employee resource.
//!
//! | Method | Path             | Handler            |
//! |--------|------------------|--------------------|
//! | GET    | /employee        | `list_employees`   |
//! | POST   | /employee        | `create_employee`  |
//! | PUT    | /employee/{id}   | `update_employee`  |
//! | DELETE | /employee/{id}   | `delete_employee`  |

pub mod handlers;
pub mod model;

use axum::{
    routing::{get, put},
    Router,
};
use crate::http::server::AppState;
use self::handlers::*;

pub use model::{DeleteOutcome, Employee, EmployeeInput};

pub fn employee_router() -> Router<AppState> {
    Router::new()
        .route("/employee", get(list_employees).post(create_employee))
        .route("/employee/{id}", put(update_employee).delete(delete_employee))
}
