//! Community crime reports feature.
//!
//! Citizens submit incident reports and anyone can browse or search the
//! submitted collection. The collection is append-only: no update or delete
//! endpoint exists, and a report's status is never transitioned here.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | No | Submit a crime report |
//! | GET | `/api/reports` | No | List reports, or search via `?term=` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod validator;

pub use services::ReportService;
pub use store::PgReportStore;
