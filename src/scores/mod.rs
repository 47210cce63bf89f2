pub mod admission;
mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use admission::{plan_admission, AdmissionPlan, RejectReason, FRESHNESS_WINDOW};
pub use errors::{ScoreError, StoreError};
pub use models::Score;
pub use repository::{InMemoryScoreRepository, JsonFileScoreRepository, ScoreRepository};
pub use service::{Admission, ScoreboardService, ScoreboardServiceBuilder};
