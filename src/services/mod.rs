pub mod deadline_service;
pub mod schedule;
pub mod validation;

pub use deadline_service::DeadlineService;
pub use schedule::compute_derived_fields;
pub use validation::{validate_request, validate_type};
