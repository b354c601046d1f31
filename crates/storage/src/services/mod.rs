//! Entity services: the validation and persistence workflow for each entity.
//!
//! Each public operation runs inside exactly one unit of work, finished with
//! [`crate::store::finish`] so any failure leaves the store untouched.

pub mod athlete;
pub mod category;
pub mod training_center;

pub use athlete::AthleteService;
pub use category::CategoryService;
pub use training_center::TrainingCenterService;
