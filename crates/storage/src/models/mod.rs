mod athlete;
mod category;
mod training_center;

pub use athlete::Athlete;
pub use category::Category;
pub use training_center::TrainingCenter;

use chrono::{NaiveDateTime, SubsecRound, Utc};

/// Current UTC time at the precision PostgreSQL keeps for `TIMESTAMP` columns.
pub fn timestamp() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}
