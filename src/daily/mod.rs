mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{next_midnight, until_next_midnight, DailyScheduler};
