use chrono::{DateTime, Local};
#[cfg(test)]
use mockall::automock;

/// Source of the current instant. Substituted with `MockSystemClock` in tests.
#[derive(Default)]
pub struct SystemClock;

#[cfg_attr(test, automock)]
impl SystemClock {
    pub fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
