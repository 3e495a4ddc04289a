use chrono::{DateTime, Utc};

/// A trait for time sources that return the current wall-clock time.
///
/// This abstraction allows you to plug in the real system clock or a fixed
/// time source in tests.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, TimeZone, Utc};
/// use idfmt::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now(&self) -> DateTime<Utc> {
///         Utc.with_ymd_and_hms(2025, 11, 5, 0, 0, 0).unwrap()
///     }
/// }
///
/// assert_eq!(FixedTime.now().format("%Y%m%d").to_string(), "20251105");
/// ```
pub trait TimeSource {
    /// Returns the current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
///
/// Not monotonic: `{DATE}` tokens follow wall-clock adjustments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
