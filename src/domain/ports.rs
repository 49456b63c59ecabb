use chrono::NaiveDate;

/// Anything that can introduce itself.
///
/// Callers hold a `&dyn Greeter` and never need the concrete type.
pub trait Greeter {
    fn greet(&self) -> String;
}

/// Source of the date used as "now" for age calculation.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, read in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
