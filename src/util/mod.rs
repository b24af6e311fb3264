pub mod calendar;
pub mod unicode;
