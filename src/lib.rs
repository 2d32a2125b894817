#![no_std]

pub mod header;
pub mod progression;
pub mod schedule;

pub use header::{BlinkHeader, ListingEntry, ListingSummary};
pub use progression::Progression;
pub use schedule::{BlinkSchedule, BlinkStep, ConvergedSchedule, ScheduleError, ScheduleParameters};

pub use embassy_time::Duration;
