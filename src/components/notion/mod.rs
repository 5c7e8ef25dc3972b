mod client;
pub mod models;
mod time;

pub use client::NotionClient;
pub use models::{CalendarEvent, EventMoment};
pub use time::next_week_range;
