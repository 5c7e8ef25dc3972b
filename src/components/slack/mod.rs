mod client;

pub use client::SlackNotifier;
