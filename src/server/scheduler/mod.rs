//! Background jobs run by `tokio-cron-scheduler`.

pub mod study_invites;
