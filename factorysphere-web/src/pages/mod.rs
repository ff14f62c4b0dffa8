pub mod alarms;
pub mod analytics;
pub mod cameras;
pub mod dashboard;
pub mod devices;
pub mod downtime;
pub mod login;
pub mod not_found;
pub mod reports;
