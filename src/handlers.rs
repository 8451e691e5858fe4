pub mod accounts;
pub mod auth;
pub mod communications;
pub mod contacts;
pub mod opportunities;
pub mod reports;
pub mod tasks;
