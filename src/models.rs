pub mod account;
pub mod auth;
pub mod communication;
pub mod contact;
pub mod opportunity;
pub mod reports;
pub mod task;
