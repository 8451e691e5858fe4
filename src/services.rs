pub mod account_service;
pub mod auth;
pub mod communication_service;
pub mod contact_service;
pub mod opportunity_service;
pub mod policy;
pub mod reports_service;
pub mod task_service;
