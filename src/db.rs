pub mod account_repo;
pub use account_repo::AccountRepository;
pub mod communication_repo;
pub use communication_repo::CommunicationRepository;
pub mod contact_repo;
pub use contact_repo::ContactRepository;
pub mod opportunity_repo;
pub use opportunity_repo::OpportunityRepository;
pub mod reports_repo;
pub use reports_repo::ReportsRepository;
pub mod task_repo;
pub use task_repo::TaskRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
