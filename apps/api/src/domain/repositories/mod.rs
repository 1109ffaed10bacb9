// Repository (storage adapter) contracts
// Implemented in the infrastructure layer

pub mod roster_repository;

pub use roster_repository::RosterRepository;
