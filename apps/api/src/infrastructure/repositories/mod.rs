// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_roster_repository;
pub mod postgres_roster_repository;

pub use in_memory_roster_repository::InMemoryRosterRepository;
pub use postgres_roster_repository::PostgresRosterRepository;
