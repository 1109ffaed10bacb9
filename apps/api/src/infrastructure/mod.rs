// Infrastructure layer module
// Storage adapters (in-memory and PostgreSQL) behind the domain repository trait

pub mod repositories;
