//! Roster API Library
//!
//! Groups ("turmas") of players split into teams: domain rules, the
//! lifecycles that enforce them, storage adapters and the HTTP surface.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod telemetry;
