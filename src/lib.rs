//! Deployment artifact generators for the dionysos database container.
//!
//! Docker secrets require swarm or compose, and neither runs on the
//! Raspberry Pi, so the postgres credentials live in an untracked .json
//! file and these tools render the Dockerfile and the container start
//! script from it on demand.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Credential loading and artifact rendering
//! - `models` — Data structures
//! - `util` — Filesystem helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
