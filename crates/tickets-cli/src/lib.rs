//! # Tickets CLI
//!
//! Database seeding utilities for Tickets testing and development.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use tickets_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_events_per_partner(4);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
