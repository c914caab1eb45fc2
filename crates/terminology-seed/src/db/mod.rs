//! Database integration for seeding the crosswalk dataset.
//!
//! The [`Seeder`] inserts the expanded mapping records in a single
//! transaction, so a run either lands completely or not at all.

mod seeder;

pub use seeder::{SeedError, Seeder};
