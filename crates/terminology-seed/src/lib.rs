//! Terminology crosswalk seeding.
//!
//! This crate ships a fixed ICD-10 / ICD-9-CM → SNOMED-CT mapping dataset
//! and a seeder that writes it to the `terminology_maps` table in a single
//! transactional batch.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use terminology_seed::prelude::*;
//!
//! let seeder = Seeder::new(pool);
//! seeder.migrate().await?;
//! let count = seeder.seed_mappings(&dataset::mappings()).await?;
//! ```

pub mod config;
pub mod dataset;
pub mod db;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::dataset;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::models::{
        MapType, SourceSystem, StoredMapping, TargetSystem, TerminologyMapping,
    };
}
