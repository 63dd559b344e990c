//! Repository modules for the course admin entities.
//!
//! Each module adds methods to `CmsService` via `impl CmsService` blocks.

pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod reports;
pub mod review;
pub mod user;
