//! # cms-core
//!
//! Core types and error types for the course administration backend.
//!
//! This crate provides the foundational types shared across all crates:
//! - Entity structs for courses, lessons, enrollments, reviews, and users
//! - Enumerations with their storage representations, including the single
//!   category slug/name table
//! - Field validation for user-supplied course values
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;

pub use enums::to_canonical;
