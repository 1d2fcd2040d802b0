//! Core business logic for Fleetfin.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the collaborator traits declared here.
//!
//! # Modules
//!
//! - `financial` - Period results and income/expense breakdowns

pub mod financial;
