//! Core data model and configuration for argguard.
//!
//! This crate provides the structures shared by every argguard crate:
//! - [`types`]: Argument descriptors and per-declaration function contexts
//! - [`policy`]: Argument policies and the rules that bundle them
//! - [`config`]: Rule configuration loading from YAML

pub mod config;
pub mod policy;
pub mod types;
