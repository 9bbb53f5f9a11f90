//! Core library components.
//!
//! This module contains the name pipeline, the two job phases, and the
//! host abstraction they run against.

pub mod case;
pub mod cleanup;
pub mod config;
pub mod constants;
pub mod env;
pub mod filter;
pub mod host;
pub mod inject;
pub mod lifecycle;
pub mod secrets;
pub mod transform;
pub mod types;
