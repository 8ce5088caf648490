//! Shared configuration
//!
//! Settings are read from the environment once per invocation.

pub mod config;
