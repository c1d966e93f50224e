//! WhereBus Library
//!
//! Core modules for the WhereBus voice skill: answers "where is bus N"
//! by matching a spoken bus number against hub-tracked device entities.

pub mod alexa;
pub mod config;
pub mod distance;
pub mod error;
pub mod geocode;
pub mod handler;
pub mod hub;
pub mod location;
pub mod normalize;
pub mod resolver;
