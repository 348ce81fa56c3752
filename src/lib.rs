//! Countrydetail - country details and neighbouring countries from the REST Countries API
//!
//! This library builds display-ready view models from REST Countries records
//! and resolves border codes into country names with a concurrent fan-out.

pub mod api;
pub mod browse;
pub mod cli;
pub mod config;
pub mod models;
pub mod navigation;
pub mod render;
pub mod services;
