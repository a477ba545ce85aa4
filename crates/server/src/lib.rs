pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error_convert;
pub mod filter;
pub mod health;
pub mod notes;
pub mod openapi;
pub mod rest;
pub mod state;
pub mod telemetry;
pub mod views;
