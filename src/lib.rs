//! # Skywatch
//!
//! Bright-star visibility engine and polar sky-chart backend.
//!
//! For a fixed ground observer, skywatch determines which catalogued stars
//! are currently above the horizon, where each appears in the sky, and when
//! each is best observed tonight, then maps those positions onto a 2-D polar
//! sky chart. The computational core is pure and deterministic: every query
//! takes an explicit `Moment`, so results are exactly reproducible and the
//! sky map can be scrubbed to arbitrary past or future hours.
//!
//! ## Features
//!
//! - **Time basis**: civil timestamp to Julian Date and local sidereal time
//! - **Coordinate transform**: equatorial (RA/Dec) to horizontal (alt/az)
//!   with quadrant correction
//! - **Visibility**: catalog-wide filtering above a 5 degree floor, ranked
//!   brightest first with compass and brightness labels
//! - **Best window**: hourly 20:00-04:00 scan for each star's highest moment
//!   above a 20 degree bar
//! - **Sky projection**: unit-disk chart coordinates with size and color
//!   buckets, ready for an external drawing surface
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`catalog`]: the compiled-in, read-only bright-star catalog
//! - [`models`]: moments, sidereal time, and the observer
//! - [`services`]: the pure computational core
//! - [`routes`]: route-specific data types
//! - [`http`]: axum-based HTTP server and request handlers

pub mod api;

pub mod catalog;
pub mod config;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use services::{compute_best_window, compute_visibility_report, project_sky_map};
