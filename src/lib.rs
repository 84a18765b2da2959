//! # TAO Rust Backend
//!
//! Team availability and occupancy engine.
//!
//! This crate computes, for a roster of agents, how "full" each agent's
//! calendar is over an arbitrary date range. The upstream booking system
//! reports *available* time windows per agent; combined with the agent's
//! configured working schedule (working days, daily start/end hour, slot
//! granularity) this yields a 0-100 occupancy percentage and a list of
//! free-time windows. The backend exposes a REST API via Axum for the
//! dashboard frontend.
//!
//! ## Features
//!
//! - **Normalization**: Tolerant ingestion of raw availability payloads
//!   (flat slot lists or date-keyed maps, missing end timestamps)
//! - **Occupancy Engine**: Interval merging, working-window clipping, and
//!   percentage computation with well-defined sentinel outputs
//! - **Capacity**: Working-day counting for multi-day date ranges
//! - **Team Fan-out**: One independent computation per agent, assembled
//!   into a per-team report
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Value objects and Data Transfer Objects (DTOs)
//! - [`models`]: Timestamp parsing and the interval normalizer
//! - [`algorithms`]: The occupancy computation itself (pure, synchronous)
//! - [`services`]: Capacity computation and per-team orchestration
//! - [`source`]: The availability-source boundary (trait + implementations)
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod algorithms;
pub mod models;

pub mod services;

pub mod source;

#[cfg(feature = "http-server")]
pub mod http;
