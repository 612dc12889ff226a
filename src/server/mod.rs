//! Server application core modules.
//!
//! This module contains all server-side functionality for the Crease contest
//! engine: HTTP routing and controllers, database repositories, domain
//! services (team validation, contest membership, scoring, ranking), the
//! match feed client, and the cron-driven status synchronizer.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod feed;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
