//! Core of spaboot: bootstrap glue for a web single-page application.
//!
//! Derives the websocket endpoint from the configured API endpoint, assembles
//! the flags record handed to the front-end at start, and deploys a built
//! static bundle into the API project's directory.

pub mod config;
pub mod deploy;
pub mod endpoint;
pub mod flags;
pub mod logging;
