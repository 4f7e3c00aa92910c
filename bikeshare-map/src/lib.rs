//! Bike-share station map server.
//!
//! Shows every station from a GBFS feed on a map, with an icon telling you
//! at a glance whether there's a bike to take (or a dock to leave one in).

pub mod app;
pub mod config;
pub mod domain;
pub mod feed;
pub mod locate;
pub mod map;
pub mod render;
pub mod snapshot;
pub mod web;
