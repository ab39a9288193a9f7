//! Bike station finder.
//!
//! Fulfillment webhook for a voice assistant that answers "where is the
//! nearest bike-share station with a bike (or a free stand) for me?"

pub mod assistant;
pub mod cache;
pub mod config;
pub mod domain;
pub mod provider;
pub mod ranking;
pub mod web;
