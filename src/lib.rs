//! Attendance Engine
//!
//! This crate turns a raw time-clock punch log into a monthly attendance
//! report: a presence grid per employee and day, present-day totals, and
//! per-employee daily records with punches, worked hours and status.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
