//! Restaurant Payroll Engine
//!
//! This crate computes per-period gross pay for front-of-house and
//! back-of-house restaurant staff, estimates federal withholding (FICA, FUTA
//! and federal income tax by the IRS Publication 15-T Percentage Method),
//! and rolls both up across a roster.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
