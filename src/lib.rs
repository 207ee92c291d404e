//! Attrition Decision Engine
//!
//! This crate collects an eleven-field employee record, rejects internally
//! inconsistent input, scores consistent records with a pre-trained
//! classifier, and annotates each decision with rule-based risk indicators.

#![warn(missing_docs)]

pub mod api;
pub mod classifier;
pub mod config;
pub mod decision;
pub mod error;
pub mod models;
pub mod validation;
