//! Library entry point for the veritensor CI action.

pub mod annotation;
pub mod builder;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod utils;
