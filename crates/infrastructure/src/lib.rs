//! Brandwatch Infrastructure Layer
pub mod checker;
pub mod database;
pub mod feed;
pub mod repositories;
