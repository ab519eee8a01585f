//! Route handlers

pub mod health;
pub mod listing;
pub mod redirect;
