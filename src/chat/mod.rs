//! Canned career assistant

pub mod assistant;
