//! API layer - client implementations over the domain service

pub mod native;
