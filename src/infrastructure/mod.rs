//! Infrastructure layer - persistence, logging, services

pub mod logging;
pub mod product;
pub mod services;
pub mod storage;
