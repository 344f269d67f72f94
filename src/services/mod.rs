//! Business logic services

pub mod calculator;
pub mod combinator;
pub mod currency;
pub mod ranker;
