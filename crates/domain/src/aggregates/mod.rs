//! Aggregate roots

mod university;

pub use university::University;
