//! Infrastructure: the collaborators around the domain core.

pub mod random;
pub mod seed;
pub mod storage;
