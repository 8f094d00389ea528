//! Wire and domain types shared by the loader, the editor and the front ends.

pub mod domain;
pub mod protocol;
