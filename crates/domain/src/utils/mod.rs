//! Pure helper functions shared by the domain types

pub mod category;
pub mod loose;
