// Service module exports

pub mod intake;
pub mod layout;
pub mod stats;
