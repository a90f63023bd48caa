pub mod error;
pub mod health;
pub mod receipt;
pub mod tags;
