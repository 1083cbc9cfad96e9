pub mod cli;
pub mod converter;
pub mod error;
pub mod io;
pub mod report;
