#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod config;
pub mod data;
pub mod error;
pub mod import;
pub mod state;

pub use data::{
    Table,
    student::{Student, StudentsTable},
};
pub use error::{RosterError, RosterResult};
