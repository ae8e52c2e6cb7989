//! Command shell protocol
//!
//! This module provides line parsing, reply rendering and the command
//! handlers that drive a [`Store`](crate::Store).

pub mod command;
pub mod get;
pub mod getall;
pub mod keyspace;
pub mod list;
pub mod reply;
pub mod set;

pub use command::{Command, CommandFactory};
pub use reply::{Parser, Reply};
