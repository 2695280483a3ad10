// Model catalog loader, registry and CLI support modules.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
