//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{
    parse_date, ActivityCommands, Cli, Commands, GuestCommands, LinkCommands, TripCommands,
};
