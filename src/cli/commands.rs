//! CLI command definitions

use crate::error::{PlannerError, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(about = "Trip planning from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up a planner in a directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create a trip and remember it as the current one
    Create {
        /// Where the trip goes
        #[arg(long)]
        destination: String,

        /// Tap a day on the calendar (YYYY-MM-DD; repeat to complete the range)
        #[arg(long = "day", value_name = "DATE")]
        days: Vec<String>,

        /// Guest email to invite (repeatable)
        #[arg(long = "invite", value_name = "EMAIL")]
        invites: Vec<String>,
    },

    /// Inspect or change the current trip
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },

    /// Manage the current trip's activities
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },

    /// Manage the current trip's shared links
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },

    /// Manage the current trip's guests
    Guest {
        #[command(subcommand)]
        command: GuestCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// Show the current trip and its calendar
    Show,

    /// Change the destination and/or dates
    Update {
        /// New destination
        #[arg(long)]
        destination: Option<String>,

        /// Tap a day on the calendar (YYYY-MM-DD; the first tap starts a
        /// fresh range)
        #[arg(long = "day", value_name = "DATE")]
        days: Vec<String>,
    },

    /// Forget the current trip (the trip itself is kept on the server)
    Forget,
}

#[derive(Subcommand, Debug)]
pub enum ActivityCommands {
    /// Schedule an activity on a trip day
    Add {
        /// What the activity is
        #[arg(long)]
        title: String,

        /// Day of the activity (YYYY-MM-DD, within the trip dates)
        #[arg(long, value_name = "DATE")]
        day: String,

        /// Hour of the day (0-23)
        #[arg(long)]
        hour: u8,
    },

    /// List activities grouped by day
    List,
}

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Attach a link to the current trip
    Add {
        /// Link title
        #[arg(long)]
        title: String,

        /// Link URL (http:// or https://)
        #[arg(long)]
        url: String,
    },

    /// List the trip's links
    List,
}

#[derive(Subcommand, Debug)]
pub enum GuestCommands {
    /// List participants and their confirmation status
    List,

    /// Confirm attendance for an invitation
    Confirm {
        /// Trip being confirmed
        trip_id: String,

        /// Participant id from the invitation
        #[arg(long, value_name = "ID")]
        participant: String,

        /// Full name of the confirming guest
        #[arg(long)]
        name: String,

        /// Confirmation email
        #[arg(long)]
        email: String,
    },
}

/// Parse a calendar date argument (YYYY-MM-DD)
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(input.to_string()))
}
