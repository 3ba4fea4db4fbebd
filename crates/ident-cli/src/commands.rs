use crate::error::Result as CliErrorResult;

use ident_config::UserConfig;
use ident_core::{Clock, FixedClock, LocalZone, PersonIdent, format_timezone, sanitize};

use clap::{Args, Subcommand};
use log::debug;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configured committer as a canonical identity line
    Committer {
        #[command(flatten)]
        time: TimeArgs,

        /// Print the identity as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Print an identity built from explicit values as a canonical line
    Format {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Milliseconds since the Unix epoch
        #[arg(long, allow_negative_numbers = true)]
        when: i64,

        /// Offset in minutes east of UTC
        #[arg(long, allow_negative_numbers = true)]
        tz: i32,

        /// Print the identity as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Print the configured committer in human-readable form
    Show {
        #[command(flatten)]
        time: TimeArgs,
    },

    /// Strip padding, newlines and angle brackets from text
    Sanitize {
        /// Text to clean
        text: String,
    },

    /// Format an offset in minutes as +HHMM / -HHMM
    Timezone {
        /// Offset in minutes east of UTC
        #[arg(allow_negative_numbers = true)]
        minutes: i32,
    },
}

#[derive(Args)]
pub struct TimeArgs {
    /// Milliseconds since the Unix epoch (default: now)
    #[arg(long, allow_negative_numbers = true)]
    pub when: Option<i64>,

    /// Offset in minutes east of UTC (default: local zone at that instant)
    #[arg(long, allow_negative_numbers = true)]
    pub tz: Option<i32>,
}

/// Run `command` and return what should be printed to stdout.
pub fn execute(
    command: &Commands,
    user: &UserConfig,
    clock: &impl Clock,
    zone: &impl LocalZone,
) -> CliErrorResult<String> {
    match command {
        Commands::Committer { time, json } => {
            let ident = committer_ident(user, time, clock, zone)?;
            render(&ident, *json)
        }
        Commands::Format {
            name,
            email,
            when,
            tz,
            json,
        } => render(&PersonIdent::new(name.as_str(), email.as_str(), *when, *tz), *json),
        Commands::Show { time } => Ok(committer_ident(user, time, clock, zone)?.to_string()),
        Commands::Sanitize { text } => Ok(sanitize(text)),
        Commands::Timezone { minutes } => Ok(format_timezone(*minutes)),
    }
}

/// The configured committer, stamped at `--when` (or now) in `--tz` (or the
/// local zone's offset at that instant).
fn committer_ident(
    user: &UserConfig,
    time: &TimeArgs,
    clock: &impl Clock,
    zone: &impl LocalZone,
) -> CliErrorResult<PersonIdent> {
    let when_millis = time.when.unwrap_or_else(|| clock.now_millis());
    let ident = PersonIdent::from_committer(user, &FixedClock(when_millis), zone)?;
    debug!("Resolved committer {ident:?}");

    Ok(match time.tz {
        Some(tz) => ident.with_offset_and_time(when_millis, tz),
        None => ident,
    })
}

fn render(ident: &PersonIdent, json: bool) -> CliErrorResult<String> {
    if json {
        Ok(serde_json::to_string(ident)?)
    } else {
        Ok(ident.to_external_string())
    }
}
