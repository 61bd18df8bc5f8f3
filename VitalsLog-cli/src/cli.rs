use clap::{Parser, Subcommand};
use vitals_log_domain::VitalKind;

#[derive(Parser, Debug)]
#[command(
    name = "vitals-log",
    version,
    about = "Validate, alert on and classify vital-sign entries"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Indent JSON output")]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Check a health entry against the accepted ranges
    Validate {
        #[arg(help = "JSON entry file, or - for stdin")]
        input: String,
    },
    /// Validate a health entry, then list the alerts it raises
    Alerts {
        #[arg(help = "JSON entry file, or - for stdin")]
        input: String,
    },
    /// Classify one measurement as normal, warning or danger
    Classify {
        #[arg(help = "heart-rate, blood-pressure, spo2 or temperature")]
        kind: VitalKind,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(help = "Diastolic value when classifying blood pressure")]
        second: Option<f64>,
    },
    /// Validation, alerts and status tiers for an entry in one report
    Report {
        #[arg(help = "JSON entry file, or - for stdin")]
        input: String,
    },
    /// Check the shape of login credentials
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Print every threshold the rules use
    Thresholds,
}
