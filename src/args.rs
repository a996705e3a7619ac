//! These structs provide the CLI interface for the big7 CLI.

use crate::model::{Amount, Category};
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// big7: the Big7 Collections financial record keeper.
///
/// Records categorized transactions (sales, savings, worker payments) in a
/// local ledger, shows running totals per category, and exports everything as
/// CSV. All data lives in a single JSON file in the big7 home directory; there
/// is no server and no account.
///
/// Every command is guarded by the admin password, passed with --password or
/// the BIG7_ADMIN_PASSWORD environment variable.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Record a new transaction.
    ///
    /// The category and amount are required; the person and note are optional.
    /// Recording a "Worker Payment" also prints a simulated SMS receipt for
    /// the worker.
    Add(AddArgs),
    /// Show the running total for every record category.
    Dashboard,
    /// List every record, newest first.
    List,
    /// Export every record to a CSV file.
    Export(ExportArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where big7 data is held. Defaults to ~/big7
    #[arg(long, env = "BIG7_HOME", default_value_t = default_big7_home())]
    big7_home: DisplayPath,

    /// The admin password that unlocks the ledger.
    #[arg(long, env = "BIG7_ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

impl Common {
    pub fn new(log_level: LevelFilter, big7_home: PathBuf, password: impl Into<String>) -> Self {
        Self {
            log_level,
            big7_home: big7_home.into(),
            password: password.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn big7_home(&self) -> &DisplayPath {
        &self.big7_home
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Args for the `big7 add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The record category, e.g. "Weekly Sales" or "Worker Payment".
    #[arg(long)]
    category: Category,

    /// The amount in GHS. Must be zero or a positive number.
    #[arg(long)]
    amount: Amount,

    /// The worker or customer this record concerns.
    #[arg(long)]
    person: Option<String>,

    /// A free-text note.
    #[arg(long)]
    note: Option<String>,
}

impl AddArgs {
    pub fn new(
        category: Category,
        amount: Amount,
        person: Option<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            category,
            amount,
            person,
            note,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn person(&self) -> &str {
        self.person.as_deref().unwrap_or_default()
    }

    pub fn note(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }
}

/// Args for the `big7 export` command.
#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Where to write the CSV file. Defaults to big7-financial-records.csv in
    /// the current directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(out: Option<PathBuf>) -> Self {
        Self { out }
    }

    pub fn out(&self) -> Option<&Path> {
        self.out.as_deref()
    }
}

fn default_big7_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("big7"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --big7-home or BIG7_HOME instead of relying on the default \
                big7 home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("big7")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
