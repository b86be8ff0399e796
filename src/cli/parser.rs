use crate::api::{ReviewAction, UploadTarget};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for fxsheet
#[derive(Parser)]
#[command(
    name = "fxsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Faculty data exchange: spreadsheet export, bulk upload and deletion-request review",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (e.g. https://faculty.example.edu)
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Bearer token for the backend (overrides FXSHEET_TOKEN and the config file)
    #[arg(global = true, long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Export JSON records to an .xlsx file named <PREFIX>_<YYYY-MM-DD>.xlsx
    Export {
        #[command(subcommand)]
        kind: ExportKind,
    },

    /// Upload a spreadsheet to a bulk ingestion endpoint
    Upload {
        /// Ingestion endpoint
        #[arg(long, value_enum, default_value = "staff")]
        target: UploadTarget,

        /// Spreadsheet to upload (.xlsx, .xls or .csv)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Review pending doctor deletion requests
    Requests {
        #[command(subcommand)]
        action: RequestsAction,
    },

    /// Write an empty upload template with the expected columns
    Template {
        /// Ingestion endpoint the template is for
        #[arg(long, value_enum, default_value = "staff")]
        target: UploadTarget,

        /// Output file (.xlsx or .csv)
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

#[derive(Args, Clone)]
pub struct OutputArgs {
    /// Output directory (defaults to `output_dir` from the config)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum ExportKind {
    /// Generic table: project records through key=Header columns
    Table {
        /// JSON array of objects
        #[arg(long, value_name = "FILE")]
        data: String,

        /// JSON array of {"key": ..., "header": ...}
        #[arg(long, value_name = "FILE", required_unless_present = "column")]
        columns: Option<String>,

        /// Inline column definition, repeatable: --column national_id="National ID"
        #[arg(long, value_name = "KEY=HEADER", conflicts_with = "columns")]
        column: Vec<String>,

        /// File name prefix
        #[arg(long)]
        prefix: String,

        /// Worksheet name (default: Sheet1)
        #[arg(long)]
        sheet: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Grade sheet: name, national ID and three columns per subject
    Grades {
        /// JSON array of students with nested subject grades
        #[arg(long, value_name = "FILE")]
        students: String,

        /// JSON array of {"id": ..., "name": ...} in column order
        #[arg(long, value_name = "FILE")]
        subjects: String,

        /// File name prefix
        #[arg(long)]
        prefix: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Attendance sheet with localized status labels
    Attendance {
        /// JSON array of attendance records
        #[arg(long, value_name = "FILE")]
        records: String,

        /// Course name used in the file name
        #[arg(long)]
        course: String,

        /// Attendance date used in the file name
        #[arg(long)]
        date: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand)]
pub enum RequestsAction {
    /// List pending deletion requests
    List,

    /// Approve a deletion request
    Approve {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Reject a deletion request
    Reject {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

impl RequestsAction {
    /// Moderation action with its target id and confirmation flag.
    pub fn review(&self) -> Option<(i64, ReviewAction, bool)> {
        match self {
            RequestsAction::List => None,
            RequestsAction::Approve { id, yes } => Some((*id, ReviewAction::Approve, *yes)),
            RequestsAction::Reject { id, yes } => Some((*id, ReviewAction::Reject, *yes)),
        }
    }
}
