//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Turn an indented outline into a directory-style tree diagram
#[derive(Parser, Debug)]
#[command(name = "treegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Outline file (`-` or absent: read stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Connector charset: ascii, utf-8
    #[arg(short, long)]
    pub charset: Option<String>,

    /// Append `/` to entries that have children
    #[arg(short = 's', long)]
    pub trailing_slash: bool,

    /// Print each entry's full path
    #[arg(short, long)]
    pub full_path: bool,

    /// Omit the `.` root row
    #[arg(long)]
    pub no_root: bool,

    /// Print the flat `<depth>\t<name>` listing instead of the diagram
    #[arg(long)]
    pub flat: bool,

    /// Directory searched for .treegen.toml (default: cwd)
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    /// Debug output, repeat for more (-d -d -d)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum)]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Input path, `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
