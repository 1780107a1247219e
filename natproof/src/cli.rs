use clap::Parser;
use std::path::PathBuf;

/// Build, check and print sample natural-deduction derivations
///
/// Every demonstration builds its derivation through the inference rules of
/// the kernel, which reject any step whose precondition does not hold.
///
/// Set the environment variable "LOG" to "debug" or "trace"
/// to obtain every certified proposition and parameter binding.
#[derive(Parser)]
pub struct Cli {
    /// List the available demonstrations
    #[arg(long)]
    pub list: bool,

    /// Print the full derivation, conclusion first
    #[arg(long)]
    pub tree: bool,

    /// Write the proof in JSON format to given file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the derivation to given file instead of standard output
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Name of the demonstration to run
    #[arg(default_value = "syllogism")]
    pub demo: String,
}

impl Cli {
    pub fn output(&self, out: impl std::fmt::Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", out),
        }
    }
}
