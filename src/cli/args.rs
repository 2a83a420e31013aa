use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textkit")]
#[command(about = "Small text tools backed by a completion API")]
#[command(version)]
pub struct Args {
    /// Which tool to run (one of: one_line)
    #[arg(long, default_value = "")]
    pub tool: String,

    /// Path to the text file to process
    #[arg(long = "input_text", value_name = "PATH")]
    pub input_text: Option<PathBuf>,

    /// Path to the file the result is written to
    #[arg(long = "output_text", value_name = "PATH", default_value = "out.txt")]
    pub output_text: PathBuf,

    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,
}
