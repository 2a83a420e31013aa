use anyhow::Result;
use clap::Parser;

use textkit_cli::cli::commands::one_line::{self, OneLineOptions};
use textkit_cli::cli::{Args, Tool};
use textkit_cli::fatal;
use textkit_cli::output;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::set_quiet(args.quiet);

    if let Err(e) = run(args).await {
        fatal::speak_and_exit(&format!("{e:#}"), fatal::exit_code_for(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.tool.parse::<Tool>()? {
        Tool::OneLine => {
            let options = OneLineOptions {
                input_text: args.input_text,
                output_text: args.output_text,
            };
            one_line::run_one_line(options).await?;
        }
    }

    Ok(())
}
