use anyhow::Result;
use clap::Parser;
use console::style;

use easel::prompt::cliclack::CliclackPrompt;
use easel::providers::azure::{AzureCompletionProvider, AzureImageProvider};
use easel::session::Session;

/// Chat assistant that answers in text or generated images. All
/// configuration comes from the environment (see README); there are no
/// behavioral flags.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    Cli::parse();

    let completions = AzureCompletionProvider::from_env()?;
    let images = AzureImageProvider::from_env()?;

    println!(
        "Text & image chat {}",
        style("- type \"/exit\" to end the session").dim()
    );
    println!();

    let mut session = Session::new(
        Box::new(completions),
        Box::new(images),
        Box::new(CliclackPrompt::new()),
    );
    session.start()
}
