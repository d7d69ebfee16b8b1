use std::io::{self, BufWriter};

use clap::Parser;

mod aws;
mod error;
mod output;
mod query;
mod ui;

pub use error::{FindError, Result};

use aws::client::AwsClients;
use output::RenderOptions;
use query::Query;

#[derive(Parser)]
#[command(name = "ec2-find")]
#[command(about = "Find EC2 instances by tag substring or instance id")]
#[command(version)]
struct Cli {
    /// AWS credential profile to use
    #[arg(short, long)]
    profile: Option<String>,

    /// AWS region (defaults to the SDK provider chain)
    #[arg(short, long)]
    region: Option<String>,

    /// Tag value substring to search for
    #[arg(short, long)]
    tag: Option<String>,

    /// Instance id to search for (the i- prefix may be omitted)
    #[arg(short, long)]
    instance: Option<String>,

    /// Print only the private IP addresses
    #[arg(short, long)]
    quiet: bool,

    /// Include terminated instances
    #[arg(long)]
    show_terminated: bool,
}

async fn run(cli: Cli) -> Result<()> {
    let query = Query::resolve(cli.tag.as_deref(), cli.instance.as_deref())?;

    let clients = AwsClients::new(cli.profile.as_deref(), cli.region.as_deref()).await?;

    let spinner = ui::query_spinner(&clients.region);
    let result = aws::ec2::instance::find_instances(&clients, &query).await;
    spinner.finish_and_clear();
    let instances = result?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    output::write_instances(
        &mut writer,
        &instances,
        &RenderOptions {
            quiet: cli.quiet,
            show_terminated: cli.show_terminated,
        },
    )
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        println!("{}", err);
        std::process::exit(1);
    }
}
