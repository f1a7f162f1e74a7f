use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::{domain::Appliance, protocol::RequestFields};
use storage::{RequestStore, Storage};

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://./data/requests.db")]
    database_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every stored request with its id and timestamp.
    List,
    /// Append a request without going through the service.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        appliance: Appliance,
        #[arg(long)]
        issue: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = Storage::new(&cli.database_url).await?;

    match cli.command {
        Command::List => {
            let records = storage.list_all().await?;
            if records.is_empty() {
                println!("no requests stored");
            }
            for record in records {
                println!(
                    "#{} {} | {} | {} | {} | {}",
                    record.id.0,
                    record.created_at.to_rfc3339(),
                    record.fields.name,
                    record.fields.contact,
                    record.fields.appliance,
                    record.fields.issue
                );
            }
        }
        Command::Add {
            name,
            contact,
            appliance,
            issue,
        } => {
            let record = storage
                .append(RequestFields::new(name, contact, appliance, issue))
                .await?;
            println!("created request_id={} hash={}", record.id.0, record.hash);
        }
    }

    Ok(())
}
