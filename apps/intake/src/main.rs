use std::{
    io::{self, BufWriter},
    process::ExitCode,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{ClientConfig, ServiceClient, DEFAULT_BASE_URL};
use shared::{domain::Appliance, protocol::RequestFields};
use tracing_subscriber::EnvFilter;

mod app;
mod controller;
mod ui;

use app::IntakeApp;
use controller::events::UiEvent;
use ui::{prompt::Prompter, render::render_event};

#[derive(Parser, Debug)]
#[command(name = "intake", about = "Submit and review home appliance service requests")]
struct Args {
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BASE_URL)]
    server_url: String,
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one service request and exit.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        appliance: Appliance,
        #[arg(long)]
        issue: String,
    },
    /// Print every submitted request and exit.
    List,
}

fn main() -> Result<ExitCode> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let config = ClientConfig::new(&args.server_url)?
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let client = ServiceClient::new(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build client runtime")?;
    let app = IntakeApp::new(client, runtime);

    let event = match args.command {
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), BufWriter::new(io::stdout()));
            app.run(&mut prompter)?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Command::Submit {
            name,
            contact,
            appliance,
            issue,
        }) => app.submit(&RequestFields::new(name, contact, appliance, issue)),
        Some(Command::List) => app.list(),
    };

    println!("{}", render_event(&event));
    Ok(match event {
        UiEvent::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
