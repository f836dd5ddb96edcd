mod app_system;
mod book;
mod book_actor;
mod clients;
mod domain;
mod gateway;
mod messages;
mod render;
mod shell;

#[cfg(test)]
mod mock_framework;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use crate::app_system::{setup_tracing, ContactSystem, Settings};
use crate::book_actor::SubmitOutcome;
use crate::clients::BookClient;
use crate::shell::Command;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("loading configuration")?;
    setup_tracing(&settings.log.filter);

    info!("Starting contact book");
    let system = ContactSystem::new(&settings).context("starting contact system")?;

    println!("{}", shell::HELP);
    show(&system.book_client).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match shell::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        execute(&system.book_client, command).await?;
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Contact book closed");
    Ok(())
}

async fn execute(client: &BookClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Set { field, value } => client.set_field(field, value).await?,
        Command::Edit(id) => {
            if client.begin_edit(id.clone()).await?.is_none() {
                warn!(contact_id = %id, "No such contact to edit");
            }
        }
        Command::Submit => match client.submit().await? {
            SubmitOutcome::GatewayFailed => error!("Submit did not reach the contact service"),
            outcome => info!(outcome = ?outcome, "Submit finished"),
        },
        Command::Delete(id) => client.delete(id).await?,
        Command::Search(term) => client.set_search_term(term).await?,
        Command::Page(page) => client.set_page(page).await?,
        Command::Refresh => {
            client.refresh().await?;
        }
        Command::Show | Command::Quit => {}
        Command::Help => {
            println!("{}", shell::HELP);
            return Ok(());
        }
    }
    show(client).await
}

async fn show(client: &BookClient) -> anyhow::Result<()> {
    let snapshot = client.snapshot().await?;
    println!("{}", render::render(&snapshot));
    Ok(())
}
