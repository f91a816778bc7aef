//! Command-line front end for the parcel tracker.
//!
//! # Responsibility
//! - Parse flags and dispatch to `ParcelService` use cases.
//! - Print results as plain lines for shell use.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parcel_core::db::open_db;
use parcel_core::{
    core_version, default_log_level, init_logging, ClientId, Parcel, ParcelNumber, ParcelService,
    ParcelStore, SqliteParcelStore,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "parcel_cli", version, about = "Track parcels stored in SQLite")]
struct Cli {
    /// SQLite database file.
    #[arg(long, default_value = "tracker.db")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new parcel.
    Register {
        #[arg(long)]
        client: ClientId,
        #[arg(long)]
        address: String,
    },
    /// Show one parcel.
    Get { number: ParcelNumber },
    /// List parcels of a client.
    List {
        #[arg(long)]
        client: ClientId,
    },
    /// Advance a parcel to its next status.
    NextStatus { number: ParcelNumber },
    /// Change the address of a registered parcel.
    SetAddress {
        number: ParcelNumber,
        address: String,
    },
    /// Delete a registered parcel.
    Delete { number: ParcelNumber },
    /// Walk one parcel through its whole lifecycle.
    Demo {
        #[arg(long, default_value_t = 1)]
        client: ClientId,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    match cli.command {
        Command::Register { client, address } => {
            let parcel = service.register(client, &address)?;
            print_parcel(&parcel);
        }
        Command::Get { number } => print_parcel(&service.parcel(number)?),
        Command::List { client } => print_client_parcels(&service, client)?,
        Command::NextStatus { number } => {
            let status = service.next_status(number)?;
            println!("parcel {number} is now {status}");
        }
        Command::SetAddress { number, address } => service.change_address(number, &address)?,
        Command::Delete { number } => service.delete(number)?,
        Command::Demo { client } => run_demo(&service, client)?,
    }

    Ok(())
}

fn run_demo<S: ParcelStore>(service: &ParcelService<S>, client: ClientId) -> Result<()> {
    println!("parcel_cli {}", core_version());

    let parcel = service.register(client, "Pskov, Voennaya 15")?;
    println!(
        "registered parcel {} for client {} at {}",
        parcel.number, parcel.client, parcel.created_at
    );
    print_client_parcels(service, client)?;

    service.change_address(parcel.number, "Saratov, Verkhnyaya 3")?;
    service.next_status(parcel.number)?;
    print_client_parcels(service, client)?;

    // Sent parcels can no longer be removed.
    service.delete(parcel.number)?;
    print_client_parcels(service, client)?;

    let second = service.register(client, "Moscow, Lenina 1")?;
    service.delete(second.number)?;
    print_client_parcels(service, client)?;

    Ok(())
}

fn print_client_parcels<S: ParcelStore>(
    service: &ParcelService<S>,
    client: ClientId,
) -> Result<()> {
    let parcels = service.client_parcels(client)?;
    println!("client {client} has {} parcel(s):", parcels.len());
    for parcel in &parcels {
        print_parcel(parcel);
    }
    Ok(())
}

fn print_parcel(parcel: &Parcel) {
    println!(
        "  #{} client={} status={} address={} created_at={}",
        parcel.number, parcel.client, parcel.status, parcel.address, parcel.created_at
    );
}
