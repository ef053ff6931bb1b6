// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::settings::Settings;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use database::Db;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(name = "biyebari")]
pub struct Args {
    #[clap(
        short,
        long,
        default_value = "config.toml",
        help = "Specify path to configuration file"
    )]
    pub config: PathBuf,

    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
enum Command {
    /// Migrate the db. This is done automatically during start of the server,
    /// but can be done without starting the server using this command.
    MigrateDb,
    /// Migrate the db, then fill it with the demo guests, events, site content
    /// and travel directory.
    Seed,
}

impl Args {
    /// Returns true if we want to start the server after we finished the cli part
    pub fn server_should_start(&self) -> bool {
        self.cmd.is_none()
    }
}

/// Parses the CLI-Arguments into [`Args`]
///
/// Also runs (optional) cli commands if necessary
pub async fn parse_args() -> Result<Args> {
    let args = Args::parse();

    if let Some(cmd) = args.cmd.clone() {
        let settings = Settings::load(&args.config)?;

        match cmd {
            Command::MigrateDb => {
                db_storage::migrations::migrate_from_url(&settings.database.url)
                    .await
                    .context("Failed to migrate database")?;
            }
            Command::Seed => {
                db_storage::migrations::migrate_from_url(&settings.database.url)
                    .await
                    .context("Failed to migrate database")?;

                let db = Db::connect(&settings.database).context("Failed to connect to database")?;
                let mut conn = db.get_conn()?;

                db_storage::seed::seed_demo_data(&mut conn)?;

                println!("Seeded the demo dataset");
            }
        }
    }

    Ok(args)
}
