// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use anyhow::Result;
use server::Server;

#[actix_web::main]
async fn main() {
    server::try_or_exit(run()).await;
}

async fn run() -> Result<()> {
    if let Some(server) = Server::create("Biyebari Wedding API").await? {
        server.run().await?;
    }

    Ok(())
}
