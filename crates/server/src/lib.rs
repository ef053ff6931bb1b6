// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Core library of the *Biyebari* wedding website backend
//!
//! # Example
//!
//! ```no_run
//! use biyebari_server::Server;
//! use anyhow::Result;
//!
//! #[actix_web::main]
//! async fn main() {
//!     biyebari_server::try_or_exit(run()).await;
//! }
//!
//! async fn run() -> Result<()> {
//!     if let Some(server) = Server::create("Biyebari Wedding API").await? {
//!         server.run().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::api::v1::middleware::headers::Headers;
use crate::api::v1::middleware::token_auth::TokenAuth;
use crate::api::v1::response::json_error_handler;
use crate::settings::{Settings, SharedSettings};
use crate::trace::ReducedSpanBuilder;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer, Scope};
use anyhow::{anyhow, Context, Result};
use arc_swap::ArcSwap;
use database::Db;
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, Ipv6Addr};
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tracing_actix_web::TracingLogger;

#[cfg(not(doc))]
mod api;
#[cfg(doc)]
pub mod api;

mod cli;
mod trace;

pub mod settings;

#[derive(Debug, thiserror::Error)]
#[error("Blocking thread has panicked")]
pub struct BlockingError;

/// Custom version of `actix_web::web::block` which retains the current tracing span
pub async fn block<F, R>(f: F) -> Result<R, BlockingError>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let span = tracing::Span::current();

    let fut = actix_rt::task::spawn_blocking(move || span.in_scope(f));

    fut.await.map_err(|_| BlockingError)
}

/// Wrapper of the main function. Correctly outputs the error to the logging utility or stderr.
pub async fn try_or_exit<T, F>(f: F) -> T
where
    F: std::future::Future<Output = Result<T>>,
{
    match f.await {
        Ok(ok) => ok,
        Err(err) => {
            if log::log_enabled!(log::Level::Error) {
                log::error!("Crashed with error: {:?}", err);
            } else {
                eprintln!("Crashed with error: {err:?}");
            }

            std::process::exit(-1);
        }
    }
}

/// Server struct representation containing all fields required to drive the API
pub struct Server {
    /// Settings loaded on [Server::create]
    pub startup_settings: Arc<Settings>,

    /// Cloneable shared settings, can be used to reload settings from, when receiving the `reload` signal.
    pub shared_settings: SharedSettings,

    /// CLI arguments
    args: cli::Args,

    db: Arc<Db>,
}

impl Server {
    /// Tries to create a server from CLI arguments and then the settings.
    ///
    /// This can return Ok(None) which would indicate that the process executed a CLI
    /// subprogram (e.g. `migrate-db`) and must now exit.
    ///
    /// Otherwise it will return itself which can be run using [`Server::run`]
    pub async fn create(program_name: &str) -> Result<Option<Self>> {
        let args = cli::parse_args().await?;

        // Some args run commands by them self and thus should exit here
        if !args.server_should_start() {
            return Ok(None);
        }

        let settings = settings::load_settings(&args)?;

        trace::init(&settings.logging)?;

        log::info!("Starting {}", program_name);

        let server = Self::init(settings, args).await?;

        Ok(Some(server))
    }

    #[tracing::instrument(err, skip(settings, args))]
    async fn init(settings: Settings, args: cli::Args) -> Result<Self> {
        let settings = Arc::new(settings);
        let shared_settings: SharedSettings = Arc::new(ArcSwap::from(settings.clone()));

        db_storage::migrations::migrate_from_url(&settings.database.url)
            .await
            .context("Failed to migrate database")?;

        // Connect to postgres
        let db = Db::connect(&settings.database).context("Failed to connect to database")?;
        let db = Arc::new(db);

        Ok(Self {
            startup_settings: settings,
            shared_settings,
            args,
            db,
        })
    }

    /// Runs the server until a fatal error occurred or a shutdown is requested (e.g. SIGTERM).
    pub async fn run(self) -> Result<()> {
        // Start HTTP Server
        let http_server = {
            let cors = self.startup_settings.http.cors.clone();

            let db = Arc::downgrade(&self.db);

            HttpServer::new(move || {
                let cors = setup_cors(&cors);

                // Unwraps cannot panic. Server gets stopped before dropping the Arc.
                let db = Data::from(db.upgrade().unwrap());

                App::new()
                    .wrap(Headers {})
                    .wrap(TracingLogger::<ReducedSpanBuilder>::new())
                    .wrap(cors)
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .app_data(db.clone())
                    .service(v1_scope(db))
            })
        };

        let address = (
            self.startup_settings
                .http
                .addr
                .unwrap_or(IpAddr::V6(Ipv6Addr::UNSPECIFIED)),
            self.startup_settings.http.port,
        );

        let http_server = if let Some(tls) = &self.startup_settings.http.tls {
            let config = setup_rustls(tls).context("Failed to setup TLS context")?;

            http_server.bind_rustls(address, config)
        } else {
            http_server.bind(address)
        };

        let http_server = http_server.with_context(|| {
            format!("Failed to bind http server to {}:{}", address.0, address.1)
        })?;

        log::info!("Startup finished");

        let http_server = http_server.disable_signals().run();
        let http_server_handle = http_server.handle();

        let mut reload_signal =
            signal(SignalKind::hangup()).context("Failed to register SIGHUP signal handler")?;

        actix_rt::spawn(http_server);

        // Wait for either SIGTERM or SIGHUP and handle them accordingly
        loop {
            tokio::select! {
                _ = ctrl_c() => {
                    log::info!("Got termination signal, exiting");
                    break;
                }
                _ = reload_signal.recv() => {
                    log::info!("Got reload signal, reloading");

                    if let Err(e) = settings::reload_settings(self.shared_settings.clone(), &self.args.config) {
                        log::error!("Failed to reload settings, {}", e);
                        continue
                    }
                }
            }
        }

        http_server_handle.stop(true).await;

        Ok(())
    }
}

fn v1_scope(db: Data<Db>) -> Scope {
    // public apis
    web::scope("/v1")
        .service(api::v1::health::health)
        .service(api::v1::content::get_sections)
        .service(api::v1::content::get_section)
        .service(api::v1::content::get_by_key)
        .service(api::v1::events::get_events)
        .service(api::v1::events::get_event)
        .service(api::v1::accommodations::get_accommodations)
        .service(api::v1::accommodations::get_accommodation)
        .service(api::v1::transportation::get_routes)
        .service(api::v1::transportation::get_route)
        .service(api::v1::gallery::get_gallery)
        .service(api::v1::gallery::get_media)
        .service(api::v1::guestbook::get_messages)
        .service(api::v1::guestbook::get_message)
        .service(
            // empty scope to differentiate between auth endpoints
            web::scope("")
                .wrap(TokenAuth { db })
                .service(api::v1::users::get_me)
                .service(api::v1::rsvps::post_rsvp)
                .service(api::v1::rsvps::get_rsvps)
                .service(api::v1::gallery::post_gallery)
                .service(api::v1::guestbook::post_message),
        )
}

fn setup_cors(settings: &settings::HttpCors) -> Cors {
    let mut cors = Cors::default();

    for origin in &settings.allowed_origin {
        cors = cors.allowed_origin(origin)
    }

    cors.allowed_header(header::CONTENT_TYPE)
        .allowed_header(header::AUTHORIZATION)
        .allow_any_method()
}

fn setup_rustls(tls: &settings::HttpTls) -> Result<rustls::ServerConfig> {
    let cert_file = File::open(&tls.certificate)
        .with_context(|| format!("Failed to open certificate file {:?}", &tls.certificate))?;
    let certs = rustls_pemfile::certs(&mut BufReader::new(cert_file))
        .map_err(|_| anyhow!("Invalid certificate"))?;
    let certs = certs.into_iter().map(rustls::Certificate).collect();

    let private_key_file = File::open(&tls.private_key).with_context(|| {
        format!(
            "Failed to open pkcs8 private key file {:?}",
            &tls.private_key
        )
    })?;
    let mut key = rustls_pemfile::rsa_private_keys(&mut BufReader::new(private_key_file))
        .map_err(|_| anyhow!("Invalid pkcs8 private key"))?;

    let config = rustls::ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth()
        .with_single_cert(certs, rustls::PrivateKey(key.remove(0)))?;

    Ok(config)
}
