//! # Quill API Server
//!
//! Blog post CRUD over a document store, served by Actix-web.
//!
//! The server is built on a caller-supplied [`TcpListener`] so the
//! integration suite can drive the real application on an ephemeral
//! port while it keeps its own handle on the backing store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use std::net::TcpListener;

use actix_web::{App, HttpServer, dev::Server, web};
use tracing_actix_web::TracingLogger;

use crate::middleware::error::json_error_handler;
use crate::state::AppState;

/// Build the HTTP server on the given listener.
///
/// The returned [`Server`] is a future; callers either `.await` it
/// (the binary) or hand it to `tokio::spawn` (the tests).
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
