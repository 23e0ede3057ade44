use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::catalog::Catalog;
use crate::configuration::Settings;
use crate::document_store::DocumentStoreClient;
use crate::routes::{blog_post, health_check, list_posts, subscribe};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let store = config.document_store.client()?;
        let catalog = Catalog::embedded().context("Failed to load the post catalog.")?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, catalog, store)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    catalog: Catalog,
    store: DocumentStoreClient,
) -> Result<Server, anyhow::Error> {
    let catalog = web::Data::new(catalog);
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/blog", web::get().to(list_posts))
            .route("/blog/{slug}", web::get().to(blog_post))
            .route("/subscriptions", web::post().to(subscribe))
            .app_data(catalog.clone())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
