use crate::configuration::Settings;
use crate::contact_client::ContactClient;
use actix_web::{App, HttpServer, dev::Server, web};
use anyhow::Context;
use std::io::Error;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let contact_client = configuration
            .contact_api
            .client()
            .context("Failed to build the contact API client")?;
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, contact_client)?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), Error> {
        self.server.await
    }
}

fn run(listener: TcpListener, contact_client: ContactClient) -> Result<Server, anyhow::Error> {
    // Shared by every worker; `reqwest::Client` pools connections internally
    let contact_client = web::Data::new(contact_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(crate::routes::health_check))
            .route("/contact", web::get().to(crate::routes::contact_page))
            .route(
                "/contact",
                web::post().to(crate::routes::send_contact_message),
            )
            .app_data(web::Data::clone(&contact_client))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
