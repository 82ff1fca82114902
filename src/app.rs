use crate::{api, err::Error};
use axum::{routing::get, Router};
use std::net::{SocketAddr, TcpListener};

/// The Main application object
/// Owns route registration and the listen call
pub struct App;

impl App {
    /// Create a new application object
    pub fn new() -> Self {
        Self
    }

    /// Build the router served by this application
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(api::whoami::whoami))
            .fallback(api::whoami::unknown_route)
    }

    /// Start a server and serve the API
    ///
    /// # Arguments
    /// * `address` - The address to bind to
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if the server failed
    pub async fn serve(self, address: &str) -> Result<(), Error> {
        let router = self.router();
        let listener = TcpListener::bind(address)?;

        println!("Listening on: http://{}", address);

        axum_server::from_tcp(listener)
            .serve(router.into_make_service_with_connect_info::<SocketAddr>())
            .await?;

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
