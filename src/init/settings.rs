use crate::err::Error;
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub address: String,
    pub port: u16,
}

impl Settings {
    pub fn new(
        config_file: Option<String>,
        address: Option<String>,
        port: Option<u16>,
    ) -> Result<Self, Error> {
        let config_file = config_file.unwrap_or_else(|| "config".to_string());

        let builder = Config::builder()
            .set_default("address", "0.0.0.0")?
            .set_default("port", 5000)?
            .add_source(File::with_name(&config_file).required(false))
            .set_override_option("address", address)?
            .set_override_option("port", port)?;

        let config = builder.build()?;

        Ok(Settings {
            address: config.get("address")?,
            port: config.get("port")?,
        })
    }

    pub fn print(&self) {
        println!("Address: {}", self.address);
        println!("Port: {}", self.port);
    }
}
