use std::path::PathBuf;

use clap::Parser;

/// Configuration for the contact book server. Every value can be set via
/// command line or environment variable.
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value_t = 3000, long, env = "HTTP_PORT")]
    pub http_port: u16,
    #[arg(default_value_t = String::from("127.0.0.1"), long, env = "HTTP_ADDRESS")]
    pub http_address: String,
    #[arg(default_value_t = String::from("./data"), long, env = "DATA_DIR")]
    pub data_dir: String,
}

impl Config {
    pub fn contacts_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("contacts.json")
    }

    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}
