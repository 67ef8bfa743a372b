//! Command line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use todo_core::{LoadError, RecordStore};

/// Serve a read-only set of todos over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "TODO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file to load todos from instead of the bundled data.
    #[arg(long, env = "TODO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Tracing filter, e.g. `info` or `todo_server=debug,tower_http=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the record set this configuration points at.
    pub fn load_store(&self) -> Result<RecordStore, LoadError> {
        match &self.data_file {
            Some(path) => RecordStore::load(path),
            None => RecordStore::bundled(),
        }
    }
}
