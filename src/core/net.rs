// src/core/net.rs
//
// One-shot GET of the data document. HTTP goes through a blocking reqwest
// client with a hard timeout; local paths are read straight from disk.

use std::{fs, io, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::config::options::Location;
use crate::loader::LoadError;

/// Raw transport result: status line + body, nothing interpreted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, body: body.into() }
    }

    #[inline]
    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// Transport seam. The loader only sees this trait, so tests can stand in
/// for the network.
pub trait Fetch {
    fn fetch(&self, location: &Location) -> Result<Fetched, LoadError>;
}

pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    fn map_err(&self, e: reqwest::Error) -> LoadError {
        if e.is_timeout() {
            LoadError::Timeout(self.timeout)
        } else {
            LoadError::Transport(e.to_string())
        }
    }
}

impl Fetch for Fetcher {
    fn fetch(&self, location: &Location) -> Result<Fetched, LoadError> {
        match location {
            Location::Url(url) => {
                let resp = self.client.get(url.clone()).send().map_err(|e| self.map_err(e))?;
                let status = resp.status().as_u16();
                let body = resp.bytes().map_err(|e| self.map_err(e))?;
                Ok(Fetched { status, body: body.to_vec() })
            }
            Location::Path(path) => match fs::read(path) {
                Ok(body) => Ok(Fetched::ok(body)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    Err(LoadError::Transport(format!("File not found: {}", path.display())))
                }
                Err(e) => Err(LoadError::Transport(format!("{}: {e}", path.display()))),
            },
        }
    }
}
