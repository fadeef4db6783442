use std::{env, time::Duration};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REGION: &str = "ap-south-1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub process_interval: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct AwsConfig {
    pub region: String,
    pub queue_url: String,
    pub table_name: String,
}

/// Where orders are queued and stored.
#[derive(Clone, Debug)]
pub enum Backend {
    Aws(AwsConfig),
    /// Process-local queue and table, lost on exit. For local runs.
    InMemory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub backend: Backend,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let backend = match var("BACKEND").as_deref() {
            None | Some("aws") => Backend::Aws(AwsConfig {
                queue_url: var("QUEUE_URL").ok_or(Error::Missing("QUEUE_URL"))?,
                table_name: var("TABLE_NAME").ok_or(Error::Missing("TABLE_NAME"))?,
                region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            }),
            Some("memory") => Backend::InMemory,
            Some(other) => {
                return Err(Error::Invalid {
                    name: "BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| Error::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let process_interval = match var("PROCESS_ORDERS_INTERVAL_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(Error::Invalid {
                        name: "PROCESS_ORDERS_INTERVAL_SECS",
                        value: raw,
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            app: AppConfig {
                host,
                port,
                process_interval,
            },
            backend,
        })
    }
}
