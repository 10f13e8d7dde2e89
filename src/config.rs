use std::env;
use std::net::SocketAddr;

use crate::error::{invalid_input_error, Error};

const DEFAULT_API_BASE: &str = "maps.googleapis.com";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub google_maps_api_base: String,
    pub google_maps_api_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub simulation_seed: Option<u64>,
}

impl Config {
    /// Reads the process environment; call `dotenv::dotenv()` first to pick up
    /// a local `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr: SocketAddr = non_empty("AURORA_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|_| invalid_input_error())?;

        let simulation_seed = match non_empty("AURORA_SIMULATION_SEED") {
            Some(seed) => Some(seed.trim().parse::<u64>().map_err(|_| invalid_input_error())?),
            None => None,
        };

        Ok(Self {
            google_maps_api_base: non_empty("GOOGLE_MAPS_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.into()),
            google_maps_api_key: non_empty("GOOGLE_MAPS_API_KEY"),
            bind_addr,
            simulation_seed,
        })
    }
}
