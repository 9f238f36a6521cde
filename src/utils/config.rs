/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/
use dotenv::dotenv;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Loads the `.env` file of the working directory, if there is one
///
/// Variables already present in the process environment take precedence.
pub fn load_dotenv() {
    match dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {e}"),
    }
}

/// Reads an environment variable and parses it, falling back to `default`
///
/// A variable that is set but cannot be parsed is reported with `error!`
/// and the default is used instead.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads an environment variable and parses it
///
/// Returns `None` when the variable is missing, blank or cannot be parsed.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .and_then(|val| val.parse::<T>().ok())
}
