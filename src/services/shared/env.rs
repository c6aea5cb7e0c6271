use dotenvy::{dotenv, var};

// Neither variable is required for operation: the API base falls back to the public
// CryptoCompare host and logging defaults to INFO.
pub fn get_env_variable(variable_to_get: &str) -> Option<String> {
    dotenv().ok();
    var(variable_to_get).ok()
}
