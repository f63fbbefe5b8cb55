use std::collections::HashMap;

pub const DEFAULT_PATH: &str = "/etc/courier/courier.toml";
const ENV_PREFIX: &str = "COURIER_";

/// Loads Courier config from the filesystem and merges it with any
/// environment variables prefixed with COURIER_.
///
/// Credential sourcing stays a caller concern; this is the helper callers
/// use to pull the API key and friends out of a config file.
///
/// This function will panic on error.
///
/// See the sample config file in `resources` for valid keys.
pub fn load_config(path: Option<&str>) -> HashMap<String, String> {
    let mut settings = config::Config::default();

    settings
        .merge(config::File::with_name(path.unwrap_or(DEFAULT_PATH)))
        .unwrap()
        .merge(config::Environment::with_prefix(ENV_PREFIX))
        .unwrap();

    settings.try_into::<HashMap<String, String>>().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE_CONFIG_PATH: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/resources", "/courier.toml");

    #[test]
    fn load_sample_config() {
        let settings = load_config(Some(SAMPLE_CONFIG_PATH));

        assert_eq!(settings.get("api_key").map(String::as_str), Some("SG.sample-key"));
        assert_eq!(settings.get("sandbox").map(String::as_str), Some("true"));
    }
}
