use crate::Config;
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum StartupCheckError {
    #[error("gallery store base URL is invalid: {0}")]
    InvalidStoreUrl(String),

    #[error("vision endpoint URL is invalid: {0}")]
    InvalidVisionEndpoint(String),

    #[error("session secret is still the default placeholder")]
    DefaultSessionSecret,
}

pub fn perform_startup_checks(config: &Config) -> Result<(), Vec<StartupCheckError>> {
    let mut errors = Vec::new();

    info!("Performing startup checks...");

    match &config.store.base_url {
        Some(raw) => match Url::parse(raw) {
            Ok(url) => info!("Gallery store configured at {}", url),
            Err(e) => {
                error!("Gallery store base URL '{}' is invalid: {}", raw, e);
                errors.push(StartupCheckError::InvalidStoreUrl(raw.clone()));
            }
        },
        None => {
            warn!("No gallery store configured - using the in-memory store (records are lost on restart)");
        }
    }

    match &config.vision.endpoint {
        Some(raw) => match Url::parse(raw) {
            Ok(endpoint) => {
                info!("Vision endpoint configured at {}", endpoint);
                if config.vision.api_key.is_none() {
                    warn!(
                        "Vision endpoint is configured but no API key is set - suggestions will use filename fallback"
                    );
                }
            }
            Err(e) => {
                error!("Vision endpoint URL '{}' is invalid: {}", raw, e);
                errors.push(StartupCheckError::InvalidVisionEndpoint(raw.clone()));
            }
        },
        None => {
            info!("No vision endpoint configured - suggestions will use filename fallback only");
        }
    }

    if config.app.session_secret == crate::DEFAULT_SESSION_SECRET {
        warn!("Session secret is the default placeholder - admin cookies are forgeable");
        errors.push(StartupCheckError::DefaultSessionSecret);
    }

    if errors.is_empty() {
        info!("All startup checks passed");
        Ok(())
    } else {
        error!("Startup checks failed with {} errors", errors.len());
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_warns_about_placeholder_secret() {
        let config = Config::default();
        let errors = perform_startup_checks(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, StartupCheckError::DefaultSessionSecret)));
    }

    #[test]
    fn configured_secret_and_store_pass() {
        let mut config = Config::default();
        config.app.session_secret = "generated-at-deploy".to_string();
        config.store.base_url = Some("https://store.kolakevilla.com/api/".to_string());
        assert!(perform_startup_checks(&config).is_ok());
    }

    #[test]
    fn malformed_store_url_is_an_error() {
        let mut config = Config::default();
        config.app.session_secret = "generated-at-deploy".to_string();
        config.store.base_url = Some("not a url".to_string());
        let errors = perform_startup_checks(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, StartupCheckError::InvalidStoreUrl(_))));
    }
}
