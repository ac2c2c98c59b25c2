use crate::config::types::{Config, HttpConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    validate_images_config(&config.images)?;
    Ok(())
}

/// Validates site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.root_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid root-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "root-url must use HTTP or HTTPS, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(
            "root-url must have a host".to_string(),
        ));
    }

    for entry in &config.blacklist {
        if entry.is_empty() {
            return Err(ConfigError::Validation(
                "blacklist entries cannot be empty (an empty substring matches everything)"
                    .to_string(),
            ));
        }
    }

    for ext in &config.skip_extensions {
        if !ext.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "skip-extensions entries must start with '.', got '{}'",
                ext
            )));
        }
    }

    Ok(())
}

/// Validates HTTP configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.listing_timeout_secs < 1 || config.listing_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "listing-timeout-secs must be between 1 and 300, got {}",
            config.listing_timeout_secs
        )));
    }

    if config.leaf_timeout_secs < 1 || config.leaf_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "leaf-timeout-secs must be between 1 and 300, got {}",
            config.leaf_timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.manifest_path.is_empty() {
        return Err(ConfigError::Validation(
            "manifest-path cannot be empty".to_string(),
        ));
    }

    if config.catalog_dir.is_empty() {
        return Err(ConfigError::Validation(
            "catalog-dir cannot be empty".to_string(),
        ));
    }

    if config.catalog_file_name.is_empty() || config.catalog_file_name.contains('/') {
        return Err(ConfigError::Validation(format!(
            "catalog-file-name must be a bare file name, got '{}'",
            config.catalog_file_name
        )));
    }

    Ok(())
}

/// Validates image token configuration
fn validate_images_config(config: &crate::config::types::ImageConfig) -> Result<(), ConfigError> {
    Url::parse(&config.direct_base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid direct-base-url: {}", e)))?;

    if config.token_attr.is_empty() {
        return Err(ConfigError::Validation(
            "token-attr cannot be empty".to_string(),
        ));
    }

    Ok(())
}
