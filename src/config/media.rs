use std::env;

use super::ConfigError;

/// Media-upload collaborator settings. The values are opaque to the request
/// pipeline; startup only requires that they are present.
#[derive(Clone, Debug)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl MediaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: env::var("CLOUDINARY_CLOUD_NAME")
                .map_err(|_| ConfigError::Missing("CLOUDINARY_CLOUD_NAME"))?,
            api_key: env::var("CLOUDINARY_API_KEY")
                .map_err(|_| ConfigError::Missing("CLOUDINARY_API_KEY"))?,
            api_secret: env::var("CLOUDINARY_API_SECRET")
                .map_err(|_| ConfigError::Missing("CLOUDINARY_API_SECRET"))?,
        })
    }

    /// Resolves a stored image reference to a deliverable URL. Absolute
    /// URLs pass through untouched.
    pub fn delivery_url(&self, image: &str) -> String {
        if image.starts_with("http://") || image.starts_with("https://") {
            image.to_string()
        } else {
            format!(
                "https://res.cloudinary.com/{}/image/upload/{}",
                self.cloud_name, image
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MediaConfig {
        MediaConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        }
    }

    #[test]
    fn public_id_resolves_to_delivery_url() {
        assert_eq!(
            config().delivery_url("products/basket.png"),
            "https://res.cloudinary.com/demo/image/upload/products/basket.png"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://cdn.example.com/basket.png";
        assert_eq!(config().delivery_url(url), url);
    }
}
