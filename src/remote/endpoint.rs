use reqwest::Url;

use crate::config::ConfigError;
use crate::listing::RecordId;

/// URLs of the listing collection and its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEndpoint {
    collection: Url,
}

impl ResourceEndpoint {
    /// Joins `resource` onto `base_url` as one path segment.
    ///
    /// A trailing slash on the base is tolerated; query and fragment are dropped.
    pub fn new(base_url: &str, resource: &str) -> Result<Self, ConfigError> {
        let resource = resource.trim();
        if resource.is_empty() || resource.contains('/') {
            return Err(invalid(format!(
                "resource must be a single non-empty path segment, got '{}'",
                resource
            )));
        }

        let mut url = Url::parse(base_url.trim())
            .map_err(|e| invalid(format!("Invalid base_url '{}': {}", base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| invalid(format!("base_url '{}' cannot take a path", base_url)))?
            .pop_if_empty()
            .push(resource);

        Ok(Self { collection: url })
    }

    /// `GET`/`POST` target.
    pub fn collection(&self) -> &Url {
        &self.collection
    }

    /// `PUT`/`DELETE` target. The id is percent-encoded as a path segment.
    pub fn item(&self, id: &RecordId) -> Url {
        let mut url = self.collection.clone();
        // Infallible: `new` only accepts http(s) URLs, which always have a path.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.as_text());
        }
        url
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
