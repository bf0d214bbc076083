use std::path::Path;
use std::sync::Arc;

use gcp_auth::{CustomServiceAccount, TokenProvider};

use crate::presentation::config::GoogleCloudSettings;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Resolves OAuth bearer tokens for the Google Cloud REST adapters.
///
/// Credential sources, in order: inline service-account JSON, a
/// service-account file path, then Application Default Credentials.
/// Token caching and refresh are handled by `gcp_auth`.
#[derive(Clone)]
pub struct GcpTokenSource {
    provider: Arc<dyn TokenProvider>,
}

impl GcpTokenSource {
    pub async fn from_settings(settings: &GoogleCloudSettings) -> Result<Self, gcp_auth::Error> {
        if let Some(json) = &settings.credentials_json {
            let account = CustomServiceAccount::from_json(json)?;
            return Ok(Self {
                provider: Arc::new(account),
            });
        }

        if let Some(path) = &settings.credentials_path {
            let account = CustomServiceAccount::from_file(Path::new(path))?;
            return Ok(Self {
                provider: Arc::new(account),
            });
        }

        let provider = gcp_auth::provider().await?;
        Ok(Self { provider })
    }

    pub async fn bearer_token(&self) -> Result<String, gcp_auth::Error> {
        let token = self.provider.token(&[CLOUD_PLATFORM_SCOPE]).await?;
        Ok(token.as_str().to_string())
    }
}
