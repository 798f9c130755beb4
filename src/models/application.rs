use std::fs;
use std::path::Path;

use failure::ResultExt;
use serde_derive::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::errors::*;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Recognizer settings as found in the bot settings file. Every entry is optional so that a
/// partially filled file still loads and can be reported as not configured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecognizerSettings {
    #[serde(rename = "OrchestrationAPIEndPoint", default)]
    pub endpoint: Option<String>,
    #[serde(rename = "OrchestrationAPIKey", default)]
    pub endpoint_key: Option<String>,
    #[serde(rename = "OrchestrationProjectName", default)]
    pub project_name: Option<String>,
    #[serde(rename = "OrchestrationDeploymentName", default)]
    pub deployment_name: Option<String>,
}

impl RecognizerSettings {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings_path = path.as_ref();
        let settings_file = fs::File::open(settings_path).with_context(|_| {
            OrchestrationError::SettingsLoad(settings_path.to_string_lossy().to_string())
        })?;
        let settings = serde_json::from_reader(settings_file)
            .with_context(|_| format!("Invalid settings file {:?}", settings_path))?;
        Ok(settings)
    }

    pub fn is_configured(&self) -> bool {
        [
            &self.endpoint,
            &self.endpoint_key,
            &self.project_name,
            &self.deployment_name,
        ]
        .iter()
        .all(|setting| setting.as_deref().map(|s| !s.is_empty()).unwrap_or(false))
    }

    pub fn to_application(&self) -> Result<OrchestrationApplication> {
        if !self.is_configured() {
            return Err(OrchestrationError::NotConfigured.into());
        }
        OrchestrationApplication::new(
            self.project_name.as_deref().unwrap_or_default(),
            self.deployment_name.as_deref().unwrap_or_default(),
            self.endpoint_key.as_deref().unwrap_or_default(),
            self.endpoint.as_deref().unwrap_or_default(),
        )
    }
}

/// A deployed orchestration project and the credentials to query it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestrationApplication {
    pub project_name: String,
    pub deployment_name: String,
    pub endpoint_key: String,
    pub endpoint: Url,
}

impl OrchestrationApplication {
    pub fn new(
        project_name: &str,
        deployment_name: &str,
        endpoint_key: &str,
        endpoint: &str,
    ) -> Result<Self> {
        check_not_blank("projectName", project_name)?;
        check_not_blank("deploymentName", deployment_name)?;
        check_not_blank("endpointKey", endpoint_key)?;
        check_not_blank("endpoint", endpoint)?;

        if Uuid::parse_str(endpoint_key).is_err() {
            return Err(OrchestrationError::InvalidEndpointKey(endpoint_key.to_string()).into());
        }
        let endpoint_url = match Url::parse(endpoint) {
            Ok(url) if !url.cannot_be_a_base() => url,
            _ => return Err(OrchestrationError::InvalidEndpoint(endpoint.to_string()).into()),
        };

        Ok(Self {
            project_name: project_name.to_string(),
            deployment_name: deployment_name.to_string(),
            endpoint_key: endpoint_key.to_string(),
            endpoint: endpoint_url,
        })
    }
}

fn check_not_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrchestrationError::MissingSetting(name).into());
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerOptions {
    pub application: OrchestrationApplication,
    pub language: Option<String>,
}

impl RecognizerOptions {
    pub fn new(application: OrchestrationApplication) -> Self {
        Self {
            application,
            language: Some(DEFAULT_LANGUAGE.to_string()),
        }
    }

    pub fn language<S: Into<String>>(mut self, language: Option<S>) -> Self {
        self.language = language.map(|l| l.into());
        self
    }
}
