use std::env;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable selecting the deployment mode. Recognized values
/// are exactly `cloud` and `self-hosted`; anything else falls through to
/// the default.
pub const MODE_ENV: &str = "DEPLOYMENT_MODE";

/// Environment variable naming the SMTP host. Non-empty means outbound
/// email is configured.
pub const SMTP_HOST_ENV: &str = "SMTP_HOST";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentMode {
    Cloud,
    SelfHosted,
}

impl DeploymentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentMode::Cloud => "cloud",
            DeploymentMode::SelfHosted => "self-hosted",
        }
    }

    /// Parse one of the two recognized literals.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cloud" => Some(DeploymentMode::Cloud),
            "self-hosted" => Some(DeploymentMode::SelfHosted),
            _ => None,
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazily-resolved deployment mode, cached for the process lifetime.
///
/// The mode is read from the environment on first access and never again:
/// production environments restart the process on configuration change, so
/// a sticky value is the intended behavior. Ownership is explicit; the
/// hosting application holds one resolver for the whole process.
///
/// [`reset_cache`](DeploymentResolver::reset_cache) exists for test
/// isolation only.
#[derive(Debug)]
pub struct DeploymentResolver {
    cached: Mutex<Option<DeploymentMode>>,
}

impl DeploymentResolver {
    pub const fn new() -> Self {
        DeploymentResolver {
            cached: Mutex::new(None),
        }
    }

    /// Resolve (once) and return the deployment mode.
    pub fn mode(&self) -> DeploymentMode {
        let mut cached = self.lock();
        *cached.get_or_insert_with(resolve_from_env)
    }

    pub fn is_cloud(&self) -> bool {
        self.mode() == DeploymentMode::Cloud
    }

    pub fn is_self_hosted(&self) -> bool {
        self.mode() == DeploymentMode::SelfHosted
    }

    /// Whether an SMTP host is configured.
    ///
    /// Read live on every call, unlike the mode: this answers for the
    /// environment as it is right now.
    pub fn is_email_configured(&self) -> bool {
        env::var(SMTP_HOST_ENV).map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Drop the cached mode so the next [`mode`](DeploymentResolver::mode)
    /// call re-resolves. Test isolation only.
    pub fn reset_cache(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<DeploymentMode>> {
        // A poisoned lock still holds a valid value; recover it.
        self.cached.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for DeploymentResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_from_env() -> DeploymentMode {
    let mode = env::var(MODE_ENV)
        .ok()
        .and_then(|v| DeploymentMode::parse(&v))
        .unwrap_or(DeploymentMode::SelfHosted);

    debug!(mode = mode.as_str(), "deployment mode resolved");
    mode
}
