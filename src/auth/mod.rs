//! Hosted identity provider gate
//!
//! The auth screen either mounts the hosted provider (Clerk) or, when no
//! publishable key is configured, shows setup instructions. No sign-in
//! logic lives here: the provider is described by its key and routes and
//! the user is sent to the hosted pages in their browser.
//!
//! # Key lookup
//!
//! 1. `auth.publishable_key` in the config file, which the
//!    `INSPECTOR_AUTH__PUBLISHABLE_KEY` environment variable overrides
//! 2. `CLERK_PUBLISHABLE_KEY`

mod error;

pub use error::{AuthError, Result};

use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use serde::{Deserialize, Serialize};
use url::Url;

/// Conventional environment variable holding the publishable key
pub const PUBLISHABLE_KEY_ENV: &str = "CLERK_PUBLISHABLE_KEY";

/// Sample `.env` line shown in the setup instructions
pub const ENV_SAMPLE: &str = "CLERK_PUBLISHABLE_KEY=YOUR_PUBLISHABLE_KEY";

/// Where to get a key, shown in the setup instructions
pub const DASHBOARD_URL: &str = "https://dashboard.clerk.com/last-active?path=api-keys";

/// Setup steps shown when no key is configured
pub const SETUP_STEPS: [&str; 4] = [
    "In the Clerk Dashboard, navigate to the API keys page.",
    "In the Quick Copy section, copy your Clerk Publishable Key.",
    "Rename .env.example to .env",
    "Paste your key into your .env file.",
];

/// Identity provider settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthSettings {
    /// Publishable key of the hosted instance
    pub publishable_key: Option<String>,
    /// Base URL that relative routes resolve against
    pub app_url: String,
    /// Sign-in route
    pub sign_in_url: String,
    /// Sign-up route
    pub sign_up_url: String,
    /// Where to land after signing out
    pub after_sign_out_url: String,
    /// Where to land after signing in when no redirect was requested
    pub sign_in_fallback_redirect_url: String,
    /// Where to land after signing up when no redirect was requested
    pub sign_up_fallback_redirect_url: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            publishable_key: None,
            app_url: "http://localhost:5173".to_string(),
            sign_in_url: "/clerk/sign-in".to_string(),
            sign_up_url: "/clerk/sign-up".to_string(),
            after_sign_out_url: "/clerk/sign-in".to_string(),
            sign_in_fallback_redirect_url: "/clerk/user-management".to_string(),
            sign_up_fallback_redirect_url: "/clerk/user-management".to_string(),
        }
    }
}

impl AuthSettings {
    /// Resolve the publishable key from the settings, then `lookup`
    ///
    /// Blank values count as missing.
    pub fn resolve_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let non_blank = |key: String| {
            let key = key.trim();
            (!key.is_empty()).then(|| key.to_string())
        };
        self.publishable_key
            .clone()
            .and_then(non_blank)
            .or_else(|| lookup(PUBLISHABLE_KEY_ENV).and_then(non_blank))
    }

    /// Resolve a configured route against `app_url`
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidRoute` if either URL cannot be parsed.
    pub fn resolve_route(&self, route: &str) -> Result<Url> {
        let invalid = |source| AuthError::InvalidRoute {
            route: route.to_string(),
            source,
        };
        let base = Url::parse(&self.app_url).map_err(invalid)?;
        base.join(route).map_err(invalid)
    }
}

/// Instance type encoded in the key prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInstance {
    /// `pk_test_` development instance
    Test,
    /// `pk_live_` production instance
    Live,
}

impl KeyInstance {
    /// Label for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "development",
            Self::Live => "production",
        }
    }
}

/// A decoded publishable key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishableKey {
    raw: String,
    instance: KeyInstance,
    frontend_api: String,
}

impl PublishableKey {
    /// Decode a key of the form `pk_(test|live)_<base64("<host>$")>`
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedKey` for an unknown prefix and
    /// `AuthError::InvalidPayload` when the payload does not decode to a
    /// `$`-terminated host.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (instance, payload) = if let Some(rest) = raw.strip_prefix("pk_test_") {
            (KeyInstance::Test, rest)
        } else if let Some(rest) = raw.strip_prefix("pk_live_") {
            (KeyInstance::Live, rest)
        } else {
            return Err(AuthError::MalformedKey(redact(raw)));
        };

        let bytes = STANDARD_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::InvalidPayload(e.to_string()))?;
        let decoded = String::from_utf8(bytes)
            .map_err(|_| AuthError::InvalidPayload("payload is not UTF-8".to_string()))?;

        let frontend_api = decoded
            .strip_suffix('$')
            .filter(|host| !host.is_empty() && !host.contains('$'))
            .ok_or_else(|| AuthError::InvalidPayload("missing frontend API host".to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            instance,
            frontend_api: frontend_api.to_string(),
        })
    }

    /// Instance type
    #[must_use]
    pub const fn instance(&self) -> KeyInstance {
        self.instance
    }

    /// Frontend API host encoded in the key
    #[must_use]
    pub fn frontend_api(&self) -> &str {
        &self.frontend_api
    }

    /// Key with the payload elided, safe for display
    #[must_use]
    pub fn redacted(&self) -> String {
        redact(&self.raw)
    }
}

fn redact(raw: &str) -> String {
    let visible: String = raw.chars().take(12).collect();
    if visible.len() < raw.len() {
        format!("{visible}…")
    } else {
        visible
    }
}

/// A hosted identity provider the app can hand users to
pub trait IdentityProvider {
    /// Provider name for display
    fn name(&self) -> &'static str;

    /// Hosted sign-in page
    ///
    /// # Errors
    ///
    /// Returns an error if the route cannot be resolved.
    fn sign_in_url(&self) -> Result<Url>;

    /// Hosted sign-up page
    ///
    /// # Errors
    ///
    /// Returns an error if the route cannot be resolved.
    fn sign_up_url(&self) -> Result<Url>;
}

/// Clerk, mounted with a validated publishable key
#[derive(Debug, Clone)]
pub struct ClerkProvider {
    key: PublishableKey,
    settings: AuthSettings,
}

impl ClerkProvider {
    /// Mount the provider
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be decoded.
    pub fn mount(key: &str, settings: AuthSettings) -> Result<Self> {
        let key = PublishableKey::parse(key)?;
        log::info!(
            "mounted Clerk {} instance at {}",
            key.instance().as_str(),
            key.frontend_api()
        );
        Ok(Self { key, settings })
    }

    /// The decoded key
    #[must_use]
    pub const fn key(&self) -> &PublishableKey {
        &self.key
    }

    /// Route settings in effect
    #[must_use]
    pub const fn settings(&self) -> &AuthSettings {
        &self.settings
    }

    /// Configured routes as `(label, route)` pairs for display
    #[must_use]
    pub fn routes(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Sign in", self.settings.sign_in_url.as_str()),
            ("Sign up", self.settings.sign_up_url.as_str()),
            ("After sign out", self.settings.after_sign_out_url.as_str()),
            (
                "Sign-in fallback",
                self.settings.sign_in_fallback_redirect_url.as_str(),
            ),
            (
                "Sign-up fallback",
                self.settings.sign_up_fallback_redirect_url.as_str(),
            ),
        ]
    }

    /// Open the sign-in page in the system browser
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be resolved or the browser
    /// cannot be launched.
    pub fn open_sign_in(&self) -> Result<Url> {
        let url = self.sign_in_url()?;
        open::that(url.as_str())?;
        Ok(url)
    }
}

impl IdentityProvider for ClerkProvider {
    fn name(&self) -> &'static str {
        "Clerk"
    }

    fn sign_in_url(&self) -> Result<Url> {
        self.settings.resolve_route(&self.settings.sign_in_url)
    }

    fn sign_up_url(&self) -> Result<Url> {
        self.settings.resolve_route(&self.settings.sign_up_url)
    }
}

/// What the auth screen shows
#[derive(Debug, Clone)]
pub enum AuthGate {
    /// Provider mounted with a valid key
    Mounted(ClerkProvider),
    /// No key configured; show setup instructions
    MissingKey,
}

impl AuthGate {
    /// Decide between mounting and showing instructions
    ///
    /// # Errors
    ///
    /// Returns an error if a key is present but malformed.
    pub fn resolve(settings: &AuthSettings, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match settings.resolve_key(lookup) {
            Some(key) => ClerkProvider::mount(&key, settings.clone()).map(Self::Mounted),
            None => {
                log::debug!("no publishable key configured");
                Ok(Self::MissingKey)
            }
        }
    }

    /// Decide using the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a key is present but malformed.
    pub fn from_env(settings: &AuthSettings) -> Result<Self> {
        Self::resolve(settings, |name| std::env::var(name).ok())
    }

    /// Whether the provider is mounted
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted(_))
    }
}
