//! Secure credential handling using the secrecy crate
//!
//! API keys for the remote analyzer are held in `Secret<SecretValue>`:
//! memory is zeroed on drop and Debug output is redacted, so a key can't
//! end up in logs or crash dumps. Call `expose_secret()` at the single
//! point of use.

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

/// Secret string type used throughout the configuration
pub type SecretString = Secret<SecretValue>;

/// Build a [`SecretString`] from a plain string
pub fn secret_string(value: impl Into<String>) -> SecretString {
    Secret::new(SecretValue(value.into()))
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_redacted_in_debug() {
        let secret = secret_string("api-key-123");
        let debug = format!("{secret:?}");
        assert!(!debug.contains("api-key-123"));
    }

    #[test]
    fn test_expose_secret() {
        let secret = secret_string("api-key-123");
        assert_eq!(secret.expose_secret().as_ref(), "api-key-123");
        assert!(!secret.expose_secret().is_empty());
    }

    #[test]
    fn test_secret_deserializes_from_toml() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            key: SecretString,
        }

        let wrapper: Wrapper = toml::from_str(r#"key = "hush""#).unwrap();
        assert_eq!(wrapper.key.expose_secret().as_ref(), "hush");
    }
}
