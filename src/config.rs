use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub gmail: Option<GmailConfig>,
    pub fetch: FetchConfig,
    /// Optional JSON file overriding the analyzer keyword tables
    pub keywords_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GmailConfig {
    pub credentials_path: String,
    pub token_cache_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub hours: u32,
    pub max_results: u32,
    pub body_max_chars: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            hours: 24,
            max_results: 100,
            body_max_chars: 1000,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        let defaults = FetchConfig::default();

        // Configuration chargée depuis les variables d'environnement
        Ok(Config {
            gmail: match std::env::var("GMAIL_CREDENTIALS_PATH") {
                Ok(credentials_path) => Some(GmailConfig {
                    credentials_path,
                    token_cache_path: std::env::var("GMAIL_TOKEN_CACHE_PATH")
                        .unwrap_or_else(|_| "./gmail-token-cache.json".to_string()),
                }),
                Err(_) => {
                    log::debug!("GMAIL_CREDENTIALS_PATH non défini - seule l'analyse de fichiers est possible");
                    None
                }
            },
            fetch: FetchConfig {
                hours: env_or("FETCH_HOURS", defaults.hours),
                max_results: env_or("FETCH_MAX_RESULTS", defaults.max_results),
                body_max_chars: env_or("BODY_MAX_CHARS", defaults.body_max_chars),
            },
            keywords_path: std::env::var("ANALYZER_KEYWORDS_PATH").ok(),
        })
    }

    /// Gmail settings, or an explanation of how to provide them
    pub fn require_gmail(&self) -> Result<&GmailConfig> {
        match &self.gmail {
            Some(gmail) => Ok(gmail),
            None => anyhow::bail!(
                "Variables d'environnement manquantes: GMAIL_CREDENTIALS_PATH\n\
                 \n\
                 💡 Solutions :\n\
                 1. Créer un fichier .env avec vos credentials :\n\
                    GMAIL_CREDENTIALS_PATH=/path/to/client_credentials.json\n\
                    GMAIL_TOKEN_CACHE_PATH=./gmail-token-cache.json\n\
                 \n\
                 2. Ou analyser un export JSON sans Gmail :\n\
                    smartinbox --input emails.json"
            ),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("Valeur invalide pour {}: '{}', valeur par défaut utilisée", name, value);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_defaults() {
        let fetch = FetchConfig::default();
        assert_eq!(fetch.hours, 24);
        assert_eq!(fetch.max_results, 100);
        assert_eq!(fetch.body_max_chars, 1000);
    }

    #[test]
    fn test_env_or_falls_back_on_missing_and_invalid() {
        assert_eq!(env_or("SMARTINBOX_TEST_UNSET_VAR", 7u32), 7);

        std::env::set_var("SMARTINBOX_TEST_INVALID_VAR", "abc");
        assert_eq!(env_or("SMARTINBOX_TEST_INVALID_VAR", 3u32), 3);

        std::env::set_var("SMARTINBOX_TEST_VALID_VAR", " 48 ");
        assert_eq!(env_or("SMARTINBOX_TEST_VALID_VAR", 24u32), 48);
    }

    #[test]
    fn test_require_gmail_without_credentials() {
        let config = Config {
            gmail: None,
            fetch: FetchConfig::default(),
            keywords_path: None,
        };
        assert!(config.require_gmail().is_err());
    }
}
