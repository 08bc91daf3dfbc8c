use std::fmt;
use std::path::PathBuf;

pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Where the service is running. Only affects log output today: production
/// logs JSON, everything else logs human-readable lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Result<Self, SettingsError> {
        match raw.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Production),
            other => Err(SettingsError::InvalidEnvironment(other.to_string())),
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Test => "test",
            Self::Production => "production",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub uploads: UploadSettings,
    pub presentation: PresentationSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub root: PathBuf,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct PresentationSettings {
    pub placeholder_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("GOOGLE_API_KEY must be set")]
    MissingApiKey,
    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
    #[error("unrecognized APP_ENVIRONMENT: {0} (expected local, test, or prod)")]
    InvalidEnvironment(String),
}

impl Settings {
    /// Reads configuration from the environment once at startup. The API key
    /// is required; everything else has a default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(SettingsError::MissingApiKey)?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidPort(raw))?,
            Err(_) => 5001,
        };

        let environment = match std::env::var("APP_ENVIRONMENT") {
            Ok(raw) => Environment::parse(&raw)?,
            Err(_) => Environment::Local,
        };

        Ok(Self {
            environment,
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            llm: LlmSettings {
                api_key,
                model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string()),
            },
            uploads: UploadSettings {
                root: std::env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("uploaded_files")),
                max_body_bytes: MAX_UPLOAD_BYTES,
            },
            presentation: PresentationSettings {
                placeholder_path: std::env::var("PRESENTATION_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("sample_presentation.pptx")),
            },
        })
    }
}
