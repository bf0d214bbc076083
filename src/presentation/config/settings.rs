/// All configuration is environment-derived; deploy targets inject env
/// vars rather than config files.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub google_cloud: GoogleCloudSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub environment: String,
    pub json_format: bool,
}

#[derive(Debug, Clone)]
pub struct GoogleCloudSettings {
    pub project_id: String,
    pub location: String,
    pub docai_processor_id: String,
    /// Inline service-account JSON, for platforms without a filesystem
    /// secret mount. Takes precedence over `credentials_path`.
    pub credentials_json: Option<String>,
    pub credentials_path: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            llm: LlmSettings {
                api_key: env_or("GEMINI_API_KEY", ""),
                model: env_or("GEMINI_MODEL", "gemini-1.5-flash-latest"),
                temperature: std::env::var("GEMINI_TEMPERATURE")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(0.1),
            },
            google_cloud: GoogleCloudSettings {
                project_id: env_or("GOOGLE_CLOUD_PROJECT_ID", ""),
                location: env_or("DOCAI_LOCATION", "us"),
                docai_processor_id: env_or("DOCAI_PROCESSOR_ID", ""),
                credentials_json: std::env::var("GOOGLE_APPLICATION_CREDENTIALS_JSON").ok(),
                credentials_path: std::env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
            },
            logging: LoggingSettings {
                environment: env_or("APP_ENV", "development"),
                json_format: std::env::var("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
