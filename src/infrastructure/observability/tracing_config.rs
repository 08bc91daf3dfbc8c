use crate::presentation::config::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Plain,
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub format: LogFormat,
}

impl TracingConfig {
    /// Production logs JSON for ingestion; local and test runs get
    /// human-readable lines.
    pub fn for_environment(environment: Environment) -> Self {
        let format = if environment.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Plain
        };
        Self {
            environment,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_logs_json_everything_else_plain() {
        assert_eq!(
            TracingConfig::for_environment(Environment::Production).format,
            LogFormat::Json
        );
        assert_eq!(
            TracingConfig::for_environment(Environment::Local).format,
            LogFormat::Plain
        );
        assert_eq!(
            TracingConfig::for_environment(Environment::Test).format,
            LogFormat::Plain
        );
    }
}
