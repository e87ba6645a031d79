use anyhow::anyhow;
use tracing::level_filters::LevelFilter;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    pub log_level: LevelFilter,

    pub max_tickets_per_purchase: u32,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("CINEMA_TICKETS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("CINEMA_TICKETS_LOG_FILENAME")?;
        let log_level = Self::parse_log_level(&Self::env_var("CINEMA_TICKETS_LOG_LEVEL")?)?;
        let max_tickets_per_purchase =
            Self::env_var("CINEMA_TICKETS_MAX_TICKETS_PER_PURCHASE")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            log_level,
            max_tickets_per_purchase,
        })
    }

    fn parse_log_level(value: &str) -> anyhow::Result<LevelFilter> {
        value
            .parse()
            .map_err(|_| anyhow!("invalid log level {value}"))
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
