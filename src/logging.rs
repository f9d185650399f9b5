use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;

/// File and terminal logging for the backend.
///
/// Off by default: the host application owns the process-wide subscriber. When
/// enabled, the backend installs one only if none is set yet.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    pub logging_enabled: bool,
    pub logger_name: String,
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            logging_enabled: false,
            logger_name: "pxmonitor_llm".to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Installs the process-wide subscriber. A subscriber that is already installed
    /// (by an earlier backend or by the host application) is left in place.
    ///
    /// Never fails: if the log directory is unusable, only the stdout layer is installed.
    pub(crate) fn load_logger(&self) {
        if !self.logging_enabled {
            return;
        }
        let subscriber = self.create_logger();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            crate::debug!("Global subscriber already set; keeping it");
        } else {
            crate::info!("Started {} logger", self.logger_name);
        }
    }

    fn resolved_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.to_owned(),
            None => std::env::temp_dir().join("pxmonitor_logs"),
        }
    }

    fn file_appender(&self) -> crate::Result<RollingFileAppender> {
        let log_dir = self.resolved_log_dir();

        if !Path::new(&log_dir).exists() {
            create_dir_all(&log_dir).map_err(|e| {
                crate::anyhow!("Failed to create log directory {}: {e}", log_dir.display())
            })?;
        }

        Ok(RollingFileAppender::builder()
            .rotation(Rotation::HOURLY)
            .max_log_files(6)
            .filename_prefix(&self.logger_name)
            .filename_suffix("log")
            .build(log_dir)?)
    }

    fn create_logger(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let file_appender = match self.file_appender() {
            Ok(appender) => Some(appender),
            Err(e) => {
                eprintln!("{}: file logging disabled: {e}", self.logger_name);
                None
            }
        };

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.level.into())
            .parse_lossy("");

        let file_layer = file_appender.map(|appender| {
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_ansi(false)
                .with_writer(appender)
        });

        let terminal_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(std::io::stdout);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(terminal_layer)
    }
}

pub trait LoggingConfigTrait {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig;

    /// Turns on file and stdout logging. Off by default.
    fn logging_enabled(mut self, enabled: bool) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logging_enabled = enabled;
        self
    }

    fn logger_name<S: Into<String>>(mut self, logger_name: S) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logger_name = logger_name.into();
        self
    }

    /// Directory for the rolling log files. Defaults to `pxmonitor_logs` in the system temp dir.
    fn log_dir<P: Into<PathBuf>>(mut self, log_dir: P) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().log_dir = Some(log_dir.into());
        self
    }

    /// Sets the log level to TRACE.
    ///
    /// Serialized request and response bodies are logged at this level.
    fn log_level_trace(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::TRACE;
        self
    }

    /// Sets the log level to DEBUG.
    fn log_level_debug(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::DEBUG;
        self
    }

    /// Sets the log level to INFO.
    fn log_level_info(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::INFO;
        self
    }

    /// Sets the log level to WARN.
    fn log_level_warn(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::WARN;
        self
    }

    /// Sets the log level to ERROR.
    ///
    /// Failed relays are logged at this level, so this keeps only the diagnostics
    /// for requests that fell back.
    fn log_level_error(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::ERROR;
        self
    }
}
