use super::ApplicationEnv;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

///
/// Installs console and rolling file logging as the global subscriber.
///
/// Returned guard flushes the log file when dropped, keep it alive until exit.
///
pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<WorkerGuard> {
    let (subscriber, guard) = create_subscriber(env)?;
    subscriber.try_init()?;

    Ok(guard)
}

fn create_subscriber(
    env: &ApplicationEnv,
) -> anyhow::Result<(impl Subscriber + Send + Sync + 'static, WorkerGuard)> {
    // RUST_LOG directives override the configured level on the console
    let console_filter = EnvFilter::builder()
        .with_default_directive(env.log_level.into())
        .from_env()?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(console_filter);

    let file_appender = tracing_appender::rolling::hourly(&env.log_directory, &env.log_filename);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(env.log_level);

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer);

    Ok((subscriber, guard))
}
