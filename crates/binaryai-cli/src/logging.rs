/// Environment variable holding the log filter, e.g. `BINARYAI_LOG=debug`.
pub(crate) const LOG_ENV: &str = "BINARYAI_LOG";

pub(crate) fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
