use sendflare_client::utils::logger::setup_logger;
use tracing::info;

#[test]
fn setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
    info!("logger installed");
}
