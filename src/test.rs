use log::LevelFilter;

/// Routes `log` output of this crate to the test harness.
///
/// `RUST_LOG` overrides the default level.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .is_test(true)
        .parse_default_env()
        .try_init()
        .ok();
}
