use micro_kit::cond::{may, then};
use micro_kit::must::{Fatal, Message, TracingLogger, must_call, set_logger};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn read_port(raw: &str) -> Result<u16, std::num::ParseIntError> {
    raw.parse()
}

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    set_logger(Some(Arc::new(TracingLogger)));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let raw = args.first().map_or("8080", String::as_str);

    may(args.is_empty(), Some(|| info!("no port given, using default")), Some(|| info!(raw, "port given")));

    let result = Fatal::catch(|| must_call(read_port, (raw,), Message::format("invalid port {}: {}", [raw])));

    then(result.is_ok())
        .run(Some(|| info!(port = ?result.as_ref().ok(), "port accepted")))
        .otherwise(Some(|| info!(cause = ?result.as_ref().err().map(Fatal::message), "port rejected")));
}
