//! iss-pass - Next ISS passes over your current location
//!
//! This is the composition root that wires together all the components.

use iss_pass::adapters::inbound::print_pass_times;
use iss_pass::adapters::outbound::{
    IpVigilanteResolver, IpifyResolver, OpenNotifyResolver, ReqwestTransport,
};
use iss_pass::application::PassTimeService;
use iss_pass::config::load_config;
use iss_pass::domain::ports::HttpTransport;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "looking up ISS passes (ip={} geo={} passes={})",
        cfg.ip_endpoint,
        cfg.geo_endpoint,
        cfg.pass_endpoint
    );

    // ===== COMPOSITION ROOT =====

    // 1. Shared HTTP transport
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(cfg.http_timeout())?);

    // 2. Outbound adapters, one per upstream API
    let ip_resolver = Arc::new(IpifyResolver::new(transport.clone(), cfg.ip_url()?));
    let geo_resolver = Arc::new(IpVigilanteResolver::new(transport.clone(), cfg.geo_url()?)?);
    let pass_time_resolver = Arc::new(OpenNotifyResolver::new(transport, cfg.pass_url()?));

    // 3. Application service
    let service = PassTimeService::new(ip_resolver, geo_resolver, pass_time_resolver);

    // 4. Run one lookup and print the result
    match service.next_pass_times_for_current_location().await {
        Ok(passes) => {
            let stdout = std::io::stdout();
            print_pass_times(&mut stdout.lock(), &passes)?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("It didn't work! stage={} error={}", e.stage(), e);
            Err(e.into())
        }
    }
}
