mod geo_resolver;
mod http_transport;
mod ip_resolver;
mod pass_time_resolver;

pub use geo_resolver::GeoResolver;
pub use http_transport::{HttpResponse, HttpTransport};
pub use ip_resolver::IpResolver;
pub use pass_time_resolver::PassTimeResolver;
