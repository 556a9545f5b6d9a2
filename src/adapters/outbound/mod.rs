mod ipify_resolver;
mod ipvigilante_resolver;
mod json_fetch;
mod open_notify_resolver;
mod reqwest_transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use ipify_resolver::IpifyResolver;
pub use ipvigilante_resolver::IpVigilanteResolver;
pub use open_notify_resolver::OpenNotifyResolver;
pub use reqwest_transport::ReqwestTransport;
