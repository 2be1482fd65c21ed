//! Infrastructure layer - ports and the adapters behind them.

pub mod clock;
pub mod http_client;
pub mod json_host;
pub mod ports;
pub mod random_org;
pub mod settings;
