//! Individual system checks

mod bindings;
mod config;
mod provider;
mod system_info;

pub use bindings::BindingsCheck;
pub use config::ConfigCheck;
pub use provider::ProviderCheck;
pub use system_info::SystemInfoCheck;
