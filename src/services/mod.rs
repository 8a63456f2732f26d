pub(crate) mod config;
pub(crate) mod contract;
pub(crate) mod http;
pub(crate) mod profile;
pub(crate) mod records;
