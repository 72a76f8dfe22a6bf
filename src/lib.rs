pub mod config;
pub mod filter;
pub mod http;
pub mod model;
pub mod pipeline;
pub mod policy;
pub mod prompt;
pub mod types;
pub mod validator;
