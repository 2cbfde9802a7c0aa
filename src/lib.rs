pub mod config;
pub mod credentials;
pub mod exit;
pub mod github;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod publish;
pub mod report;
