// civic-portal library: store selection and the non-interactive commands
pub mod commands;
pub mod config;
