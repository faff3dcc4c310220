mod concurrency;
mod config_io;
mod scenarios;
mod service;
