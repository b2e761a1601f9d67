mod app;
mod catalog;
mod config;
mod error;
mod query;
mod runtime;
mod session;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
