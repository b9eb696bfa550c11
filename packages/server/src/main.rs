#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Kenya elections dashboard API server.
//!
//! Reads document locations from `KENYA_ELECTIONS_DATA_DIR` and the
//! per-document overrides.

use kenya_elections_data::DataPaths;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    kenya_elections_server::run_server(DataPaths::from_env()).await
}
