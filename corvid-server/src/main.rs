#[macro_use] extern crate rocket;

mod error;
mod handlers;
mod messages;
mod state;

use std::sync::Mutex;
use std::time::Duration;

use rocket::serde::Deserialize;

use state::GameSession;

/// Engine-level defaults pulled from the `engine` table in `Rocket.toml` (or
/// the matching `ROCKET_ENGINE_*` env vars), used when a request omits them.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct EngineDefaults {
    pub default_depth: u8,
    pub default_time_limit_secs: u64,
}

impl EngineDefaults {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.default_time_limit_secs)
    }
}

#[launch]
fn run() -> _ {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Initialize the random values for the zobrist keys that
    // the board uses before launching the server
    corvid_core::init_zobrist_keys();

    let rocket = rocket::build();
    let engine_defaults: EngineDefaults = rocket
        .figment()
        .extract_inner("engine")
        .unwrap_or(EngineDefaults { default_depth: 10, default_time_limit_secs: 20 });

    rocket
        .mount("/", handlers::get_routes())
        .manage(Mutex::new(None::<GameSession>))
        .manage(engine_defaults)
}
