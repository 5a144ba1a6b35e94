//! Tilequest Engine - headless bootstrap
//!
//! Loads configuration, merges external database tables over the built-ins,
//! validates every map grid, and restores (or starts) a session. A host
//! front-end embeds the library crate and drives the same services from its
//! own loop; this binary exists to exercise the full startup path.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilequest_engine::application::services::{SaveStore, WorldGraph, WorldService};
use tilequest_engine::domain::entities::GameData;
use tilequest_engine::domain::value_objects::Point;
use tilequest_engine::infrastructure::config::AppConfig;
use tilequest_engine::infrastructure::persistence::{
    merge_from_source, DatabaseDirectory, FileSaveStorage,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilequest_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tilequest Engine");

    // Load configuration
    let config = AppConfig::from_env();
    tracing::info!("  Save dir: {}", config.save_dir.display());
    tracing::info!("  Database dir: {}", config.database_dir.display());

    // Static data: built-ins first, external tables merged over them
    let mut data = GameData::with_builtins();
    let database = DatabaseDirectory::new(&config.database_dir);
    merge_from_source(&database, &mut data);
    tracing::info!(
        items = data.items.len(),
        skills = data.skills.len(),
        enemies = data.enemies.len(),
        events = data.events.len(),
        "static data loaded"
    );

    // A malformed map grid is a build defect; refuse to run on one.
    let mut graph = WorldGraph::with_builtin_maps();
    graph.validate_all()?;

    // Restore the previous session, or start fresh
    let storage = FileSaveStorage::new(&config.save_dir);
    let mut saves = SaveStore::new(Box::new(storage));
    if saves.load() {
        tracing::info!(map = %saves.current().map_id, "session restored");
    } else {
        saves.reset_to_new_game();
        tracing::info!("new game started");
    }

    let snapshot = saves.current().clone();
    let mut world = WorldService::new(graph, snapshot.map())?;
    world.place(
        snapshot.map(),
        Point::new(snapshot.tile_x, snapshot.tile_y),
    )?;
    tracing::info!(
        map = %world.current_map(),
        x = world.position().x,
        y = world.position().y,
        "world ready"
    );

    Ok(())
}
