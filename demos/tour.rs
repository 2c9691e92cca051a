//! Walks through the public value types.
//!
//! Usage:
//! ```text
//! cargo run --example tour
//! RUST_LOG=prophecy=trace cargo run --example tour
//! ```

use prophecy::{
    GameConfig, KeyValueStore, Matrix, MemoryStorage, Point, ProphecyError, Rect, Vector2d,
    Vector3d, ENGINE_NAME, ENGINE_VERSION,
};

fn main() -> Result<(), ProphecyError> {
    // Default: WARN for everything, INFO for this demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=prophecy=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tour=info".parse().unwrap_or_default())
        .add_directive("prophecy=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("{ENGINE_NAME} {ENGINE_VERSION}");

    let config = GameConfig::default().with_background_color(0x1d_1d_1d);
    tracing::info!(?config, surface = ?config.surface(), "game surface");

    let mut point = Point::default();
    point.set(300.0, None);
    let mut rect = Rect::default();
    rect.set(5.0, 10.0, 200.0, None);
    tracing::info!(?point, ?rect, "geometry");

    let a = Vector2d::new(6.0, 3.0);
    let b = Vector2d::new(10.0, 12.0);
    tracing::info!(
        distance = a.distance_to(&b),
        dot = a.dot(&b),
        degrees = a.degrees(),
        "vector2d"
    );

    let mut v = Vector3d::new(2.0, 3.0, 4.0);
    v.multiply(2.0).add(Vector3d::new(1.0, 1.0, 1.0));
    tracing::info!(
        ?v,
        magnitude = v.magnitude(),
        unit = ?v.normalize(),
        "vector3d"
    );

    let mut m = Matrix::new(2, 2, 4.0);
    m.add(2.0)?.set_value(0, 1, -1.0)?;
    tracing::info!(rows = ?m.to_rows(), "matrix");

    if let Err(err) = m.add(&Matrix::new(2, 3, 2.0)) {
        tracing::warn!(%err, "expected shape mismatch");
    }

    let mut store = MemoryStorage::new();
    store.set("highscore", "1200");
    tracing::info!(
        highscore = ?store.get("highscore"),
        missing = ?store.get("lives"),
        "storage"
    );

    Ok(())
}
