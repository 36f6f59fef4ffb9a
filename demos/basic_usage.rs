//! Basic usage example for Vector
//!
//! Builds two axis vectors and shows the right-hand rule for the cross
//! product. Set `RUST_LOG=trace` to also see the library's trace events.

use tinygeo::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // RUST_LOG wins when set; otherwise INFO.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let right: Vector3<f32> = Vector::new([1.0, 0.0, 0.0]); // X axis
    let forward: Vector3<f32> = Vector::new([0.0, 1.0, 0.0]); // Y axis

    // right-hand rule: X cross Y = Z
    let up = cross(&right, &forward);

    tracing::info!("Right:    {right}");
    tracing::info!("Forward:  {forward}");
    tracing::info!("Up (RxF): {up} (Expected: [0, 0, 1])");

    // anticommutativity
    let down = cross(&forward, &right);
    tracing::info!("Down (FxR): {down} (Expected: [0, 0, -1])");

    let degenerate = Vector3::<f32>::splat(1e-10).normalized();
    tracing::info!("Normalized near-zero vector: {degenerate}");

    // Does not build: cross is only defined for 3D vectors.
    //
    // let a: Vector2<f32> = Vector::new([1.0, 2.0]);
    // let b: Vector2<f32> = Vector::new([3.0, 4.0]);
    // let c = cross(&a, &b);
}
