//! Geoviz scene demo: places a few lines and circles and prints every
//! intersection.
//!
//! Usage:
//! ```text
//! cargo run --example scene
//! RUST_LOG=geoviz=trace cargo run --example scene
//! ```

use geoviz::geometry::{Circle, Line};
use geoviz::math::{round2, Point2};
use geoviz::operations::query::{AllIntersections, Intersection};
use geoviz::scene::Scene;

fn main() -> geoviz::Result<()> {
    // Default: WARN for everything, INFO for geoviz.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoviz=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("scene=info".parse().unwrap_or_default())
        .add_directive("geoviz=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut scene = Scene::new();
    scene.add_line(Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0))?);
    scene.add_line(Line::new(Point2::new(0.0, 4.0), Point2::new(4.0, 0.0))?);
    scene.add_line(Line::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0))?);
    scene.add_circle(Circle::new(Point2::origin(), 5.0)?);
    scene.add_circle(Circle::through(
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 5.0),
    )?);

    for (_, line) in scene.lines() {
        println!("line   {line}");
    }
    for (_, circle) in scene.circles() {
        println!("circle {circle}");
    }

    for hit in AllIntersections::new().execute(&scene) {
        match &hit.result {
            Intersection::Identical => println!("{:?}: identical", hit.pair),
            Intersection::Points(points) => {
                for p in points {
                    println!("{:?}: ({}, {})", hit.pair, round2(p.x), round2(p.y));
                }
            }
            Intersection::None => {}
        }
    }
    Ok(())
}
