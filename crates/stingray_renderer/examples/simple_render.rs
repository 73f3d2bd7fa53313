//! Simple ray tracer example.
//!
//! Renders a mirror ball, a bitten sphere, and a checkered floor, and saves
//! the result as PNG.

use std::sync::Arc;

use stingray_renderer::{
    AntiAlias, Camera, CheckerTexture, Colour, CsgDifference, Finish, Light, PlainTexture, Plane,
    RenderConfig, Sphere, Stage, TraceResult, Vector,
};

fn main() -> TraceResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Stingray - Simple Example");
    println!("=========================");

    let start = std::time::Instant::now();
    let stage = build_stage()?;
    println!("Stage built in {:?}", start.elapsed());

    let config = RenderConfig {
        antialias: AntiAlias::Quad,
        ..RenderConfig::default()
    };

    let rendering = stage.render_with("simple", 640, 480, &config)?;
    println!("{}", rendering.statistics());

    let filename = "output.png";
    rendering.save_png(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_stage() -> TraceResult<Stage> {
    let camera = Camera::new(Vector::new(0.0, 60.0, -200.0), Vector::new(0.0, 20.0, 100.0))?;
    let mut stage = Stage::new(camera);

    // Floor
    let floor = CheckerTexture::new(
        Arc::new(PlainTexture::new(Colour::WHITE, Finish::MATTE)),
        Arc::new(PlainTexture::new(Colour::DARK_GREY, Finish::MATTE)),
        50.0,
    );
    stage.add_geometry(Box::new(Plane::new(Vector::Y, -40.0, Arc::new(floor))?));

    // Mirror ball
    stage.add_geometry(Box::new(Sphere::new(
        Vector::new(-60.0, 20.0, 150.0),
        60.0,
        Arc::new(PlainTexture::new(Colour::WHITE, Finish::MIRROR)),
    )));

    // Red sphere with a bite taken out of the side facing the camera
    let red = Arc::new(PlainTexture::new(Colour::RED, Finish::SHINY));
    stage.add_geometry(Box::new(CsgDifference::new(
        Box::new(Sphere::new(Vector::new(70.0, 0.0, 60.0), 40.0, red.clone())),
        Box::new(Sphere::new(Vector::new(55.0, 15.0, 25.0), 25.0, red.clone())),
        red,
    )));

    stage.add_light(Light::new(Vector::new(-200.0, 300.0, -100.0), Colour::WHITE));
    stage.add_light(Light::new(Vector::new(200.0, 100.0, -50.0), Colour::GREY));

    Ok(stage)
}
