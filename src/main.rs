//! Replays a recorded gesture script through the arcball and logs the
//! resulting transform.

use std::path::Path;

use demoframe::camera::TransformUniform;
use demoframe::options::Options;
use demoframe::script::GestureScript;
use demoframe::util::FrameTiming;
use demoframe::DemoError;

fn load_options(path: Option<&str>) -> Result<Options, DemoError> {
    match path {
        Some(path) => {
            let options = Options::load(Path::new(path))?;
            log::info!("Loaded options from '{path}'");
            Ok(options)
        }
        None => Ok(Options::default()),
    }
}

fn run(
    script_path: &str,
    options_path: Option<&str>,
) -> Result<(), DemoError> {
    let options = load_options(options_path)?;
    let script = GestureScript::load(Path::new(script_path))?;
    log::info!(
        "Replaying {} events from '{script_path}'",
        script.events.len()
    );

    let mut input = options.build_input();
    let mut timer = FrameTiming::new();
    timer.run();
    let changed = script.replay(&mut input);
    let elapsed = timer.milliseconds_elapsed();

    let arcball = input.arcball();
    let (axis, angle) = arcball.orientation().to_axis_angle();
    log::info!(
        "{changed} of {} events changed orientation ({elapsed:.3} ms)",
        script.events.len()
    );
    log::info!(
        "orientation: {:.2}° about {axis}",
        angle.to_degrees()
    );

    let world = input.turntable() * arcball.transform();
    let uniform = TransformUniform::new(world);
    for (i, column) in uniform.world.iter().enumerate() {
        log::info!("world[{i}] = {column:?}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        log::error!("Usage: demoframe <gesture.toml> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    if let Err(e) = run(&script_path, options_path.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
