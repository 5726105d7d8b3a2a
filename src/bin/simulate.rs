use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use std::{env, time::Duration};

use zeppelin::{
    components::{CraftState, ParameterId, ParameterTable},
    plugins::{CraftInput, CraftPlugin, CraftSet},
};

const FRAME: Duration = Duration::from_millis(16);
const DEFAULT_FRAMES: u32 = 1200;

/// Headless session: climb, cruise, turn, throttle back.
///
/// Usage: `zeppelin_sim [parameters.yaml|json] [frames]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let table = match args.next() {
        Some(path) => ParameterTable::from_file(path)?,
        None => ParameterTable::load_or_default()?,
    };
    let frames = match args.next() {
        Some(frames) => frames.parse::<u32>()?,
        None => DEFAULT_FRAMES,
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins(CraftPlugin::new(table)?)
        .add_systems(Update, scripted_pilot.before(CraftSet::Input));
    app.finish();
    app.cleanup();

    for frame in 0..frames {
        app.update();
        if app.world().resource::<CraftState>().is_crashed() {
            warn!("Session ended by crash at frame {}", frame);
            break;
        }
    }

    let snapshot = app.world().resource::<CraftState>().snapshot();
    println!("{}", snapshot.to_json()?);
    Ok(())
}

fn scripted_pilot(mut frame: Local<u32>, mut inputs: EventWriter<CraftInput>) {
    match *frame {
        0 => {
            inputs.send(CraftInput::soft(ParameterId::Pressure, -150.0));
            inputs.send(CraftInput::hard(ParameterId::EnginePower, 60.0));
        }
        300 => {
            inputs.send(CraftInput::hard(ParameterId::AngularVelocity, 4.0));
        }
        600 => {
            inputs.send(CraftInput::soft(ParameterId::AngularVelocity, -4.0));
            inputs.send(CraftInput::soft(ParameterId::Pressure, 50.0));
        }
        900 => {
            inputs.send(CraftInput::soft(ParameterId::EnginePower, -60.0));
        }
        _ => {}
    }
    *frame += 1;
}
