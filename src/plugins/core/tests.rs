use bevy::prelude::*;
use crate::plugins::core;
use crate::common::config::FlareConfig;
use crate::common::state::Authority;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
    assert_eq!(*app.world().resource::<Authority>(), Authority::Server);
    assert_eq!(*app.world().resource::<FlareConfig>(), FlareConfig::default());
}

#[test]
fn keeps_preloaded_config() {
    let mut app = App::new();
    app.insert_resource(FlareConfig { light_decay_time: 40, ..default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<FlareConfig>().light_decay_time, 40);
}

#[test]
fn fixed_tick_runs_at_twenty_hertz() {
    let mut app = App::new();
    core::plugin(&mut app);
    let step = app.world().resource::<Time<Fixed>>().timestep();
    assert_eq!(step.as_millis(), 50);
}
