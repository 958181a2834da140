//! Live near-Earth-object data integration.
//!
//! A [`FetchNeoEvent`] kicks off the blocking feed request on the async
//! compute pool; a poll system collects the result. On success the closest
//! object's diameter/velocity/distance become the new simulator parameters
//! and the full list feeds the gallery. On failure the user gets a
//! notification and the existing parameters stay untouched.

pub mod client;

use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task};

pub use client::{NeoError, NeoSummary};

use crate::types::SimulatorParameters;
use crate::ui::Notifications;

/// Event requesting a fresh feed fetch. Ignored while one is in flight.
#[derive(Message)]
pub struct FetchNeoEvent;

/// Fetched objects for the gallery, plus fetch status for the UI.
#[derive(Resource, Default)]
pub struct NeoCatalog {
    /// Most recent successful fetch, closest approach first.
    pub objects: Vec<NeoSummary>,
    /// Date string of the last successful fetch.
    pub fetched_for: Option<String>,
    /// Whether a fetch task is currently running.
    pub fetching: bool,
}

/// In-flight fetch task, if any.
#[derive(Resource, Default)]
struct ActiveFetch(Option<Task<Result<Vec<NeoSummary>, NeoError>>>);

/// Plugin providing NEO feed fetching.
pub struct NeoPlugin;

impl Plugin for NeoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NeoCatalog>()
            .init_resource::<ActiveFetch>()
            .init_resource::<Messages<FetchNeoEvent>>()
            .add_systems(Update, (start_fetch, poll_fetch));
    }
}

/// Spawn the fetch task when requested.
fn start_fetch(
    mut events: MessageReader<FetchNeoEvent>,
    mut active: ResMut<ActiveFetch>,
    mut catalog: ResMut<NeoCatalog>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.clear();

    if active.0.is_some() {
        // One request at a time; the button is disabled anyway
        return;
    }

    info!("Fetching NEO feed...");
    catalog.fetching = true;
    let task = AsyncComputeTaskPool::get().spawn(async move { client::fetch_today() });
    active.0 = Some(task);
}

/// Collect a finished fetch task and apply its outcome.
fn poll_fetch(
    mut active: ResMut<ActiveFetch>,
    mut catalog: ResMut<NeoCatalog>,
    mut params: ResMut<SimulatorParameters>,
    mut notifications: ResMut<Notifications>,
) {
    let Some(task) = active.0.as_mut() else {
        return;
    };
    let Some(outcome) = block_on(future::poll_once(task)) else {
        return;
    };

    active.0 = None;
    catalog.fetching = false;

    match outcome {
        Ok(objects) => {
            // The closest approach drives the simulator, matching the
            // original behavior of loading the first object
            if let Some(neo) = objects.first() {
                apply_neo(&mut params, neo);
                info!(
                    "Loaded NEO {}: {:.3} km at {:.1} km/s, miss {:.3} AU",
                    neo.name, neo.diameter_km, neo.velocity_km_s, neo.distance_au
                );
                notifications.push_success(format!("Loaded NEO: {}", neo.name));
            }
            catalog.fetched_for = Some(client::current_date_string());
            catalog.objects = objects;
        }
        Err(err) => {
            // Parameters are deliberately left as they were
            warn!("NEO fetch failed: {err}");
            notifications.push_error("Failed to fetch NASA data. Using current parameters.");
        }
    }
}

/// Overwrite the simulator inputs with a fetched object's scalars.
pub fn apply_neo(params: &mut SimulatorParameters, neo: &NeoSummary) {
    params.size_km = neo.diameter_km;
    params.velocity_km_s = neo.velocity_km_s;
    params.distance_au = neo.distance_au;
    params.source_name = Some(neo.name.clone());
}
