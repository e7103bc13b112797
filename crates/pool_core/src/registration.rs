//! User and vehicle registration.

use tracing::info;

use crate::model::{User, Vehicle};
use crate::store::RecordStore;

/// Store the user and reset their ride stats to zero.
///
/// Re-registering an existing name overwrites the record and wipes their counters.
pub fn add_user(store: &mut RecordStore, name: &str, gender: &str, age: u32) -> User {
    let user = User {
        name: name.to_string(),
        gender: gender.to_string(),
        age,
    };
    let replaced = store.user(name).is_some();
    store.upsert_user(user.clone());
    store.reset_stats(name);
    info!(user = name, replaced, "user registered");
    user
}

/// Append a vehicle to the owner's list. The owner need not be a registered user.
pub fn add_vehicle(store: &mut RecordStore, owner: &str, model: &str, plate: &str) -> Vehicle {
    let vehicle = Vehicle {
        owner: owner.to_string(),
        model: model.to_string(),
        plate: plate.to_string(),
    };
    store.append_vehicle(vehicle.clone());
    info!(owner, model, plate, "vehicle registered");
    vehicle
}
