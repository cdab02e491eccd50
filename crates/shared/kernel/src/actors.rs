//! Seams towards the host's object table.
//!
//! The host owns the real actors and knows how to re-apply an appearance; the registry only
//! needs to enumerate them and ask for a refresh.

use parking_lot::RwLock;

/// Host-assigned object index of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

/// A tracked actor as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    /// Invalid actors are still tracked but must not be touched.
    pub valid: bool,
}

impl Actor {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id: ActorId(id), name: name.into(), valid: true }
    }
}

/// Who requested a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateSource {
    Game,
    #[default]
    Manual,
    Ipc,
}

/// Enumerates the actors currently tracked by the host.
pub trait ActorTable {
    fn actors(&self) -> Vec<Actor>;
}

/// Re-applies the stored appearance of an actor.
pub trait StateApplier {
    fn reapply(&self, actor: &Actor, force: bool, source: StateSource);
}

/// In-memory actor table.
#[derive(Debug, Default)]
pub struct ActorRoster {
    actors: RwLock<Vec<Actor>>,
}

impl ActorRoster {
    #[must_use]
    pub fn new(actors: impl IntoIterator<Item = Actor>) -> Self {
        Self { actors: RwLock::new(actors.into_iter().collect()) }
    }

    /// Starts tracking `actor`, replacing an entry with the same id.
    pub fn track(&self, actor: Actor) {
        let mut actors = self.actors.write();
        match actors.iter_mut().find(|a| a.id == actor.id) {
            Some(slot) => *slot = actor,
            None => actors.push(actor),
        }
    }

    /// Marks an actor invalid. Returns `false` when the id is not tracked.
    pub fn invalidate(&self, id: ActorId) -> bool {
        let mut actors = self.actors.write();
        let Some(actor) = actors.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        actor.valid = false;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.read().len()
    }
}

impl ActorTable for ActorRoster {
    fn actors(&self) -> Vec<Actor> {
        self.actors.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_replaces_existing_entries() {
        let roster = ActorRoster::new([Actor::new(1, "Alisaie")]);
        roster.track(Actor { name: "Alphinaud".to_owned(), ..Actor::new(1, "") });
        roster.track(Actor::new(2, "Tataru"));

        let actors = roster.actors();
        assert_eq!(roster.len(), 2);
        assert_eq!(actors[0].name, "Alphinaud");
    }

    #[test]
    fn invalidate_reports_unknown_ids() {
        let roster = ActorRoster::new([Actor::new(7, "Urianger")]);
        assert!(roster.invalidate(ActorId(7)));
        assert!(!roster.invalidate(ActorId(8)));
        assert!(!roster.actors()[0].valid);
    }
}
