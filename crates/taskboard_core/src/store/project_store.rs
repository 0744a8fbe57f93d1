//! Observable project store.
//!
//! # Responsibility
//! - Own the ordered project collection and the listener list.
//! - Provide the only mutation entry points: `create` and `change_status`.
//!
//! # Invariants
//! - Snapshot order is creation order; a status change never re-sorts.
//! - Listeners fire synchronously, in subscription order, once per genuine
//!   change. No-op calls fire nothing.
//! - Each listener receives its own owned snapshot; mutating it cannot
//!   touch store state.
//! - No operation fails: unknown ids and unchanged statuses are silent
//!   no-ops by contract.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};

/// Callback invoked with a full board snapshot after every mutation.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Single source of truth for all board items.
///
/// Construct one per application run and pass it by reference to whichever
/// component needs it; there is deliberately no process-global instance.
/// The exclusive `&mut self` on mutation entry points also makes listener
/// reentrancy unrepresentable.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for every future successful mutation.
    ///
    /// # Contract
    /// - Not invoked retroactively with current state.
    /// - No unsubscribe handle: subscriptions last for the store lifetime.
    /// - Notification order equals subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Creates a project in the active column and notifies listeners.
    ///
    /// # Contract
    /// - Inputs are trusted; validation happens at intake, not here.
    /// - The new item is appended at the end of the collection.
    /// - All listeners run before this returns.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        info!("event=project_created module=store id={id} people={people}");
        self.notify_listeners();
        id
    }

    /// Moves a project to another column and notifies listeners.
    ///
    /// Unknown ids and already-matching statuses are silent no-ops with no
    /// notification, so a stale drop event never triggers a re-render.
    pub fn change_status(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!("event=status_change_ignored module=store reason=not_found id={id}");
            return;
        };
        if project.status == new_status {
            debug!(
                "event=status_change_ignored module=store reason=unchanged id={id} status={new_status}"
            );
            return;
        }
        project.status = new_status;
        info!("event=status_changed module=store id={id} status={new_status}");
        self.notify_listeners();
    }

    /// Read-only view of the collection, in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn notify_listeners(&mut self) {
        for listener in &mut self.listeners {
            listener(self.projects.clone());
        }
    }
}
