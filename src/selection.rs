//! Selection state machine.
//!
//! Holds either no selection or exactly one focused body. The orbit pause gate
//! is derived from it on demand and never stored separately.

use bevy::prelude::*;

use crate::catalog::BodyCatalog;
use crate::error::SelectionError;
use crate::types::{BodyId, OrrerySet};

/// Current focus of the user.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Focused(BodyId),
}

impl Selection {
    /// The focused body, if any.
    pub fn focused(&self) -> Option<&BodyId> {
        match self {
            Selection::Unselected => None,
            Selection::Focused(id) => Some(id),
        }
    }

    pub fn is_focused_on(&self, id: &str) -> bool {
        self.focused().is_some_and(|f| f.as_str() == id)
    }

    /// Orbits are frozen exactly while a body is focused.
    pub fn pause_gate(&self) -> bool {
        matches!(self, Selection::Focused(_))
    }

    /// Focus `id`, replacing any current focus.
    ///
    /// Picking the already focused body keeps it focused. Unknown ids are
    /// rejected without touching the state.
    pub fn pick(
        &mut self,
        catalog: &BodyCatalog,
        id: &str,
    ) -> Result<SelectionTransition, SelectionError> {
        let Some(body) = catalog.get(id) else {
            return Err(SelectionError::UnknownBody(BodyId::from(id)));
        };
        let previous = std::mem::replace(self, Selection::Focused(body.id.clone()));
        Ok(SelectionTransition {
            previous,
            current: self.clone(),
        })
    }

    /// Drop any focus.
    pub fn clear(&mut self) -> SelectionTransition {
        let previous = std::mem::take(self);
        SelectionTransition {
            previous,
            current: Selection::Unselected,
        }
    }
}

/// One applied transition of [`Selection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTransition {
    pub previous: Selection,
    pub current: Selection,
}

impl SelectionTransition {
    /// Whether the presented subject differs from before.
    pub fn subject_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Inbound selection event from input or UI.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub enum SelectionRequest {
    /// A body was picked (pointer hit or list click).
    Pick(BodyId),
    /// Empty space was picked or the panel was closed.
    Clear,
}

/// Outbound notification after every applied transition, including re-entry.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct SelectionChanged(pub SelectionTransition);

/// Plugin owning [`Selection`] and applying [`SelectionRequest`]s.
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .init_resource::<BodyCatalog>()
            .add_message::<SelectionRequest>()
            .add_message::<SelectionChanged>()
            .add_systems(
                Update,
                apply_selection_requests.in_set(OrrerySet::Selection),
            );
    }
}

/// Apply pending requests in arrival order.
fn apply_selection_requests(
    mut requests: MessageReader<SelectionRequest>,
    mut changed: MessageWriter<SelectionChanged>,
    mut selection: ResMut<Selection>,
    catalog: Res<BodyCatalog>,
) {
    for request in requests.read() {
        let transition = match request {
            SelectionRequest::Pick(id) => match selection.pick(&catalog, id.as_str()) {
                Ok(transition) => transition,
                Err(err) => {
                    warn!("Pick rejected: {err}");
                    continue;
                }
            },
            SelectionRequest::Clear => selection.clear(),
        };

        match &transition.current {
            Selection::Focused(id) => info!("Focused {id}"),
            Selection::Unselected => info!("Selection cleared"),
        }
        changed.write(SelectionChanged(transition));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BodyCatalog {
        BodyCatalog::default()
    }

    #[test]
    fn test_initial_state_unselected_and_running() {
        let selection = Selection::default();
        assert_eq!(selection, Selection::Unselected);
        assert!(!selection.pause_gate());
    }

    #[test]
    fn test_repeat_pick_keeps_focus() {
        let catalog = catalog();
        let mut selection = Selection::default();

        selection.pick(&catalog, "earth").unwrap();
        let again = selection.pick(&catalog, "earth").unwrap();

        assert_eq!(selection, Selection::Focused("earth".into()));
        assert!(!again.subject_changed());
        assert!(selection.pause_gate());
    }

    #[test]
    fn test_pick_replaces_without_passing_unselected() {
        let catalog = catalog();
        let mut selection = Selection::default();

        selection.pick(&catalog, "earth").unwrap();
        let transition = selection.pick(&catalog, "mars").unwrap();

        assert_eq!(transition.previous, Selection::Focused("earth".into()));
        assert_eq!(transition.current, Selection::Focused("mars".into()));
        assert!(transition.subject_changed());
    }

    #[test]
    fn test_unknown_pick_rejected_without_change() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.pick(&catalog, "venus").unwrap();

        let err = selection.pick(&catalog, "pluto").unwrap_err();

        assert_eq!(err, SelectionError::UnknownBody("pluto".into()));
        assert_eq!(selection, Selection::Focused("venus".into()));
    }

    #[test]
    fn test_clear_from_any_state() {
        let catalog = catalog();
        let mut selection = Selection::default();

        let idle = selection.clear();
        assert!(!idle.subject_changed());

        selection.pick(&catalog, "jupiter").unwrap();
        let transition = selection.clear();
        assert_eq!(transition.previous, Selection::Focused("jupiter".into()));
        assert_eq!(selection, Selection::Unselected);
        assert!(!selection.pause_gate());
    }
}
