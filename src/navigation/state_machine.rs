use std::time::Duration;

use bevy::prelude::*;

use super::advisory::AdvisoryFlag;
use super::constants::MOON_ADVISORY_DURATION;
use super::constants::SURFACE_ADVISORY_DURATION;
use crate::placement::Moon;
use crate::placement::Node;
use crate::placement::Stat;
use crate::placement::Structure;
use crate::state::NavigationMode;

/// Single source of truth for where the user is in the planet / surface / moon hierarchy.
///
/// Every transition is a method here. A transition invoked from an incompatible mode is logged and
/// ignored. Selections are indices into the owned collections, so telemetry updates show through
/// them.
#[derive(Resource, Reflect, Debug, Default, Clone)]
#[reflect(Resource)]
pub struct Navigation {
    mode:                    NavigationMode,
    nodes:                   Vec<Node>,
    moons:                   Vec<Moon>,
    selected_node:           Option<usize>,
    selected_structure:      Option<usize>,
    selected_moon:           Option<usize>,
    focused_structure_index: usize,
    focused_moon_index:      usize,
    navigation_offset:       f32,
    transitioning:           AdvisoryFlag,
}

impl Navigation {
    pub fn new(nodes: Vec<Node>, moons: Vec<Moon>) -> Self {
        Self {
            nodes,
            moons,
            ..default()
        }
    }

    pub const fn mode(&self) -> NavigationMode { self.mode }

    pub fn nodes(&self) -> &[Node] { &self.nodes }

    pub fn moons(&self) -> &[Moon] { &self.moons }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected_node.and_then(|index| self.nodes.get(index))
    }

    pub fn selected_structure(&self) -> Option<&Structure> {
        let index = self.selected_structure?;
        self.selected_node()?.structures.get(index)
    }

    pub const fn selected_moon_index(&self) -> Option<usize> { self.selected_moon }

    pub fn selected_moon(&self) -> Option<&Moon> {
        self.selected_moon.and_then(|index| self.moons.get(index))
    }

    pub const fn focused_structure_index(&self) -> usize { self.focused_structure_index }

    /// The structure the surface camera frames. Falls back to the first structure if the focus
    /// index is somehow out of range.
    pub fn focused_structure(&self) -> Option<&Structure> {
        let structures = &self.selected_node()?.structures;
        structures
            .get(self.focused_structure_index)
            .or_else(|| structures.first())
    }

    pub const fn navigation_offset(&self) -> f32 { self.navigation_offset }

    /// Advisory only - for overlays and effects, never for camera gating
    pub const fn is_transitioning(&self) -> bool { self.transitioning.is_raised() }

    pub fn select_node(&mut self, index: usize) {
        if self.mode != NavigationMode::Orbit {
            warn!("select_node ignored while in {:?}", self.mode);
            return;
        }
        let Some(node) = self.nodes.get(index) else {
            warn!("select_node ignored, no node at index {index}");
            return;
        };
        debug!("selecting {}", node.id);

        self.selected_node = Some(index);
        self.selected_structure = None;
        self.focused_structure_index = 0;
        self.mode = NavigationMode::Transition;
        self.transitioning.raise(SURFACE_ADVISORY_DURATION);
    }

    /// Called by the camera rig once it has arrived at the selected node
    pub fn enter_surface(&mut self) {
        if self.mode != NavigationMode::Transition {
            warn!("enter_surface ignored while in {:?}", self.mode);
            return;
        }
        if self.selected_node().is_none() {
            warn!("enter_surface ignored, no node selected");
            return;
        }

        self.mode = NavigationMode::Surface;
        self.transitioning.lower();
    }

    pub fn exit_surface(&mut self) {
        if self.mode != NavigationMode::Surface {
            warn!("exit_surface ignored while in {:?}", self.mode);
            return;
        }

        self.selected_node = None;
        self.selected_structure = None;
        self.focused_structure_index = 0;
        self.navigation_offset = 0.0;
        self.mode = NavigationMode::Orbit;
        self.transitioning.raise(SURFACE_ADVISORY_DURATION);
    }

    pub fn next_structure(&mut self) { self.step_structure(true); }

    pub fn prev_structure(&mut self) { self.step_structure(false); }

    fn step_structure(&mut self, forward: bool) {
        let Some(count) = self
            .selected_node()
            .map(|node| node.structures.len())
            .filter(|count| *count > 0)
        else {
            return;
        };
        self.focused_structure_index = step_cyclic(self.focused_structure_index, count, forward);
    }

    /// Focuses the structure with `structure_id` in the selected node, if there is one
    pub fn set_focused_structure(&mut self, structure_id: &str) {
        if let Some(index) = self.structure_index(structure_id) {
            self.focused_structure_index = index;
        }
    }

    /// Structure-level selection (detail panel), independent of camera focus
    pub fn set_selected_structure(&mut self, structure_id: Option<&str>) {
        match structure_id {
            None => self.selected_structure = None,
            Some(id) => match self.structure_index(id) {
                Some(index) => self.selected_structure = Some(index),
                None => warn!("set_selected_structure ignored, {id} is not in the selected node"),
            },
        }
    }

    fn structure_index(&self, structure_id: &str) -> Option<usize> {
        self.selected_node()?
            .structures
            .iter()
            .position(|structure| structure.id == structure_id)
    }

    pub fn focus_moon(&mut self, index: usize) {
        if self.mode != NavigationMode::Orbit {
            warn!("focus_moon ignored while in {:?}", self.mode);
            return;
        }
        let Some(moon) = self.moons.get(index) else {
            warn!("focus_moon ignored, no moon at index {index}");
            return;
        };
        debug!("focusing {}: {}", moon.id, moon.description);

        self.selected_moon = Some(index);
        self.focused_moon_index = index;
        self.mode = NavigationMode::Moon;
        self.transitioning.raise(MOON_ADVISORY_DURATION);
    }

    pub fn exit_moon(&mut self) {
        if self.mode != NavigationMode::Moon {
            warn!("exit_moon ignored while in {:?}", self.mode);
            return;
        }

        self.selected_moon = None;
        self.focused_moon_index = 0;
        self.mode = NavigationMode::Orbit;
        self.transitioning.raise(MOON_ADVISORY_DURATION);
    }

    pub fn next_moon(&mut self) { self.step_moon(true); }

    pub fn prev_moon(&mut self) { self.step_moon(false); }

    fn step_moon(&mut self, forward: bool) {
        if self.mode != NavigationMode::Moon || self.moons.is_empty() {
            return;
        }
        self.focused_moon_index = step_cyclic(self.focused_moon_index, self.moons.len(), forward);
        self.selected_moon = Some(self.focused_moon_index);
    }

    /// Pan bias applied while a structure swipe is still in progress
    pub const fn set_navigation_offset(&mut self, offset: f32) { self.navigation_offset = offset; }

    /// Telemetry hook: replaces a structure's stats in place. Returns false for unknown ids.
    pub fn update_structure_stats(&mut self, structure_id: &str, stats: Vec<Stat>) -> bool {
        let Some(structure) = self
            .nodes
            .iter_mut()
            .flat_map(|node| node.structures.iter_mut())
            .find(|structure| structure.id == structure_id)
        else {
            return false;
        };
        structure.stats = stats;
        true
    }

    pub fn tick_advisory(&mut self, delta: Duration) { self.transitioning.tick(delta); }
}

const fn step_cyclic(index: usize, count: usize, forward: bool) -> usize {
    let current = index % count;
    if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::placement::StatStatus;
    use crate::placement::StructureKind;
    use crate::placement::generate_moons;

    pub(crate) fn test_structure(id: &str, x: f32, z: f32) -> Structure {
        Structure {
            id:       id.into(),
            kind:     StructureKind::PolymerPlant,
            position: Vec3::new(x, 1.0, z),
            stats:    vec![Stat::new("PURITY", "97%", StatStatus::Good)],
        }
    }

    pub(crate) fn test_node(id: &str, position: Vec3, structure_count: usize) -> Node {
        Node {
            id: id.into(),
            position,
            structures: (0..structure_count)
                .zip((0_u16..).map(f32::from))
                .map(|(index, step)| test_structure(&format!("{id}-s{index}"), step * 12.0, 0.0))
                .collect(),
        }
    }

    pub(crate) fn test_navigation() -> Navigation {
        Navigation::new(
            vec![
                test_node("node-0", Vec3::new(0.0, 0.0, 2.05), 3),
                test_node("node-1", Vec3::new(2.05, 0.0, 0.0), 1),
                test_node("node-2", Vec3::new(0.0, 2.05, 0.0), 0),
            ],
            generate_moons(),
        )
    }

    fn surface_navigation(node: usize) -> Navigation {
        let mut navigation = test_navigation();
        navigation.select_node(node);
        navigation.enter_surface();
        navigation
    }

    #[test]
    fn test_starts_in_orbit_with_nothing_selected() {
        let navigation = test_navigation();
        assert_eq!(navigation.mode(), NavigationMode::Orbit);
        assert!(navigation.selected_node().is_none());
        assert!(navigation.selected_moon().is_none());
        assert!(!navigation.is_transitioning());
        assert_eq!(navigation.focused_structure_index(), 0);
    }

    #[test]
    fn test_select_node_enters_transition() {
        let mut navigation = test_navigation();
        navigation.select_node(1);
        assert_eq!(navigation.mode(), NavigationMode::Transition);
        assert_eq!(navigation.selected_node().map(|node| node.id.as_str()), Some("node-1"));
        assert!(navigation.is_transitioning());
        assert_eq!(navigation.focused_structure_index(), 0);
    }

    #[test]
    fn test_select_node_ignored_outside_orbit() {
        let mut navigation = surface_navigation(0);
        navigation.select_node(1);
        assert_eq!(navigation.mode(), NavigationMode::Surface);
        assert_eq!(navigation.selected_node().map(|node| node.id.as_str()), Some("node-0"));
    }

    #[test]
    fn test_select_node_ignores_unknown_index() {
        let mut navigation = test_navigation();
        navigation.select_node(99);
        assert_eq!(navigation.mode(), NavigationMode::Orbit);
        assert!(navigation.selected_node().is_none());
    }

    #[test]
    fn test_enter_surface_only_from_transition() {
        let mut navigation = test_navigation();
        navigation.enter_surface();
        assert_eq!(navigation.mode(), NavigationMode::Orbit);

        navigation.select_node(0);
        navigation.enter_surface();
        assert_eq!(navigation.mode(), NavigationMode::Surface);
        assert!(!navigation.is_transitioning());
    }

    #[test]
    fn test_exit_surface_clears_selection() {
        let mut navigation = surface_navigation(0);
        navigation.next_structure();
        navigation.set_selected_structure(Some("node-0-s1"));
        navigation.set_navigation_offset(2.5);

        navigation.exit_surface();

        assert_eq!(navigation.mode(), NavigationMode::Orbit);
        assert!(navigation.selected_node().is_none());
        assert!(navigation.selected_structure().is_none());
        assert_eq!(navigation.focused_structure_index(), 0);
        assert!(navigation.navigation_offset().abs() < f32::EPSILON);
        assert!(navigation.is_transitioning());
    }

    #[test]
    fn test_exit_surface_ignored_during_transition() {
        let mut navigation = test_navigation();
        navigation.select_node(0);
        navigation.exit_surface();
        assert_eq!(navigation.mode(), NavigationMode::Transition);
        assert!(navigation.selected_node().is_some());
    }

    #[test]
    fn test_next_structure_cycles_through_three() {
        let mut navigation = surface_navigation(0);
        let mut seen = Vec::new();
        for _ in 0..3 {
            navigation.next_structure();
            seen.push(navigation.focused_structure_index());
        }
        assert_eq!(seen, [1, 2, 0]);
    }

    #[test]
    fn test_next_and_prev_are_inverses() {
        for count in 1..=6 {
            let mut navigation = Navigation::new(
                vec![test_node("node-0", Vec3::Z * 2.05, count)],
                Vec::new(),
            );
            navigation.select_node(0);
            navigation.enter_surface();

            for start in 0..count {
                navigation.set_focused_structure(&format!("node-0-s{start}"));
                navigation.next_structure();
                navigation.prev_structure();
                assert_eq!(navigation.focused_structure_index(), start, "count {count}");
                navigation.prev_structure();
                navigation.next_structure();
                assert_eq!(navigation.focused_structure_index(), start, "count {count}");
            }
        }
    }

    #[test]
    fn test_prev_structure_wraps_to_last() {
        let mut navigation = surface_navigation(0);
        navigation.prev_structure();
        assert_eq!(navigation.focused_structure_index(), 2);
    }

    #[test]
    fn test_stepping_without_structures_is_noop() {
        let mut navigation = surface_navigation(2);
        navigation.next_structure();
        navigation.prev_structure();
        assert_eq!(navigation.focused_structure_index(), 0);
        assert!(navigation.focused_structure().is_none());

        let mut orbit = test_navigation();
        orbit.next_structure();
        assert_eq!(orbit.focused_structure_index(), 0);
    }

    #[test]
    fn test_set_focused_structure_by_id() {
        let mut navigation = surface_navigation(0);
        navigation.set_focused_structure("node-0-s2");
        assert_eq!(navigation.focused_structure_index(), 2);
        navigation.set_focused_structure("not-here");
        assert_eq!(navigation.focused_structure_index(), 2);
        assert_eq!(
            navigation.focused_structure().map(|structure| structure.id.as_str()),
            Some("node-0-s2")
        );
    }

    #[test]
    fn test_selected_structure_is_independent_of_focus() {
        let mut navigation = surface_navigation(0);
        navigation.set_selected_structure(Some("node-0-s1"));
        navigation.next_structure();
        navigation.next_structure();
        assert_eq!(
            navigation.selected_structure().map(|structure| structure.id.as_str()),
            Some("node-0-s1")
        );
        navigation.set_selected_structure(Some("node-1-s0"));
        assert_eq!(
            navigation.selected_structure().map(|structure| structure.id.as_str()),
            Some("node-0-s1")
        );
        navigation.set_selected_structure(None);
        assert!(navigation.selected_structure().is_none());
    }

    #[test]
    fn test_focus_and_exit_moon() {
        let mut navigation = test_navigation();
        navigation.focus_moon(2);
        assert_eq!(navigation.mode(), NavigationMode::Moon);
        assert_eq!(navigation.selected_moon().map(|moon| moon.id.as_str()), Some("moon-triton"));
        assert_eq!(navigation.focused_moon_index, 2);
        assert!(navigation.is_transitioning());

        navigation.exit_moon();
        assert_eq!(navigation.mode(), NavigationMode::Orbit);
        assert!(navigation.selected_moon().is_none());
        assert!(navigation.is_transitioning());
    }

    #[test]
    fn test_focus_moon_ignored_outside_orbit() {
        let mut navigation = test_navigation();
        navigation.select_node(0);
        navigation.focus_moon(0);
        assert_eq!(navigation.mode(), NavigationMode::Transition);
        assert!(navigation.selected_moon().is_none());
    }

    #[test]
    fn test_moon_steps_cycle_both_ways() {
        let mut navigation = test_navigation();
        navigation.focus_moon(0);
        navigation.prev_moon();
        assert_eq!(navigation.selected_moon_index(), Some(2));
        navigation.next_moon();
        navigation.next_moon();
        assert_eq!(navigation.selected_moon_index(), Some(1));
        assert_eq!(navigation.focused_moon_index, 1);
    }

    #[test]
    fn test_moon_steps_ignored_outside_moon_mode() {
        let mut navigation = test_navigation();
        navigation.next_moon();
        assert!(navigation.selected_moon().is_none());
        assert_eq!(navigation.mode(), NavigationMode::Orbit);
    }

    #[test]
    fn test_advisory_flag_clears_after_delay() {
        let mut navigation = test_navigation();
        navigation.focus_moon(0);
        navigation.tick_advisory(Duration::from_millis(999));
        assert!(navigation.is_transitioning());
        navigation.tick_advisory(Duration::from_millis(2));
        assert!(!navigation.is_transitioning());
        // the flag is advisory, the mode is untouched
        assert_eq!(navigation.mode(), NavigationMode::Moon);
    }

    #[test]
    fn test_update_structure_stats_in_place() {
        let mut navigation = surface_navigation(0);
        let stats = vec![Stat::new("THERMAL", "812°C", StatStatus::Critical)];
        assert!(navigation.update_structure_stats("node-0-s1", stats.clone()));

        let updated = &navigation.nodes()[0].structures[1];
        assert_eq!(updated.stats, stats);
        assert_eq!(updated.position, Vec3::new(12.0, 1.0, 0.0));
        assert_eq!(updated.kind, StructureKind::PolymerPlant);

        assert!(!navigation.update_structure_stats("missing", Vec::new()));
    }

    #[test]
    fn test_selection_sees_telemetry_updates() {
        let mut navigation = surface_navigation(0);
        navigation.set_selected_structure(Some("node-0-s0"));
        navigation.update_structure_stats("node-0-s0", Vec::new());
        assert!(
            navigation
                .selected_structure()
                .is_some_and(|structure| structure.stats.is_empty())
        );
    }
}
