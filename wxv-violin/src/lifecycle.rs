//! Enter/update/exit lifecycle of the violin shapes on screen.
//!
//! `ShapeLayer` keeps the shapes currently in the document, including
//! ones still fading out. Each frame is reconciled by key: new keys enter
//! transparent and are faded in once mounted, existing keys take the new
//! path, and missing keys fade out and are dropped once their exit
//! transition has run. Every exit carries a ticket so a removal scheduled
//! for an old exit cannot drop a shape that has since come back.

use crate::config::ChartConfig;
use crate::frame::{ShapeKey, ViolinShape};
use crate::join::{join, JoinPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted at opacity 0, waiting for the fade-in
    Entering,
    /// At resting opacity
    Shown,
    /// Fading out, removed when the ticket's timer fires
    Exiting { ticket: u64 },
}

impl Phase {
    pub fn opacity(&self, config: &ChartConfig) -> f64 {
        match self {
            Phase::Shown => config.shape_opacity,
            Phase::Entering | Phase::Exiting { .. } => 0.0,
        }
    }

    /// CSS transition for the shape's current phase.
    pub fn transition(&self, config: &ChartConfig) -> String {
        let morph = format!("d {}ms ease-in-out", config.transition_ms);
        match self {
            Phase::Entering => "none".to_string(),
            Phase::Shown => format!("opacity {}ms ease-in-out, {}", config.transition_ms, morph),
            Phase::Exiting { .. } => format!("opacity {}ms ease-in-out, {}", config.exit_ms, morph),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry {
    pub shape: ViolinShape,
    pub phase: Phase,
}

/// Follow-up work after a reconcile, to be scheduled by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Followups {
    /// Shapes to fade in on the next frame
    pub fade_in: Vec<ShapeKey>,
    /// Shapes to remove after the exit duration, with their tickets
    pub remove: Vec<(ShapeKey, u64)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeLayer {
    entries: Vec<LayerEntry>,
    next_ticket: u64,
}

impl ShapeLayer {
    pub fn entries(&self) -> &[LayerEntry] {
        &self.entries
    }

    /// Keys of shapes that are not on their way out.
    pub fn live_keys(&self) -> Vec<ShapeKey> {
        self.entries
            .iter()
            .filter(|e| !matches!(e.phase, Phase::Exiting { .. }))
            .map(|e| e.shape.key)
            .collect()
    }

    /// Reconcile against the shapes of a new frame.
    ///
    /// Shapes that are fading out count as present, so a key that returns
    /// before its removal fires is revived in place instead of re-entering.
    pub fn reconcile(&mut self, shapes: Vec<ViolinShape>) -> (JoinPlan<ShapeKey>, Followups) {
        let previous: Vec<ShapeKey> = self.entries.iter().map(|e| e.shape.key).collect();
        let next: Vec<ShapeKey> = shapes.iter().map(|s| s.key).collect();
        let mut plan = join(&previous, &next);
        // Shapes already fading out keep their pending removal
        let live = self.live_keys();
        plan.exit.retain(|k| live.contains(k));
        let mut followups = Followups::default();

        for key in &plan.exit {
            let ticket = self.next_ticket;
            self.next_ticket += 1;
            if let Some(entry) = self.entries.iter_mut().find(|e| e.shape.key == *key) {
                entry.phase = Phase::Exiting { ticket };
                followups.remove.push((*key, ticket));
            }
        }

        for shape in shapes {
            match self.entries.iter_mut().find(|e| e.shape.key == shape.key) {
                Some(entry) => {
                    if matches!(entry.phase, Phase::Exiting { .. }) {
                        entry.phase = Phase::Shown;
                    }
                    entry.shape = shape;
                }
                None => {
                    followups.fade_in.push(shape.key);
                    self.entries.push(LayerEntry {
                        shape,
                        phase: Phase::Entering,
                    });
                }
            }
        }

        (plan, followups)
    }

    /// Move an entering shape to its resting opacity.
    pub fn fade_in(&mut self, key: ShapeKey) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.shape.key == key) {
            if entry.phase == Phase::Entering {
                entry.phase = Phase::Shown;
            }
        }
    }

    /// Drop a shape whose exit transition has finished. Returns false when
    /// the ticket is stale (the shape came back or exited again since).
    pub fn remove_exited(&mut self, key: ShapeKey, ticket: u64) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.shape.key == key && e.phase == Phase::Exiting { ticket }));
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxv_weather::{Season, Series};

    fn shape(series: Series, season: Season, path: &str) -> ViolinShape {
        ViolinShape {
            key: ShapeKey { series, season },
            x: 0.0,
            path: path.to_string(),
            fill: "red".to_string(),
            median: None,
            count: 1,
        }
    }

    fn key(season: Season) -> ShapeKey {
        ShapeKey { series: Series::Max, season }
    }

    fn all_seasons(path: &str) -> Vec<ViolinShape> {
        Season::ALL.iter().map(|s| shape(Series::Max, *s, path)).collect()
    }

    fn phase_of(layer: &ShapeLayer, key: ShapeKey) -> Option<Phase> {
        layer.entries().iter().find(|e| e.shape.key == key).map(|e| e.phase)
    }

    #[test]
    fn test_enter_then_fade_in() {
        let mut layer = ShapeLayer::default();
        let (plan, followups) = layer.reconcile(all_seasons("M0,0Z"));
        assert_eq!(plan.enter.len(), 4);
        assert_eq!(followups.fade_in.len(), 4);
        assert!(layer.entries().iter().all(|e| e.phase == Phase::Entering));

        let config = ChartConfig::default();
        assert_eq!(layer.entries()[0].phase.opacity(&config), 0.0);
        layer.fade_in(key(Season::Winter));
        let winter = phase_of(&layer, key(Season::Winter)).unwrap();
        assert_eq!(winter, Phase::Shown);
        assert_eq!(winter.opacity(&config), 0.6);
    }

    #[test]
    fn test_update_replaces_path_without_opacity_change() {
        let mut layer = ShapeLayer::default();
        layer.reconcile(all_seasons("M0,0Z"));
        for season in Season::ALL {
            layer.fade_in(key(season));
        }
        let (plan, followups) = layer.reconcile(all_seasons("M1,1Z"));
        assert_eq!(plan.update.len(), 4);
        assert_eq!(followups, Followups::default());
        assert!(layer.entries().iter().all(|e| e.phase == Phase::Shown && e.shape.path == "M1,1Z"));
    }

    #[test]
    fn test_exit_then_remove() {
        let mut layer = ShapeLayer::default();
        layer.reconcile(all_seasons("M0,0Z"));
        let (plan, followups) = layer.reconcile(vec![shape(Series::Max, Season::Summer, "M0,0Z")]);
        assert_eq!(plan.exit.len(), 3);
        assert_eq!(followups.remove.len(), 3);
        assert_eq!(layer.entries().len(), 4);
        assert_eq!(layer.live_keys(), vec![key(Season::Summer)]);

        for (k, ticket) in followups.remove {
            assert!(layer.remove_exited(k, ticket));
        }
        assert_eq!(layer.entries().len(), 1);
    }

    #[test]
    fn test_rapid_return_revives_exiting_shape() {
        let mut layer = ShapeLayer::default();
        layer.reconcile(all_seasons("M0,0Z"));
        for season in Season::ALL {
            layer.fade_in(key(season));
        }
        let (_, exit) = layer.reconcile(vec![shape(Series::Max, Season::Summer, "M0,0Z")]);
        let (plan, followups) = layer.reconcile(all_seasons("M2,2Z"));

        // Revived shapes are updates of shapes still in the document
        assert!(plan.enter.is_empty());
        assert_eq!(plan.update.len(), 4);
        assert!(followups.fade_in.is_empty());
        assert!(layer.entries().iter().all(|e| e.phase != Phase::Entering));

        // Stale removals are ignored
        for (k, ticket) in exit.remove {
            assert!(!layer.remove_exited(k, ticket));
        }
        assert_eq!(layer.entries().len(), 4);
        assert!(layer.entries().iter().all(|e| e.shape.path == "M2,2Z"));
    }

    #[test]
    fn test_update_before_fade_in_keeps_entering() {
        let mut layer = ShapeLayer::default();
        let (_, first) = layer.reconcile(all_seasons("M0,0Z"));
        let (plan, second) = layer.reconcile(all_seasons("M3,3Z"));
        assert_eq!(plan.update.len(), 4);
        assert!(second.fade_in.is_empty());
        assert!(layer
            .entries()
            .iter()
            .all(|e| e.phase == Phase::Entering && e.shape.path == "M3,3Z"));

        // The fade-in scheduled by the first reconcile still lands
        for k in first.fade_in {
            layer.fade_in(k);
        }
        assert!(layer.entries().iter().all(|e| e.phase == Phase::Shown));
    }

    #[test]
    fn test_repeated_absence_keeps_pending_removal() {
        let mut layer = ShapeLayer::default();
        layer.reconcile(all_seasons("M0,0Z"));
        let summer_only = || vec![shape(Series::Max, Season::Summer, "M0,0Z")];
        let (_, first) = layer.reconcile(summer_only());
        let (plan, second) = layer.reconcile(summer_only());
        assert!(plan.exit.is_empty());
        assert!(second.remove.is_empty());
        for (k, ticket) in first.remove {
            assert!(layer.remove_exited(k, ticket));
        }
        assert_eq!(layer.entries().len(), 1);
    }

    #[test]
    fn test_transitions() {
        let config = ChartConfig::default();
        assert_eq!(Phase::Entering.transition(&config), "none");
        assert!(Phase::Shown.transition(&config).starts_with("opacity 750ms"));
        assert!(Phase::Exiting { ticket: 0 }.transition(&config).starts_with("opacity 500ms"));
    }
}
