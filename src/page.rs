use std::rc::Rc;

use crate::counters::{CounterAnimator, MetricValues, METRICS_REGION};
use crate::pointer::PointerPosition;
use crate::reveal::{RegionId, RevealedSet};

#[derive(Clone, Default, PartialEq)]
pub struct PageState {
    pub revealed: Rc<RevealedSet>,
    pub counters: MetricValues,
    pub counters_finished: bool,
    pub pointer: PointerPosition,
    pub nav_scrolled: bool,
}

pub enum PageAction {
    Revealed(Vec<RegionId>),
    Scrolled { nav_scrolled: bool },
    PointerMoved(PointerPosition),
    CountersStepped { values: MetricValues, finished: bool },
}

impl PageState {
    pub fn counters_triggered(&self) -> bool {
        self.revealed.contains(METRICS_REGION)
    }
}

// Hands back `state` itself when nothing changed.
pub fn reduce_page(state: Rc<PageState>, action: PageAction) -> Rc<PageState> {
    match action {
        PageAction::Revealed(ids) => {
            let mut revealed = (*state.revealed).clone();
            if !revealed.extend(ids) {
                return state;
            }
            let mut next = (*state).clone();
            next.revealed = Rc::new(revealed);
            Rc::new(next)
        }
        PageAction::Scrolled { nav_scrolled } => {
            if state.nav_scrolled == nav_scrolled {
                return state;
            }
            let mut next = (*state).clone();
            next.nav_scrolled = nav_scrolled;
            Rc::new(next)
        }
        PageAction::PointerMoved(pointer) => {
            let mut next = (*state).clone();
            next.pointer = pointer;
            Rc::new(next)
        }
        PageAction::CountersStepped { values, finished } => {
            let mut next = (*state).clone();
            next.counters = values;
            next.counters_finished = finished;
            Rc::new(next)
        }
    }
}

pub fn start_counter_run(triggered: bool, finished: bool, animator: &mut CounterAnimator) -> bool {
    triggered && !finished && animator.begin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tracked_regions;
    use crate::counters::MetricKind;
    use crate::reveal::test_support::FakePage;
    use crate::reveal::VisibilityTracker;

    fn ids(values: &[&str]) -> Vec<RegionId> {
        values.iter().map(|value| RegionId::from(*value)).collect()
    }

    fn step_to_end(state: Rc<PageState>, animator: &mut CounterAnimator) -> Rc<PageState> {
        let mut state = state;
        while let Some(values) = animator.tick() {
            state = reduce_page(
                state,
                PageAction::CountersStepped {
                    values,
                    finished: animator.is_finished(),
                },
            );
        }
        state
    }

    #[test]
    fn revealing_nothing_new_keeps_the_same_state() {
        let state = reduce_page(Rc::default(), PageAction::Revealed(ids(&["exp-title"])));
        assert!(state.revealed.contains("exp-title"));

        let again = reduce_page(state.clone(), PageAction::Revealed(ids(&["exp-title"])));
        assert!(Rc::ptr_eq(&state, &again));

        let empty = reduce_page(state.clone(), PageAction::Revealed(Vec::new()));
        assert!(Rc::ptr_eq(&state, &empty));
    }

    #[test]
    fn revealed_regions_accumulate_across_actions() {
        let state = reduce_page(Rc::default(), PageAction::Revealed(ids(&["exp-title"])));
        let state = reduce_page(state, PageAction::Revealed(ids(&["metrics"])));

        assert!(state.revealed.contains("exp-title"));
        assert!(state.counters_triggered());
    }

    #[test]
    fn unchanged_scroll_flag_keeps_the_same_state() {
        let state: Rc<PageState> = Rc::default();
        let same = reduce_page(state.clone(), PageAction::Scrolled { nav_scrolled: false });
        assert!(Rc::ptr_eq(&state, &same));

        let scrolled = reduce_page(state, PageAction::Scrolled { nav_scrolled: true });
        assert!(scrolled.nav_scrolled);
    }

    #[test]
    fn pointer_moves_overwrite_the_position() {
        let state = reduce_page(
            Rc::default(),
            PageAction::PointerMoved(PointerPosition::from_client(5, 6)),
        );
        let state = reduce_page(
            state,
            PageAction::PointerMoved(PointerPosition::from_client(400, 300)),
        );

        assert_eq!(state.pointer, PointerPosition::from_client(400, 300));
    }

    #[test]
    fn counters_stepped_records_values_and_finish() {
        let values = MetricValues::at_step(60, 60);
        let state = reduce_page(
            Rc::default(),
            PageAction::CountersStepped {
                values,
                finished: true,
            },
        );

        assert_eq!(state.counters, values);
        assert!(state.counters_finished);
    }

    #[test]
    fn counter_run_needs_the_trigger() {
        let mut animator = CounterAnimator::new(60);

        assert!(!start_counter_run(false, false, &mut animator));
        assert_eq!(animator.tick(), None);
        assert!(start_counter_run(true, false, &mut animator));
    }

    #[test]
    fn finished_counters_are_not_started_again() {
        let mut animator = CounterAnimator::new(60);
        let state = reduce_page(Rc::default(), PageAction::Revealed(ids(&["metrics"])));
        assert!(start_counter_run(
            state.counters_triggered(),
            state.counters_finished,
            &mut animator
        ));

        let state = step_to_end(state, &mut animator);
        assert!(state.counters_finished);

        let state = reduce_page(state, PageAction::Revealed(ids(&["metrics", "skills-title"])));
        assert!(!start_counter_run(
            state.counters_triggered(),
            state.counters_finished,
            &mut animator
        ));

        let mut fresh = CounterAnimator::new(60);
        assert!(!start_counter_run(
            state.counters_triggered(),
            state.counters_finished,
            &mut fresh
        ));
        assert_eq!(fresh.tick(), None);
    }

    #[test]
    fn scrolling_metrics_panel_into_view_drives_counters_to_targets() {
        let mut page = FakePage::new(1_000.0, &[("exp-title", 1_200.0), ("metrics", 3_000.0)]);
        let mut tracker = VisibilityTracker::new(tracked_regions(), 0.8);
        let mut animator = CounterAnimator::new(60);
        let mut state: Rc<PageState> = Rc::default();

        page.place(METRICS_REGION, 0.9);
        state = reduce_page(state, PageAction::Revealed(tracker.scan(&page)));
        assert!(!state.counters_triggered());
        assert!(!start_counter_run(
            state.counters_triggered(),
            state.counters_finished,
            &mut animator
        ));
        assert_eq!(state.counters, MetricValues::zero());

        page.place(METRICS_REGION, 0.5);
        state = reduce_page(state, PageAction::Revealed(tracker.scan(&page)));
        assert!(state.counters_triggered());
        assert!(start_counter_run(
            state.counters_triggered(),
            state.counters_finished,
            &mut animator
        ));

        state = step_to_end(state, &mut animator);
        assert!(state.counters_finished);
        assert_eq!(state.counters.label(MetricKind::Success), "99.95%");
        assert_eq!(state.counters.label(MetricKind::Latency), "65%");
        assert_eq!(state.counters.label(MetricKind::Traffic), "3.0x");
        assert_eq!(state.counters.label(MetricKind::Mttr), "30min");
        assert_eq!(state.counters.label(MetricKind::Cycle), "80%");

        page.scroll_y = 0.0;
        let unchanged = reduce_page(state.clone(), PageAction::Revealed(tracker.scan(&page)));
        assert!(Rc::ptr_eq(&state, &unchanged));
        assert!(unchanged.counters_triggered());
    }
}
