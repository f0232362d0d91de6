use crate::*;

use disclosure::{CarouselOptions, CircularCarousel, RevealOutcome, ScrollMetrics};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

fn bottom(distance: u64) -> ScrollMetrics {
    ScrollMetrics::new(800, 10_000 - 800 - distance, 10_000)
}

fn far() -> ScrollMetrics {
    bottom(5_000)
}

#[derive(Clone, Debug, PartialEq)]
struct Facet {
    category: &'static str,
    design: Option<&'static str>,
}

fn rings(design: Option<&'static str>) -> Facet {
    Facet {
        category: "rings",
        design,
    }
}

#[test]
fn paginator_defers_reveal_until_ticket_completes() {
    let mut p = Paginator::<Facet>::default();
    p.set_filter(rings(None));
    assert!(p.is_loading());
    assert_eq!(p.on_scroll(bottom(0)), None);

    p.set_source(30);
    assert_eq!(p.windower().cursor(), 8);
    assert_eq!(p.on_scroll(far()), None);

    let ticket = p.on_scroll(bottom(100)).unwrap();
    assert!(p.is_loading());
    assert_eq!(p.on_scroll(bottom(0)), None);
    assert_eq!(p.windower().cursor(), 8);

    assert_eq!(p.complete(ticket), RevealOutcome::Applied);
    assert_eq!(p.windower().cursor(), 16);
    assert!(!p.is_loading());
}

#[test]
fn filter_change_cancels_in_flight_reveal() {
    let mut p = Paginator::<Facet>::default();
    p.set_filter(rings(None));
    p.set_source(30);
    let ticket = p.on_scroll(bottom(0)).unwrap();

    assert!(p.set_filter(rings(Some("solitaire"))));
    assert_eq!(p.windower().total(), 0);
    p.set_source(12);

    assert_eq!(p.complete(ticket), RevealOutcome::Stale);
    assert_eq!(p.windower().cursor(), 8);
    assert_eq!(p.filter(), Some(&rings(Some("solitaire"))));
}

#[test]
fn same_filter_is_not_a_change() {
    let mut p = Paginator::<Facet>::default();
    assert!(p.set_filter(rings(None)));
    p.set_source(20);
    p.on_scroll_immediate(bottom(0));
    assert!(!p.set_filter(rings(None)));
    assert_eq!(p.windower().cursor(), 16);
}

#[test]
fn upstream_loading_gates_reveals() {
    let mut p = Paginator::<()>::default();
    p.set_source(40);
    p.set_upstream_loading(true);
    assert!(!p.on_scroll_immediate(bottom(0)));
    p.set_upstream_loading(false);
    assert!(p.on_scroll_immediate(bottom(0)));
    assert_eq!(p.state().cursor, 16);
}

#[test]
fn upstream_failure_keeps_window_and_stops_revealing() {
    let items: Vec<u32> = (0..40).collect();
    let mut p = Paginator::<()>::default();
    p.set_source_from(&items);
    let ticket = p.on_scroll(bottom(0)).unwrap();

    p.source_failed();
    assert!(p.is_halted());
    assert!(!p.has_more());
    assert!(!p.is_loading());
    assert_eq!(p.visible(&items), &items[..8]);
    assert_eq!(p.complete(ticket), RevealOutcome::Stale);
    assert_eq!(p.on_scroll(bottom(0)), None);

    p.set_source_from(&items);
    assert!(p.has_more());
    assert!(p.on_scroll(bottom(0)).is_some());
}

#[test]
fn hub_dispatches_to_subscribed_observers_only() {
    let mut hub = ScrollHub::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let id = hub.subscribe({
        let seen = Arc::clone(&seen);
        move |m: ScrollMetrics| seen.lock().unwrap().push(m.scroll_offset)
    });
    assert_eq!(hub.len(), 1);

    assert_eq!(hub.dispatch(ScrollMetrics::new(10, 5, 100)), 1);
    assert!(hub.unsubscribe(id));
    assert!(!hub.unsubscribe(id));
    assert_eq!(hub.dispatch(ScrollMetrics::new(10, 6, 100)), 0);

    assert_eq!(*seen.lock().unwrap(), [5]);
    assert!(hub.is_empty());
    assert_eq!(hub.last_metrics(), Some(ScrollMetrics::new(10, 6, 100)));
}

#[test]
fn hub_drives_paginator_through_shared_handle() {
    let paginator = Arc::new(Mutex::new(Paginator::<()>::default()));
    paginator.lock().unwrap().set_source(20);

    let mut hub = ScrollHub::new();
    hub.subscribe({
        let paginator = Arc::clone(&paginator);
        move |m: ScrollMetrics| {
            paginator.lock().unwrap().on_scroll_immediate(m);
        }
    });

    hub.dispatch(far());
    assert_eq!(paginator.lock().unwrap().windower().cursor(), 8);
    hub.dispatch(bottom(0));
    assert_eq!(paginator.lock().unwrap().windower().cursor(), 16);
    assert_eq!(hub.redispatch(), 1);
    assert_eq!(paginator.lock().unwrap().windower().cursor(), 20);
}

struct Recorder(Arc<Mutex<usize>>);

impl ScrollObserver for Recorder {
    fn on_scroll(&mut self, _metrics: ScrollMetrics) {
        *self.0.lock().unwrap() += 1;
    }
}

#[test]
fn hub_accepts_observer_types() {
    let count = Arc::new(Mutex::new(0));
    let mut hub = ScrollHub::new();
    let a = hub.subscribe(Recorder(Arc::clone(&count)));
    let b = hub.subscribe(Recorder(Arc::clone(&count)));
    assert_ne!(a, b);
    hub.dispatch(far());
    assert_eq!(*count.lock().unwrap(), 2);
    hub.clear();
    assert_eq!(hub.redispatch(), 0);
}

fn controller(len: usize, view_size: usize) -> CarouselController {
    CarouselController::from_carousel(CircularCarousel::with_len(
        CarouselOptions::new(view_size),
        len,
    ))
    .with_animation(100, Easing::Linear)
}

#[test]
fn controller_animates_then_settles() {
    let mut c = controller(4, 2);
    assert_eq!(c.position(0), -200.0);

    c.next(0).unwrap();
    assert!(c.is_animating());
    assert_eq!(c.tick(50), Some(-225.0));
    assert_eq!(c.tick(100), Some(-250.0));
    assert!(!c.is_animating());
    assert_eq!(c.tick(150), None);
    assert_eq!(c.position(150), -250.0);
}

#[test]
fn controller_snaps_after_correction_settles() {
    let mut c = controller(4, 4);
    for t in [0u64, 200, 400] {
        c.next(t);
        c.tick(t + 100);
    }
    assert_eq!(c.carousel().index(), 7);

    let step = c.next(1_000).unwrap();
    assert!(step.corrected);
    assert_eq!(c.carousel().index(), 0);

    // Still animating toward the pre-correction slot.
    assert_eq!(c.tick(1_050), Some(-187.5));
    // Settled: snaps to the corrected slot, which shows the same items.
    assert_eq!(c.tick(1_100), Some(0.0));
    assert_eq!(c.position(1_200), 0.0);
}

#[test]
fn step_during_pending_snap_continues_from_equivalent_position() {
    let mut c = controller(4, 4);
    for t in [0u64, 200, 400] {
        c.next(t);
        c.tick(t + 100);
    }
    c.next(1_000); // 7 -> 8, corrected to 0
    let mid = c.position(1_050); // -187.5, in the pre-correction lap

    c.next(1_050); // 0 -> 1
    let lap = 4.0 * 100.0 / 4.0;
    let restarted = c.position(1_050);
    assert_eq!(restarted, mid + 2.0 * lap);
    assert_eq!(c.tick(1_150), Some(-25.0));
}

#[test]
fn controller_ignores_commands_on_static_carousel() {
    let mut c = controller(2, 4);
    assert_eq!(c.next(0), None);
    assert_eq!(c.previous(0), None);
    assert!(!c.is_animating());
    assert_eq!(c.tick(10), None);
}

#[test]
fn autoplay_advances_after_delay() {
    let mut c = controller(3, 1).with_autoplay(Some(Autoplay::new(1_000)));
    assert!(c.is_autoplaying());

    c.tick(0);
    assert_eq!(c.carousel().index(), 3);
    c.tick(999);
    assert_eq!(c.carousel().index(), 3);
    c.tick(1_000);
    assert_eq!(c.carousel().index(), 4);
    c.tick(2_000);
    assert_eq!(c.carousel().index(), 5);
}

#[test]
fn interaction_restarts_autoplay_delay() {
    let mut c = controller(3, 1).with_autoplay(Some(Autoplay::FEATURED));
    c.tick(0);
    c.next(3_000);
    assert_eq!(c.carousel().index(), 4);
    c.tick(4_000);
    assert_eq!(c.carousel().index(), 4);
    c.tick(7_000);
    assert_eq!(c.carousel().index(), 5);
}

#[test]
fn interaction_can_disable_autoplay() {
    let mut c = controller(3, 1)
        .with_autoplay(Some(Autoplay::HERO.with_disable_on_interaction(true)));
    c.tick(0);
    c.previous(100);
    assert!(!c.is_autoplaying());
    c.tick(10_000);
    assert_eq!(c.carousel().index(), 2);

    c.resume_autoplay(10_000);
    c.tick(15_000);
    assert_eq!(c.carousel().index(), 3);
}

#[test]
fn layout_change_cancels_animation_and_resets() {
    let mut c = CarouselController::new(CarouselOptions::responsive());
    c.set_len(6);
    assert_eq!(c.carousel().view_size(), 1);
    c.next(0);
    assert!(c.is_animating());

    assert!(c.on_viewport_width(1_280));
    assert!(!c.is_animating());
    assert_eq!(c.carousel().view_size(), 4);
    assert_eq!(c.carousel().index(), 6);
    assert_eq!(c.position(0), -150.0);
}

#[test]
fn tween_easings_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let t = Tween::new(-100.0, -200.0, 10, 0, easing);
        assert_eq!(t.duration_ms, 1);
        assert_eq!(t.sample(5), -100.0);
        assert_eq!(t.sample(11), -200.0);
    }
}
