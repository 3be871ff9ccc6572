#![forbid(unsafe_code)]

//! End-to-end session scenarios driven through host-style input routing.
//!
//! Run:
//!   cargo test -p resizekit-runtime --test session_scenarios

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use resizekit_core::event::{
    InputEvent, InputSource, KeyCode, KeyEvent, Modifiers, PointerEvent, TouchEvent,
};
use resizekit_core::{Dimensions, PointerPosition, ResizeDirection};
use resizekit_layout::{DerivedAxisPolicy, SizeConstraints};
use resizekit_runtime::{
    InputBus, ListenerChannel, ListenerKind, MeasuredBox, NoopReason, ResizableScope,
    ResizeSession, SessionConfig, SessionEffect, SessionPhase, SizeSource, TriggerMode,
};

fn bounded_config() -> SessionConfig {
    SessionConfig::default().with_constraints(SizeConstraints::new(50.0, 50.0, 400.0, 300.0))
}

fn changes() -> (Rc<RefCell<Vec<Dimensions>>>, impl FnMut(Dimensions) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |dims| sink.borrow_mut().push(dims))
}

#[test]
fn pointer_drag_from_every_handle() {
    let expectations = [
        (ResizeDirection::Top, Dimensions::new(200.0, 130.0)),
        (ResizeDirection::Right, Dimensions::new(230.0, 150.0)),
        (ResizeDirection::Bottom, Dimensions::new(200.0, 170.0)),
        (ResizeDirection::Left, Dimensions::new(170.0, 150.0)),
        (ResizeDirection::TopRight, Dimensions::new(230.0, 130.0)),
        (ResizeDirection::BottomRight, Dimensions::new(230.0, 170.0)),
        (ResizeDirection::BottomLeft, Dimensions::new(170.0, 170.0)),
        (ResizeDirection::TopLeft, Dimensions::new(170.0, 130.0)),
    ];
    for (direction, expected) in expectations {
        let bus = Rc::new(InputBus::new());
        let mut session = ResizeSession::new(
            bounded_config(),
            SizeSource::Controlled(Dimensions::new(200.0, 150.0)),
        )
        .with_surface(bus.clone());

        session.pointer_down(direction, &PointerEvent::new(100.0, 100.0));
        session.dispatch(&InputEvent::PointerMove(PointerEvent::new(115.0, 110.0)));
        session.dispatch(&InputEvent::PointerMove(PointerEvent::new(130.0, 120.0)));
        session.dispatch(&InputEvent::PointerUp(PointerEvent::new(130.0, 120.0)));

        assert_eq!(session.dimensions(), expected, "direction {direction}");
        assert_eq!(bus.listener_count(), 0, "direction {direction}");
    }
}

#[test]
fn listeners_follow_the_drag_source() {
    let bus = Rc::new(InputBus::new());
    let mut session = ResizeSession::new(
        bounded_config(),
        SizeSource::Controlled(Dimensions::new(200.0, 150.0)),
    )
    .with_surface(bus.clone());

    session.touch_start(ResizeDirection::Bottom, &TouchEvent::single(10.0, 10.0));
    assert_eq!(
        bus.count_for(ListenerChannel::new(ListenerKind::Move, InputSource::Touch)),
        1
    );
    assert_eq!(
        bus.count_for(ListenerChannel::new(ListenerKind::End, InputSource::Touch)),
        1
    );
    assert!(bus.wants(&InputEvent::TouchMove(TouchEvent::single(0.0, 0.0))));
    assert!(!bus.wants(&InputEvent::PointerMove(PointerEvent::new(0.0, 0.0))));

    session.dispatch(&InputEvent::TouchEnd(TouchEvent::released()));
    assert_eq!(bus.listener_count(), 0);
    assert_eq!(bus.unknown_detaches(), 0);
}

#[test]
fn clamped_drag_reports_bound_hits() {
    let mut session = ResizeSession::new(
        bounded_config(),
        SizeSource::Controlled(Dimensions::new(200.0, 150.0)),
    );
    session.pointer_down(ResizeDirection::BottomRight, &PointerEvent::new(0.0, 0.0));
    session.dispatch(&InputEvent::PointerMove(PointerEvent::new(1_000.0, -1_000.0)));

    let attrs = session.container_attributes();
    assert_eq!(session.dimensions(), Dimensions::new(400.0, 50.0));
    assert!(attrs.at_max_width);
    assert!(attrs.at_min_height);
    assert!(attrs.is_resizing);
    assert!(session.content_style().suppress_transition);
}

#[test]
fn shift_lock_with_clamped_derived_axis() {
    let mut session = ResizeSession::new(
        bounded_config().with_derived_axis(DerivedAxisPolicy::Clamped),
        SizeSource::Controlled(Dimensions::new(200.0, 100.0)),
    );
    session.pointer_down(ResizeDirection::Right, &PointerEvent::new(0.0, 0.0));
    session.dispatch(&InputEvent::PointerMove(
        PointerEvent::new(500.0, 0.0).with_modifiers(Modifiers::SHIFT),
    ));
    assert_eq!(session.dimensions(), Dimensions::new(400.0, 200.0));

    let mut unclamped = ResizeSession::new(
        SessionConfig::default().with_constraints(SizeConstraints::new(50.0, 50.0, 400.0, 150.0)),
        SizeSource::Controlled(Dimensions::new(200.0, 100.0)),
    );
    unclamped.pointer_down(ResizeDirection::Right, &PointerEvent::new(0.0, 0.0));
    unclamped.dispatch(&InputEvent::PointerMove(
        PointerEvent::new(500.0, 0.0).with_modifiers(Modifiers::SHIFT),
    ));
    assert_eq!(unclamped.dimensions(), Dimensions::new(400.0, 200.0));
}

#[test]
fn trigger_modes_callback_counts() {
    for (mode, expected) in [
        (TriggerMode::OnEveryUpdate, 3),
        (TriggerMode::OnCompletionOnly, 1),
        (TriggerMode::Both, 4),
    ] {
        let (log, sink) = changes();
        let mut session = ResizeSession::new(
            bounded_config().with_trigger_mode(mode),
            SizeSource::Controlled(Dimensions::new(100.0, 100.0)),
        )
        .on_change(sink);
        session.pointer_down(ResizeDirection::Right, &PointerEvent::new(0.0, 0.0));
        for x in [10.0, 20.0, 30.0] {
            session.dispatch(&InputEvent::PointerMove(PointerEvent::new(x, 0.0)));
        }
        session.dispatch(&InputEvent::PointerUp(PointerEvent::new(30.0, 0.0)));

        let log = log.borrow();
        assert_eq!(log.len(), expected, "mode {mode}");
        assert_eq!(log.last().copied(), Some(Dimensions::new(130.0, 100.0)));
    }
}

#[test]
fn measured_session_follows_layout_until_teardown() {
    let target = Rc::new(MeasuredBox::new(Dimensions::new(180.0, 120.0)));
    let mut session = ResizeSession::new(bounded_config(), SizeSource::Measured(target.clone()));
    assert_eq!(session.dimensions(), Dimensions::new(180.0, 120.0));

    target.set_size(Dimensions::new(260.0, 140.0));
    session.observed_resize();
    assert_eq!(session.dimensions(), Dimensions::new(260.0, 140.0));

    session.teardown();
    assert_eq!(target.observer_count(), 0);
    target.set_size(Dimensions::new(10.0, 10.0));
    assert_eq!(
        session.observed_resize().noop_reason(),
        Some(NoopReason::SessionTornDown)
    );
    assert_eq!(session.dimensions(), Dimensions::new(260.0, 140.0));
}

#[test]
fn controlled_session_accepts_host_updates_between_drags() {
    let mut session = ResizeSession::new(
        bounded_config(),
        SizeSource::Controlled(Dimensions::new(100.0, 100.0)),
    );
    session.start_drag(0.0, 0.0, ResizeDirection::Right);
    session.update_drag(50.0, 0.0, false);
    session.end_drag();
    assert_eq!(session.dimensions(), Dimensions::new(150.0, 100.0));

    session.sync_controlled(Dimensions::new(90.0, 80.0));
    session.start_drag(0.0, 0.0, ResizeDirection::Right);
    let update = session.update_drag(10.0, 0.0, false);
    assert_eq!(
        update.effect,
        SessionEffect::Resized {
            dimensions: Dimensions::new(100.0, 80.0),
            changed: true,
            aspect_locked: false,
            notified: false,
        }
    );
}

#[test]
fn keyboard_drag_via_scope() {
    let mut session = ResizeSession::new(
        bounded_config(),
        SizeSource::Controlled(Dimensions::new(120.0, 120.0)),
    );
    session.set_handle_anchor(
        ResizeDirection::BottomRight,
        PointerPosition::new(115.0, 115.0),
    );
    let scope = ResizableScope::provide(session);
    let shared = scope.session().expect("provided");

    let enter = shared
        .borrow_mut()
        .handle_key(&KeyEvent::new(KeyCode::Enter))
        .expect("enter bound");
    assert_eq!(enter.transition.to, SessionPhase::Dragging);
    assert!(scope.view().expect("provided").state.is_resizing);

    shared
        .borrow_mut()
        .dispatch(&InputEvent::PointerMove(PointerEvent::new(135.0, 125.0)));
    shared
        .borrow_mut()
        .dispatch(&InputEvent::Key(KeyEvent::new(KeyCode::Escape)));

    let view = scope.view().expect("provided");
    assert!(!view.state.is_resizing);
    assert_eq!(view.state.dimensions, Dimensions::new(140.0, 130.0));
    assert_eq!(view.content.to_string(), "width: 140px; height: 130px");
}

#[derive(Debug, Clone)]
enum Step {
    Down(ResizeDirection, f64, f64),
    TouchDown(ResizeDirection, f64, f64),
    Move(f64, f64, bool),
    TouchMove(f64, f64),
    Up,
    TouchUp,
}

fn step() -> impl Strategy<Value = Step> {
    let direction = prop::sample::select(ResizeDirection::ALL.to_vec());
    let coord = -2_000.0f64..2_000.0;
    prop_oneof![
        (direction.clone(), coord.clone(), coord.clone()).prop_map(|(d, x, y)| Step::Down(d, x, y)),
        (direction, coord.clone(), coord.clone()).prop_map(|(d, x, y)| Step::TouchDown(d, x, y)),
        (coord.clone(), coord.clone(), any::<bool>()).prop_map(|(x, y, s)| Step::Move(x, y, s)),
        (coord.clone(), coord).prop_map(|(x, y)| Step::TouchMove(x, y)),
        Just(Step::Up),
        Just(Step::TouchUp),
    ]
}

fn apply(session: &mut ResizeSession, step: &Step) {
    match *step {
        Step::Down(direction, x, y) => {
            session.pointer_down(direction, &PointerEvent::new(x, y));
        }
        Step::TouchDown(direction, x, y) => {
            session.touch_start(direction, &TouchEvent::single(x, y));
        }
        Step::Move(x, y, shift) => {
            let modifiers = if shift { Modifiers::SHIFT } else { Modifiers::NONE };
            session.dispatch(&InputEvent::PointerMove(
                PointerEvent::new(x, y).with_modifiers(modifiers),
            ));
        }
        Step::TouchMove(x, y) => {
            session.dispatch(&InputEvent::TouchMove(TouchEvent::single(x, y)));
        }
        Step::Up => {
            session.dispatch(&InputEvent::PointerUp(PointerEvent::new(0.0, 0.0)));
        }
        Step::TouchUp => {
            session.dispatch(&InputEvent::TouchEnd(TouchEvent::released()));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn listeners_never_leak(steps in prop::collection::vec(step(), 0..40)) {
        let bus = Rc::new(InputBus::new());
        let mut session = ResizeSession::new(
            SessionConfig::default().with_derived_axis(DerivedAxisPolicy::Clamped),
            SizeSource::Controlled(Dimensions::new(200.0, 150.0)),
        )
        .with_surface(bus.clone());

        let mut last_id = 0;
        for step in &steps {
            apply(&mut session, step);
            prop_assert!(bus.listener_count() <= 2);
            let expected = if session.phase() == SessionPhase::Dragging { 2 } else { 0 };
            prop_assert_eq!(bus.listener_count(), expected);
            prop_assert!(session.transition_count() > last_id);
            last_id = session.transition_count();
        }

        session.teardown();
        prop_assert_eq!(bus.listener_count(), 0);
        prop_assert_eq!(bus.unknown_detaches(), 0);
    }

    #[test]
    fn dimensions_stay_within_bounds(steps in prop::collection::vec(step(), 0..40)) {
        let constraints = SizeConstraints::new(50.0, 40.0, 600.0, 450.0);
        let mut session = ResizeSession::new(
            SessionConfig::default()
                .with_constraints(constraints)
                .with_derived_axis(DerivedAxisPolicy::Clamped),
            SizeSource::Controlled(Dimensions::new(200.0, 150.0)),
        );
        for step in &steps {
            apply(&mut session, step);
            prop_assert!(constraints.contains(session.dimensions()), "{:?}", session.dimensions());
        }
    }
}
