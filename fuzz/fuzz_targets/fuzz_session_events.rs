#![no_main]

use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resizekit_core::event::{InputEvent, KeyCode, KeyEvent, Modifiers, PointerEvent, TouchEvent};
use resizekit_core::{Dimensions, PointerPosition, ResizeDirection};
use resizekit_layout::{DerivedAxisPolicy, SizeConstraints};
use resizekit_runtime::{InputBus, ResizeSession, SessionConfig, SessionPhase, SizeSource};

#[derive(Debug, Arbitrary)]
enum Step {
    PointerDown { handle: u8, x: f32, y: f32 },
    PointerMove { x: f32, y: f32, shift: bool },
    PointerUp,
    TouchStart { handle: u8, x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,
    EmptyTouchMove,
    Enter { shift: bool },
    Escape,
    Anchor { handle: u8, x: f32, y: f32 },
    Sync { width: f32, height: f32 },
    ToggleShortcuts(bool),
}

#[derive(Debug, Arbitrary)]
struct Input {
    min: (u16, u16),
    extra: (u16, u16),
    start: (f32, f32),
    aspect_ratio: bool,
    steps: Vec<Step>,
    teardown_at: Option<u8>,
}

fn handle(index: u8) -> ResizeDirection {
    ResizeDirection::ALL[usize::from(index) % ResizeDirection::ALL.len()]
}

fn within(dims: Dimensions, bounds: &SizeConstraints) -> bool {
    dims.width >= bounds.min_width
        && dims.width <= bounds.max_width
        && dims.height >= bounds.min_height
        && dims.height <= bounds.max_height
}

fuzz_target!(|input: Input| {
    let min_width = f64::from(input.min.0);
    let min_height = f64::from(input.min.1);
    let bounds = SizeConstraints::new(
        min_width,
        min_height,
        min_width + f64::from(input.extra.0),
        min_height + f64::from(input.extra.1),
    );
    let config = SessionConfig::default()
        .with_constraints(bounds)
        .with_aspect_ratio(input.aspect_ratio)
        .with_derived_axis(DerivedAxisPolicy::Clamped);

    let bus = Rc::new(InputBus::new());
    let mut session = ResizeSession::new(
        config,
        SizeSource::Controlled(Dimensions::new(
            f64::from(input.start.0),
            f64::from(input.start.1),
        )),
    )
    .with_surface(bus.clone());

    let teardown_at = input.teardown_at.map(usize::from);
    for (index, step) in input.steps.iter().enumerate() {
        if teardown_at == Some(index) {
            session.teardown();
        }
        match *step {
            Step::PointerDown { handle: h, x, y } => {
                session.pointer_down(handle(h), &PointerEvent::new(f64::from(x), f64::from(y)));
            }
            Step::PointerMove { x, y, shift } => {
                let modifiers = if shift { Modifiers::SHIFT } else { Modifiers::NONE };
                let event = PointerEvent::new(f64::from(x), f64::from(y)).with_modifiers(modifiers);
                session.dispatch(&InputEvent::PointerMove(event));
            }
            Step::PointerUp => {
                session.dispatch(&InputEvent::PointerUp(PointerEvent::new(0.0, 0.0)));
            }
            Step::TouchStart { handle: h, x, y } => {
                session.touch_start(handle(h), &TouchEvent::single(f64::from(x), f64::from(y)));
            }
            Step::TouchMove { x, y } => {
                let event = TouchEvent::single(f64::from(x), f64::from(y));
                session.dispatch(&InputEvent::TouchMove(event));
            }
            Step::TouchEnd => {
                session.dispatch(&InputEvent::TouchEnd(TouchEvent::released()));
            }
            Step::EmptyTouchMove => {
                session.dispatch(&InputEvent::TouchMove(TouchEvent::released()));
            }
            Step::Enter { shift } => {
                let modifiers = if shift { Modifiers::SHIFT } else { Modifiers::NONE };
                session.handle_key(&KeyEvent::new(KeyCode::Enter).with_modifiers(modifiers));
            }
            Step::Escape => {
                session.dispatch(&InputEvent::Key(KeyEvent::new(KeyCode::Escape)));
            }
            Step::Anchor { handle: h, x, y } => {
                let position = PointerPosition::new(f64::from(x), f64::from(y));
                session.set_handle_anchor(handle(h), position);
            }
            Step::Sync { width, height } => {
                session.sync_controlled(Dimensions::new(f64::from(width), f64::from(height)));
            }
            Step::ToggleShortcuts(enabled) => session.set_shortcuts_enabled(enabled),
        }

        let expected = match session.phase() {
            SessionPhase::Dragging => 2,
            SessionPhase::Idle => 0,
        };
        assert_eq!(bus.listener_count(), expected, "listener leak after {step:?}");
        assert_eq!(session.is_resizing(), session.phase() == SessionPhase::Dragging);
        assert!(
            within(session.dimensions(), &bounds),
            "{:?} escaped {bounds:?}",
            session.dimensions()
        );
    }

    session.teardown();
    assert_eq!(bus.listener_count(), 0);
    assert!(!session.is_resizing());
});
