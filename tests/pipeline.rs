//! End-to-end pipeline tests: provider -> context -> aggregator -> query

use std::cell::RefCell;
use std::rc::Rc;

use strata::config::StrataConfig;
use strata::input::bindings::{ActionBinding, ActionBindings, Rect};
use strata::input::{KeyCode, Stick};
use strata::profile::{DeviceType, InputMode, Orientation, Platform};
use strata::provider::HeadlessProvider;
use strata::provider::signals::RawDeviceSignals;
use strata::{HapticKind, OrientationLock, StrataContext, TouchHandling};

const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
     AppleWebKit/605.1.15 Mobile/15E148 Safari/604.1";

fn phone_signals() -> RawDeviceSignals {
    let mut signals = RawDeviceSignals::with_screen(IPHONE_UA, 390.0, 844.0);
    signals.has_touch = true;
    signals
}

fn game_bindings() -> ActionBindings {
    ActionBindings::new()
        .with_action(
            "jump",
            ActionBinding::builder()
                .keys(vec![KeyCode::Space])
                .regions(vec![Rect::new(300.0, 700.0, 90.0, 144.0)])
                .build(),
        )
        .with_action(
            "pause",
            ActionBinding::builder().keys(vec![KeyCode::Escape]).build(),
        )
}

fn phone_context() -> StrataContext {
    StrataContext::new(
        Box::new(HeadlessProvider::new(phone_signals())),
        game_bindings(),
        StrataConfig::default(),
    )
}

#[test]
fn test_startup_classifies_injected_signals() {
    let context = phone_context();
    let profile = context.profile();
    assert_eq!(profile.device_type, DeviceType::Mobile);
    assert_eq!(profile.platform, Platform::Ios);
    assert_eq!(profile.input_mode, InputMode::Touch);
}

#[test]
fn test_touch_region_press_reaches_query() {
    let mut context = phone_context();

    // Finger lands inside the jump region.
    context.input().on_touch_start(1, 340.0, 760.0);
    context.tick();
    assert!(context.query().is_pressed("jump"));
    assert!(!context.query().is_pressed("pause"));

    context.input().on_touch_end(1);
    context.tick();
    assert!(!context.query().is_pressed("jump"));
}

#[test]
fn test_keyboard_press_reaches_query() {
    let mut context = phone_context();
    context.input().on_key(KeyCode::Space, true);
    context.tick();
    assert!(context.query().is_pressed("jump"));

    context.input().on_key(KeyCode::Space, false);
    context.tick();
    assert!(!context.query().is_pressed("jump"));
}

#[test]
fn test_touch_drag_drives_left_stick() {
    let mut context = phone_context();
    context.input().on_touch_start(7, 100.0, 400.0);
    context.input().on_touch_move(7, 196.0, 400.0);
    context.tick();

    let axis = context.query().axis(Stick::Left);
    assert!((axis.x - 1.0).abs() < 1e-5);
    assert!(axis.y.abs() < 1e-5);
    assert!(context.query().axis(Stick::Right).is_neutral());
}

#[test]
fn test_timestamps_strictly_increase_across_ticks() {
    let mut context = phone_context();
    let mut previous = 0;
    for _ in 0..64 {
        let stamp = context.tick().timestamp_us;
        assert!(stamp > previous, "timestamps must strictly increase");
        previous = stamp;
    }
}

#[test]
fn test_snapshot_subscription_and_unsubscribe() {
    let mut context = phone_context();
    let seen = Rc::new(RefCell::new(0u32));

    let counter = seen.clone();
    let id = context.subscribe_snapshot(move |_| *counter.borrow_mut() += 1);
    context.tick();
    context.tick();
    assert_eq!(*seen.borrow(), 2);

    assert!(context.unsubscribe(id));
    context.tick();
    assert_eq!(*seen.borrow(), 2);
    assert!(!context.unsubscribe(id));
}

#[test]
fn test_profile_subscription_fires_only_on_change() {
    let provider = HeadlessProvider::new(phone_signals());
    let handle = provider.handle();
    let mut context = StrataContext::new(
        Box::new(provider),
        game_bindings(),
        StrataConfig::default(),
    );
    let replacements = Rc::new(RefCell::new(Vec::new()));

    let log = replacements.clone();
    context.subscribe_profile(move |profile| log.borrow_mut().push(profile.input_mode));

    // Unchanged signals: refresh must not notify.
    context.notify_resize();
    assert!(replacements.borrow().is_empty());

    // A gamepad appears: the profile flips to hybrid and subscribers hear it.
    let mut signals = phone_signals();
    signals.has_gamepad = true;
    handle.set_signals(signals);
    context.notify_resize();
    assert_eq!(replacements.borrow().as_slice(), &[InputMode::Hybrid]);
}

#[test]
fn test_orientation_change_replaces_profile() {
    let provider = HeadlessProvider::new(phone_signals());
    let handle = provider.handle();
    let mut context = StrataContext::new(
        Box::new(provider),
        game_bindings(),
        StrataConfig::default(),
    );
    assert_eq!(context.profile().orientation, Orientation::Portrait);

    let mut rotated = phone_signals();
    rotated.screen_width = 844.0;
    rotated.screen_height = 390.0;
    handle.set_signals(rotated);
    context.notify_orientation_change();
    assert_eq!(context.profile().orientation, Orientation::Landscape);
}

#[test]
fn test_unsupported_capabilities_are_swallowed() {
    let provider = HeadlessProvider::new(phone_signals());
    provider.set_haptics_supported(false);
    provider.set_orientation_lock_supported(false);
    let mut context = StrataContext::new(
        Box::new(provider),
        ActionBindings::new(),
        StrataConfig::default(),
    );

    assert!(context.trigger_haptic(HapticKind::Impact, None).is_ok());
    assert!(context.lock_orientation(OrientationLock::Landscape).is_ok());
}

#[test]
fn test_transient_failure_is_surfaced() {
    let provider = HeadlessProvider::new(phone_signals());
    provider.induce_transient_failure("actuator busy");
    let mut context = StrataContext::new(
        Box::new(provider),
        ActionBindings::new(),
        StrataConfig::default(),
    );

    assert!(context.trigger_haptic(HapticKind::Selection, None).is_err());
    // The failure was one-shot; the next call lands.
    assert!(context.trigger_haptic(HapticKind::Selection, None).is_ok());
}

#[test]
fn test_touch_handling_passes_through_context() {
    let mut context = phone_context();
    let options = TouchHandling {
        prevent_scrolling: true,
        prevent_zooming: true,
    };
    assert!(context.configure_touch_handling(options).is_ok());
}
