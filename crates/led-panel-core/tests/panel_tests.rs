//! Handler behaviour against recording pins and delays.

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use embassy_futures::block_on;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use led_panel_core::{BlinkParameters, Led, LedPanel, PanelState, Response, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Write(Led, bool),
    Delay(u32),
}

type EventLog = Rc<RefCell<Vec<Event>>>;

struct RecordingPin {
    led: Led,
    log: EventLog,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Write(self.led, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Write(self.led, true));
        Ok(())
    }
}

struct RecordingDelay {
    log: EventLog,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

type TestPanel = LedPanel<RecordingPin, RecordingDelay>;

fn panel() -> (TestPanel, EventLog) {
    let log = EventLog::default();
    let panel = LedPanel::new(
        RecordingPin {
            led: Led::Led1,
            log: log.clone(),
        },
        RecordingPin {
            led: Led::Led2,
            log: log.clone(),
        },
        RecordingDelay { log: log.clone() },
    );
    (panel, log)
}

fn request(panel: &mut TestPanel, target: &str) -> Response {
    block_on(panel.handle(Route::resolve(target))).unwrap()
}

#[test]
fn boot_state_is_off_with_default_blink() {
    let (panel, log) = panel();

    assert_eq!(*panel.state(), PanelState::new());
    assert!(!panel.state().led1);
    assert!(!panel.state().led2);
    assert_eq!(panel.state().blink, BlinkParameters::new(5, 500));
    assert!(log.borrow().is_empty());
}

#[test]
fn toggle_endpoints_set_single_led() {
    let (mut panel, _) = panel();

    request(&mut panel, "/led1on");
    assert!(panel.state().led1);
    assert!(!panel.state().led2);

    request(&mut panel, "/led2on");
    assert!(panel.state().led1);
    assert!(panel.state().led2);

    request(&mut panel, "/led1off");
    assert!(!panel.state().led1);
    assert!(panel.state().led2);

    let response = request(&mut panel, "/led2off");
    assert_eq!(response, Response::Page(PanelState::new()));
    assert_eq!(response.status(), 200);
}

#[test]
fn toggle_endpoints_are_idempotent() {
    for target in ["/led1on", "/led1off", "/led2on", "/led2off"] {
        let (mut once, _) = panel();
        let (mut twice, _) = panel();

        request(&mut once, target);
        request(&mut twice, target);
        request(&mut twice, target);

        assert_eq!(once.state(), twice.state(), "{target}");
    }
}

#[test]
fn toggle_handlers_do_not_touch_pins() {
    let (mut panel, log) = panel();

    request(&mut panel, "/led1on");
    request(&mut panel, "/led2on");

    assert!(log.borrow().is_empty());
}

#[test]
fn root_resets_both_leds() {
    let prior = [(false, false), (true, false), (false, true), (true, true)];
    for (led1, led2) in prior {
        let (mut panel, _) = panel();
        if led1 {
            request(&mut panel, "/led1on");
        }
        if led2 {
            request(&mut panel, "/led2on");
        }

        let response = request(&mut panel, "/");

        assert!(!panel.state().led1);
        assert!(!panel.state().led2);
        assert_eq!(response.status(), 200);
    }
}

#[test]
fn root_keeps_blink_parameters() {
    let (mut panel, _) = panel();
    request(&mut panel, "/blink?amount=2&delay=300");

    request(&mut panel, "/");

    assert_eq!(panel.state().blink, BlinkParameters::new(2, 300));
}

#[test]
fn blink_toggles_amount_times_without_delay() {
    let (mut panel, log) = panel();

    let response = request(&mut panel, "/blink?amount=3&delay=0");

    assert!(panel.state().led1);
    assert!(panel.state().led2);
    assert_eq!(panel.state().blink, BlinkParameters::new(3, 0));
    assert_eq!(response, Response::Page(*panel.state()));
    assert_eq!(
        *log.borrow(),
        vec![
            Event::Write(Led::Led1, true),
            Event::Write(Led::Led2, true),
            Event::Delay(0),
            Event::Write(Led::Led1, false),
            Event::Write(Led::Led2, false),
            Event::Delay(0),
            Event::Write(Led::Led1, true),
            Event::Write(Led::Led2, true),
            Event::Delay(0),
        ]
    );
}

#[test]
fn blink_inverts_each_led_independently() {
    let (mut panel, _) = panel();
    request(&mut panel, "/led1on");

    request(&mut panel, "/blink?amount=1&delay=0");

    assert!(!panel.state().led1);
    assert!(panel.state().led2);
}

#[test]
fn blink_waits_delay_after_every_step() {
    let (mut panel, log) = panel();

    request(&mut panel, "/blink?amount=4&delay=250");

    let delays: Vec<_> = log
        .borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Delay(ms) => Some(*ms),
            Event::Write(..) => None,
        })
        .collect();
    assert_eq!(delays, vec![250; 4]);
    // even number of steps returns to the starting levels
    assert!(!panel.state().led1);
    assert!(!panel.state().led2);
}

#[test]
fn blink_with_garbage_parameters_does_nothing() {
    let (mut panel, log) = panel();
    request(&mut panel, "/led2on");
    let before = *panel.state();

    let response = request(&mut panel, "/blink?amount=abc&delay=xyz");

    assert_eq!(panel.state().blink, BlinkParameters::new(0, 0));
    assert_eq!(panel.state().led1, before.led1);
    assert_eq!(panel.state().led2, before.led2);
    assert!(log.borrow().is_empty());
    assert_eq!(response.status(), 200);
}

#[test]
fn blink_with_negative_values_runs_no_steps() {
    let (mut panel, log) = panel();

    request(&mut panel, "/blink?amount=-3&delay=100");

    assert_eq!(panel.state().blink, BlinkParameters::new(-3, 100));
    assert!(log.borrow().is_empty());
}

#[test]
fn blink_with_negative_delay_does_not_wait() {
    let (mut panel, log) = panel();

    request(&mut panel, "/blink?amount=1&delay=-50");

    assert!(log.borrow().contains(&Event::Delay(0)));
    assert_eq!(panel.state().blink.delay_ms, -50);
}

#[test]
fn unknown_path_is_not_found_and_keeps_state() {
    let (mut panel, log) = panel();
    request(&mut panel, "/led1on");
    let before = *panel.state();

    let response = request(&mut panel, "/xyz");

    assert_eq!(response, Response::NotFound);
    assert_eq!(response.status(), 404);
    assert_eq!(*panel.state(), before);
    assert!(log.borrow().is_empty());
}

#[test]
fn apply_pins_writes_current_levels() {
    let (mut panel, log) = panel();
    request(&mut panel, "/led2on");

    panel.apply_pins().unwrap();
    panel.apply_pins().unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Write(Led::Led1, false),
            Event::Write(Led::Led2, true),
            Event::Write(Led::Led1, false),
            Event::Write(Led::Led2, true),
        ]
    );
}
