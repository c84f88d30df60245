//! End-to-end: raw button level → classifier → ClockService → LCD frame,
//! stepped the way the firmware's poll loop runs (10 ms period).

use crate::mock_hw::MockButton;

use alarmclock::adapters::log_display::LogDisplay;
use alarmclock::adapters::log_sink::LogEventSink;
use alarmclock::adapters::soft_rtc::SoftRtc;
use alarmclock::app::menu::Mode;
use alarmclock::app::ports::DisplayLayout;
use alarmclock::app::service::ClockService;
use alarmclock::config::SystemConfig;
use alarmclock::gesture::GestureClassifier;

struct Firmware {
    button: MockButton,
    classifier: GestureClassifier<MockButton>,
    rtc: SoftRtc,
    display: LogDisplay,
    sink: LogEventSink,
    service: ClockService,
    now: u32,
}

impl Firmware {
    fn boot() -> Self {
        let config = SystemConfig::default();
        let button = MockButton::default();
        let mut fw = Self {
            classifier: GestureClassifier::new(config.button, button.clone()),
            button,
            rtc: SoftRtc::new(0),
            display: LogDisplay::new(),
            sink: LogEventSink::new(),
            service: ClockService::new(config),
            now: 0,
        };
        fw.service.start(&mut fw.display, &mut fw.sink);
        fw
    }

    /// Level change plus the any-edge interrupt it raises.
    fn level(&mut self, pressed: bool) {
        self.button.set(pressed);
        self.classifier.on_interrupt(self.now);
    }

    fn run_until(&mut self, until: u32) {
        while self.now <= until {
            self.classifier.advance(self.now);
            if let Some(g) = self.classifier.take_pending_gesture() {
                self.service
                    .handle_gesture(g, &mut self.display, &mut self.sink);
            }
            self.rtc.sync(self.now);
            self.service
                .tick(self.now, &mut self.rtc, &mut self.display, &mut self.sink);
            self.now += 10;
        }
        self.now = until;
    }

    fn click(&mut self, at: u32, hold: u32) {
        self.run_until(at);
        self.level(true);
        self.run_until(at + hold);
        self.level(false);
    }
}

#[test]
fn click_opens_menu_then_double_click_returns_to_clock() {
    let mut fw = Firmware::boot();

    fw.click(0, 50);
    fw.run_until(400);
    assert_eq!(fw.service.mode(), Mode::Menu);
    assert_eq!(fw.display.frame(), ("Menu            ", ">Set Time       "));

    fw.click(400, 50);
    fw.click(550, 50);
    fw.run_until(700);
    assert_eq!(fw.service.mode(), Mode::Standard);
    assert!(fw.service.alarm_enabled());
    assert_eq!(fw.display.frame(), ("00:00:00 *      ", "Alarm ON        "));
}

#[test]
fn long_hold_changes_clock_face() {
    let mut fw = Firmware::boot();

    fw.click(1000, 1100);
    fw.run_until(2200);
    assert_eq!(fw.service.mode(), Mode::Standard);
    assert_eq!(fw.service.layout(), DisplayLayout::Full);
    assert!(fw.display.frame().1.starts_with("01/01/2000 Sat"));

    // The RTC second boundary redraws the face.
    fw.run_until(3000);
    assert!(fw.display.frame().0.starts_with("00:00:03"));
}

#[test]
fn bouncy_contact_still_yields_one_menu_step() {
    let mut fw = Firmware::boot();

    fw.run_until(0);
    for level in [true, false, true, false, true] {
        fw.level(level);
    }
    fw.run_until(80);
    for level in [false, true, false] {
        fw.level(level);
    }
    fw.run_until(1000);

    assert_eq!(fw.service.mode(), Mode::Menu);
    assert_eq!(fw.display.frame().1, ">Set Time       ");
}
