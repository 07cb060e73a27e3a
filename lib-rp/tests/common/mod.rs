#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use ateam_lib_rp::drivers::audio::PwmSlice;
use embedded_hal::delay::DelayNs;

pub const RP2040_CLK_SYS_HZ: u32 = 125_000_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Divider(f32),
    Wrap(u16),
    Level(u16),
    Enabled(bool),
    Delay(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Records every register write into the shared log.
pub struct MockSlice {
    clk_hz: u32,
    log: EventLog,
    pub divider: f32,
    pub wrap: u16,
    pub level: u16,
    pub enabled: bool,
}

impl MockSlice {
    pub fn new(clk_hz: u32, log: EventLog) -> Self {
        MockSlice {
            clk_hz,
            log,
            divider: 0.0,
            wrap: u16::MAX,
            level: 0,
            enabled: false,
        }
    }
}

impl PwmSlice for MockSlice {
    fn clock_hz(&self) -> u32 {
        self.clk_hz
    }

    fn set_divider(&mut self, divider: f32) {
        self.divider = divider;
        self.log.borrow_mut().push(Event::Divider(divider));
    }

    fn set_wrap(&mut self, wrap: u16) {
        self.wrap = wrap;
        self.log.borrow_mut().push(Event::Wrap(wrap));
    }

    fn set_level(&mut self, level: u16) {
        self.level = level;
        self.log.borrow_mut().push(Event::Level(level));
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.log.borrow_mut().push(Event::Enabled(enabled));
    }
}

/// Delay that returns immediately and logs the requested milliseconds.
pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: EventLog) -> Self {
        MockDelay { log }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

pub fn total_delay_ms(log: &EventLog) -> u64 {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Delay(ms) => Some(*ms as u64),
            _ => None,
        })
        .sum()
}

pub fn delays(log: &EventLog) -> Vec<u32> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Delay(ms) => Some(*ms),
            _ => None,
        })
        .collect()
}
