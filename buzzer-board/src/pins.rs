use embassy_rp::peripherals::*;

// GPIO2 is channel A of slice 1
pub type BuzzerSlice = PWM_SLICE1;
pub type BuzzerPin = PIN_2;

// active low, pulled up, switch to GND
pub type UserButtonPin = PIN_15;
