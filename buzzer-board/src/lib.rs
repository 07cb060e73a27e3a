#![no_std]

pub mod config;
pub mod pins;
pub mod rp_pwm;
pub mod tasks;
