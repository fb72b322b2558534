use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of servo channels carried per tick.
pub const SERVO_CHANNELS: usize = 16;

/// Neutral pulse width for centred channels (µs).
pub const PWM_NEUTRAL: u16 = 1500;
/// Pulse width change giving full deflection on a centred channel (µs).
pub const PWM_HALF_RANGE: f64 = 500.0;
/// Lowest pulse width on a forward-only throttle (µs).
pub const PWM_MIN: u16 = 1000;
/// Pulse width span of a forward-only throttle (µs).
pub const PWM_RANGE: f64 = 1000.0;

const AILERON_CHANNEL: usize = 0;
const ELEVATOR_CHANNEL: usize = 1;
const THROTTLE_CHANNEL: usize = 2;
const RUDDER_CHANNEL: usize = 3;

/// How the throttle channel maps to thrust.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustMode {
    /// 1000-2000 µs maps to 0..1 thrust.
    #[default]
    Forward,
    /// 1000-2000 µs centred on 1500 maps to -1..1 thrust.
    Reversible,
}

impl ThrustMode {
    /// Frame name suffix that selects reversible thrust.
    pub const REVERSE_FRAME_TAG: &'static str = "-revthrust";

    /// Picks the thrust mode from a vehicle variant name such as `plane-revthrust`.
    pub fn from_frame_name(frame: &str) -> Self {
        if frame.contains(Self::REVERSE_FRAME_TAG) {
            ThrustMode::Reversible
        } else {
            ThrustMode::Forward
        }
    }

    /// Normalised throttle from a raw throttle pulse width, clamped to the
    /// mode's valid range.
    pub fn normalise(&self, pwm: u16) -> f64 {
        match self {
            ThrustMode::Reversible => centred(pwm).clamp(-1.0, 1.0),
            ThrustMode::Forward => ((f64::from(pwm) - f64::from(PWM_MIN)) / PWM_RANGE).clamp(0.0, 1.0),
        }
    }
}

/// Raw actuator outputs from the flight controller, one pulse width per channel.
///
/// Channel 1 aileron, 2 elevator, 3 throttle, 4 rudder. Remaining channels are
/// carried through untouched.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServoInputs {
    pub channels: [u16; SERVO_CHANNELS],
}

impl ServoInputs {
    /// Centred surfaces and the throttle at its lowest pulse width.
    pub fn neutral() -> Self {
        let mut channels = [PWM_NEUTRAL; SERVO_CHANNELS];
        channels[THROTTLE_CHANNEL] = PWM_MIN;
        Self { channels }
    }

    /// Builds inputs from the first channels given; the rest stay neutral.
    pub fn from_channels(values: &[u16]) -> Self {
        let mut inputs = Self::neutral();
        for (slot, value) in inputs.channels.iter_mut().zip(values) {
            *slot = *value;
        }
        inputs
    }

    pub fn aileron(&self) -> u16 {
        self.channels[AILERON_CHANNEL]
    }

    pub fn elevator(&self) -> u16 {
        self.channels[ELEVATOR_CHANNEL]
    }

    pub fn throttle(&self) -> u16 {
        self.channels[THROTTLE_CHANNEL]
    }

    pub fn rudder(&self) -> u16 {
        self.channels[RUDDER_CHANNEL]
    }

    pub fn set_throttle(&mut self, pwm: u16) {
        self.channels[THROTTLE_CHANNEL] = pwm;
    }
}

impl Default for ServoInputs {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Normalised control-surface deflections and throttle for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlDeflections {
    /// Aileron, nominally -1..1. Not clamped.
    pub aileron: f64,
    /// Elevator, nominally -1..1. Not clamped.
    pub elevator: f64,
    /// Rudder, nominally -1..1. Not clamped.
    pub rudder: f64,
    /// Throttle, 0..1 or -1..1 depending on [`ThrustMode`].
    pub throttle: f64,
}

impl ControlDeflections {
    pub fn from_servos(servos: &ServoInputs, mode: ThrustMode) -> Self {
        Self {
            aileron: centred(servos.aileron()),
            elevator: centred(servos.elevator()),
            rudder: centred(servos.rudder()),
            throttle: mode.normalise(servos.throttle()),
        }
    }
}

fn centred(pwm: u16) -> f64 {
    (f64::from(pwm) - f64::from(PWM_NEUTRAL)) / PWM_HALF_RANGE
}
