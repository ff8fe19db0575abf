/// One of the two controlled outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Led1,
    Led2,
}

impl Led {
    /// Both LEDs in page order.
    pub const ALL: [Led; 2] = [Led::Led1, Led::Led2];

    /// Label used on the page and in logs.
    pub const fn label(self) -> &'static str {
        match self {
            Led::Led1 => "LED1",
            Led::Led2 => "LED2",
        }
    }

    /// Path that switches this LED on.
    pub const fn on_path(self) -> &'static str {
        match self {
            Led::Led1 => "/led1on",
            Led::Led2 => "/led2on",
        }
    }

    /// Path that switches this LED off.
    pub const fn off_path(self) -> &'static str {
        match self {
            Led::Led1 => "/led1off",
            Led::Led2 => "/led2off",
        }
    }
}

/// Count and per-step delay of the blink action.
///
/// Values are stored exactly as parsed from the request, negative ones
/// included. The page advertises 1-10 blinks and 100-2000 ms but nothing
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkParameters {
    pub amount: i32,
    pub delay_ms: i32,
}

impl BlinkParameters {
    pub const DEFAULT_AMOUNT: i32 = 5;
    pub const DEFAULT_DELAY_MS: i32 = 500;

    pub const fn new(amount: i32, delay_ms: i32) -> Self {
        Self { amount, delay_ms }
    }

    /// Number of toggle steps to run. Negative amounts run none.
    #[allow(clippy::cast_sign_loss)]
    pub const fn iterations(&self) -> u32 {
        if self.amount > 0 { self.amount as u32 } else { 0 }
    }

    /// Delay after each toggle step. Negative delays do not wait.
    #[allow(clippy::cast_sign_loss)]
    pub const fn step_delay_ms(&self) -> u32 {
        if self.delay_ms > 0 { self.delay_ms as u32 } else { 0 }
    }
}

impl Default for BlinkParameters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AMOUNT, Self::DEFAULT_DELAY_MS)
    }
}

/// Process-wide panel state: both LED levels and the last blink parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub led1: bool,
    pub led2: bool,
    pub blink: BlinkParameters,
}

impl PanelState {
    /// Boot state: both LEDs off, default blink parameters.
    pub const fn new() -> Self {
        Self {
            led1: false,
            led2: false,
            blink: BlinkParameters::new(
                BlinkParameters::DEFAULT_AMOUNT,
                BlinkParameters::DEFAULT_DELAY_MS,
            ),
        }
    }

    pub const fn is_on(&self, led: Led) -> bool {
        match led {
            Led::Led1 => self.led1,
            Led::Led2 => self.led2,
        }
    }

    pub fn set(&mut self, led: Led, on: bool) {
        match led {
            Led::Led1 => self.led1 = on,
            Led::Led2 => self.led2 = on,
        }
    }

    /// Switch both LEDs off. Blink parameters are kept.
    pub fn reset(&mut self) {
        self.led1 = false;
        self.led2 = false;
    }

    /// Invert both LEDs, one blink step.
    pub fn invert(&mut self) {
        self.led1 = !self.led1;
        self.led2 = !self.led2;
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
