//! Request handlers.
//!
//! [`LedPanel`] owns the two output pins, the delay provider used by the
//! blink loop and the [`PanelState`]. Handlers take `&mut self`, so whoever
//! owns the panel serializes requests.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;

use crate::{
    http::StatusCode,
    route::Route,
    state::{BlinkParameters, Led, PanelState},
};

/// Outcome of a handled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Control page for the contained state
    Page(PanelState),
    /// Unknown path
    NotFound,
}

impl Response {
    /// Status code the response is sent with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Response::Page(_) => 200,
            Response::NotFound => 404,
        }
    }
}

/// Pin driver failure while applying the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError<E> {
    Pin(Led, E),
}

pub struct LedPanel<P: OutputPin, D: DelayNs> {
    led1: P,
    led2: P,
    delay: D,
    state: PanelState,
}

impl<P: OutputPin, D: DelayNs> LedPanel<P, D> {
    /// Create a panel in the boot state. Pins are not written until the
    /// first [`apply_pins`](Self::apply_pins).
    pub const fn new(led1: P, led2: P, delay: D) -> Self {
        Self {
            led1,
            led2,
            delay,
            state: PanelState::new(),
        }
    }

    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    /// Handle one resolved request.
    pub async fn handle(&mut self, route: Route) -> Result<Response, PanelError<P::Error>> {
        match route {
            Route::Root => self.reset(),
            Route::SetLed { led, on } => self.set_led(led, on),
            Route::Blink(params) => self.blink(params).await?,
            Route::NotFound => return Ok(Response::NotFound),
        }
        Ok(Response::Page(self.state))
    }

    /// Switch both LEDs off.
    pub fn reset(&mut self) {
        self.state.reset();
        #[cfg(feature = "log")]
        log::info!("panel: LED1 OFF | LED2 OFF");
    }

    pub fn set_led(&mut self, led: Led, on: bool) {
        self.state.set(led, on);
        #[cfg(feature = "log")]
        log::info!("panel: {} {}", led.label(), if on { "ON" } else { "OFF" });
    }

    /// Store `params` and run the blink loop: invert both LEDs, write the
    /// pins, wait, `params.amount` times.
    ///
    /// The caller is held for `amount * delay` milliseconds.
    pub async fn blink(&mut self, params: BlinkParameters) -> Result<(), PanelError<P::Error>> {
        self.state.blink = params;
        #[cfg(feature = "log")]
        log::info!(
            "panel: blink amount={} delay={}ms",
            params.amount,
            params.delay_ms
        );

        for _ in 0..params.iterations() {
            self.state.invert();
            self.apply_pins()?;
            self.delay.delay_ms(params.step_delay_ms()).await;
        }
        Ok(())
    }

    /// Write both LED levels to their pins.
    pub fn apply_pins(&mut self) -> Result<(), PanelError<P::Error>> {
        self.led1
            .set_state(PinState::from(self.state.led1))
            .map_err(|e| PanelError::Pin(Led::Led1, e))?;
        self.led2
            .set_state(PinState::from(self.state.led2))
            .map_err(|e| PanelError::Pin(Led::Led2, e))
    }
}
