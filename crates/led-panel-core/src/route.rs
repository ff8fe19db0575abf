use crate::{
    query::{int_param, split_target},
    state::{BlinkParameters, Led},
};

/// Resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - reset both LEDs off
    Root,
    /// `/led1on`, `/led1off`, `/led2on`, `/led2off`
    SetLed { led: Led, on: bool },
    /// `/blink?amount=N&delay=M`
    Blink(BlinkParameters),
    /// Anything else
    NotFound,
}

impl Route {
    /// Resolve a raw request target (`/path?query`).
    ///
    /// Only the path selects the route; the query is read for `/blink` only.
    pub fn resolve(target: &str) -> Self {
        let (path, query) = split_target(target);
        match path {
            "/" => Route::Root,
            "/led1on" => Route::SetLed { led: Led::Led1, on: true },
            "/led1off" => Route::SetLed { led: Led::Led1, on: false },
            "/led2on" => Route::SetLed { led: Led::Led2, on: true },
            "/led2off" => Route::SetLed { led: Led::Led2, on: false },
            "/blink" => Route::Blink(BlinkParameters::new(
                int_param(query, "amount"),
                int_param(query, "delay"),
            )),
            _ => Route::NotFound,
        }
    }

    /// Whether the handler keeps the connection idle while it runs.
    ///
    /// A blink holds the client for `amount * delay` milliseconds with no
    /// traffic, which can outlast any fixed socket idle timeout.
    pub const fn holds_connection(&self) -> bool {
        matches!(self, Route::Blink(_))
    }
}
