//! HTML control page.

use core::fmt::{self, Write};

use crate::state::{Led, PanelState};

/// Capacity of a rendered page buffer.
///
/// Fits the whole document with both blink parameters at their widest
/// (`-2147483648`).
pub const PAGE_CAPACITY: usize = 4096;

/// A rendered page.
pub type Page = heapless::String<PAGE_CAPACITY>;

const HEAD: &str = concat!(
    "<!DOCTYPE html> <html>\n",
    "<head><meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, user-scalable=no\">\n",
    "<title>LED Control</title>\n",
    "<style>html { font-family: Helvetica; display: inline-block; margin: 0px auto; text-align: center;}\n",
    "body{margin-top: 50px;} h1 {color: #444444;margin: 50px auto 30px;} h3 {color: #444444;margin-bottom: 50px;}\n",
    ".button {display: block;width: 80px;background-color: #3498db;border: none;color: white;padding: 13px 30px;text-decoration: none;font-size: 25px;margin: 0px auto 35px;cursor: pointer;border-radius: 4px;}\n",
    ".button-on {background-color: #3498db;}\n",
    ".button-on:active {background-color: #2980b9;}\n",
    ".button-off {background-color: #34495e;}\n",
    ".button-off:active {background-color: #2c3e50;}\n",
    "p {font-size: 14px;color: #888;margin-bottom: 10px;}\n",
    "</style>\n",
    "</head>\n",
);

/// Render the control page for `state` into `writer`.
///
/// Every LED gets its status line and a single button offering the
/// opposite action.
pub fn render_page(writer: &mut impl Write, state: &PanelState) -> fmt::Result {
    writer.write_str(HEAD)?;
    writer.write_str("<body>\n<h1>ESP32 Web Server</h1>\n")?;

    for led in Led::ALL {
        write_led_control(writer, led, state.is_on(led))?;
    }

    writer.write_str("<h3>Blink LEDs</h3>\n")?;
    writer.write_str("<form action=\"/blink\" method=\"GET\">\n")?;
    writer.write_str("<label for=\"amount\">Blink Amount:</label>\n")?;
    writeln!(
        writer,
        "<input type=\"number\" id=\"amount\" name=\"amount\" min=\"1\" max=\"10\" value=\"{}\">",
        state.blink.amount
    )?;
    writer.write_str("<br><br>\n")?;
    writer.write_str("<label for=\"delay\">Blink Delay (ms):</label>\n")?;
    writeln!(
        writer,
        "<input type=\"number\" id=\"delay\" name=\"delay\" min=\"100\" max=\"2000\" step=\"100\" value=\"{}\">",
        state.blink.delay_ms
    )?;
    writer.write_str("<br><br>\n")?;
    writer.write_str("<input type=\"submit\" value=\"Blink\">\n")?;
    writer.write_str("</form>\n")?;
    writer.write_str("</body>\n</html>\n")
}

fn write_led_control(writer: &mut impl Write, led: Led, on: bool) -> fmt::Result {
    if on {
        writeln!(
            writer,
            "<p>{} Status: ON</p><a class=\"button button-off\" href=\"{}\">OFF</a>",
            led.label(),
            led.off_path()
        )
    } else {
        writeln!(
            writer,
            "<p>{} Status: OFF</p><a class=\"button button-on\" href=\"{}\">ON</a>",
            led.label(),
            led.on_path()
        )
    }
}

/// Body of the 404 response.
pub fn render_not_found(writer: &mut impl Write) -> fmt::Result {
    writer.write_str("Not found <a href='/'>home</a>")
}

/// Render the control page into a fresh [`Page`].
pub fn render(state: &PanelState) -> Result<Page, fmt::Error> {
    let mut page = Page::new();
    render_page(&mut page, state)?;
    Ok(page)
}
