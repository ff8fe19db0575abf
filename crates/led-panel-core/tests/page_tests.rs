use led_panel_core::{
    BlinkParameters, PAGE_CAPACITY, PanelState, render, render_not_found, render_page,
};

fn state(led1: bool, led2: bool) -> PanelState {
    PanelState {
        led1,
        led2,
        ..PanelState::new()
    }
}

fn rendered(state: &PanelState) -> String {
    let mut html = String::new();
    render_page(&mut html, state).unwrap();
    html
}

#[test]
fn page_offers_opposite_action_for_each_led() {
    for (led1, led2) in [(false, false), (true, false), (false, true), (true, true)] {
        let html = rendered(&state(led1, led2));

        for (n, on) in [(1, led1), (2, led2)] {
            let status_on = format!("<p>LED{n} Status: ON</p>");
            let status_off = format!("<p>LED{n} Status: OFF</p>");
            let link_off = format!("href=\"/led{n}off\">OFF</a>");
            let link_on = format!("href=\"/led{n}on\">ON</a>");

            if on {
                assert_eq!(html.matches(&status_on).count(), 1);
                assert_eq!(html.matches(&link_off).count(), 1);
                assert!(!html.contains(&status_off));
                assert!(!html.contains(&link_on));
            } else {
                assert_eq!(html.matches(&status_off).count(), 1);
                assert_eq!(html.matches(&link_on).count(), 1);
                assert!(!html.contains(&status_on));
                assert!(!html.contains(&link_off));
            }
        }
    }
}

#[test]
fn page_is_a_complete_document() {
    let html = rendered(&PanelState::new());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>LED Control</title>"));
    assert!(html.contains("<h1>ESP32 Web Server</h1>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn form_is_prefilled_with_blink_parameters() {
    let html = rendered(&PanelState::new());
    assert!(html.contains("<form action=\"/blink\" method=\"GET\">"));
    assert!(html.contains("name=\"amount\" min=\"1\" max=\"10\" value=\"5\">"));
    assert!(html.contains("name=\"delay\" min=\"100\" max=\"2000\" step=\"100\" value=\"500\">"));
    assert!(html.contains("<input type=\"submit\" value=\"Blink\">"));

    let html = rendered(&PanelState {
        blink: BlinkParameters::new(0, -20),
        ..PanelState::new()
    });
    assert!(html.contains("name=\"amount\" min=\"1\" max=\"10\" value=\"0\">"));
    assert!(html.contains("step=\"100\" value=\"-20\">"));
}

#[test]
fn rendering_is_deterministic() {
    let state = state(true, false);
    assert_eq!(rendered(&state), rendered(&state));
}

#[test]
fn widest_page_fits_buffer() {
    let widest = PanelState {
        led1: true,
        led2: true,
        blink: BlinkParameters::new(i32::MIN, i32::MIN),
    };

    let page = render(&widest).unwrap();

    assert!(page.len() <= PAGE_CAPACITY);
    assert_eq!(page.as_str(), rendered(&widest));
}

#[test]
fn not_found_body_links_home() {
    let mut body = String::new();
    render_not_found(&mut body).unwrap();

    assert!(body.starts_with("Not found"));
    assert!(body.contains("<a href='/'>"));
}
