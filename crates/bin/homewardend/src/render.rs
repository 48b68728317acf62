//! Console rendering: journal lines and the device status board.

use std::fmt::Display;

use chrono::{Local, TimeZone};
use homewarden_domain::event::Event;
use homewarden_domain::registry::DeviceRegistry;

/// `[hh:mm:ss AM] message` in local time.
pub fn event_line(event: &Event) -> String {
    event_line_in(event, &Local)
}

fn event_line_in<Tz>(event: &Event, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "[{}] {}",
        event.timestamp.with_timezone(tz).format("%I:%M:%S %p"),
        event.message
    )
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

/// One line per device: the four climate/safety devices, then the cameras.
pub fn status_board(registry: &DeviceRegistry) -> Vec<String> {
    let mut lines = vec![
        format!("Heater: {}", on_off(registry.heater().is_on())),
        format!(
            "Window Panels: {}",
            if registry.window_panels().is_on() { "Open" } else { "Closed" }
        ),
        format!("Exhaust Fan: {}", on_off(registry.exhaust_fan().is_on())),
        format!("Smoke Alarm: {}", on_off(registry.smoke_alarm().is_on())),
    ];
    lines.extend(registry.cameras().iter().map(|camera| {
        let device = camera.device();
        format!("{}: {}", device.name(), on_off(device.is_on()))
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use homewarden_domain::device::DeviceKey;
    use homewarden_domain::event::EventKind;
    use homewarden_domain::id::ZoneId;

    #[test]
    fn should_prefix_message_with_twelve_hour_clock() {
        let mut event = Event::new(ZoneId::new(), EventKind::Automation, "Exhaust fan deactivated.");
        event.timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            event_line_in(&event, &Utc),
            "[02:05:07 PM] Exhaust fan deactivated."
        );
    }

    #[test]
    fn should_render_morning_times_with_am() {
        let mut event = Event::new(ZoneId::new(), EventKind::SensorCheck, "Sensor Check");
        event.timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();
        assert_eq!(event_line_in(&event, &Utc), "[12:30:00 AM] Sensor Check");
    }

    #[test]
    fn should_render_status_board_for_default_registry() {
        let mut registry = DeviceRegistry::default();
        registry.activate(&DeviceKey::WindowPanels).unwrap();
        registry.activate(&DeviceKey::SmokeAlarm).unwrap();

        assert_eq!(
            status_board(&registry),
            [
                "Heater: OFF",
                "Window Panels: Open",
                "Exhaust Fan: OFF",
                "Smoke Alarm: ON",
                "Kitchen Camera: OFF",
                "Bedroom Camera: OFF",
                "Hallway Camera: OFF",
                "Door Camera: OFF",
            ]
        );
    }
}
