use std::io::{self, Write};

use crate::nature::{Appliance, Device};

/// Prints the newest sensor readings, four lines per device, in response order.
pub fn report_devices<W: Write>(devices: &[Device], out: &mut W) -> io::Result<()> {
    for device in devices {
        let events = &device.newest_events;
        writeln!(out, "[Temperature]  {:.6}°C", events.temperature.val)?;
        writeln!(out, "[Humidity]     {:.6}%", events.humidity.val)?;
        writeln!(out, "[Illumination] {:.6}", events.illumination.val)?;
        writeln!(out, "[movement]     {:.6}", events.motion.val)?;
    }

    Ok(())
}

/// First appliance wins, whatever its kind. Empty when there is none.
pub fn select_appliance_id(appliances: &[Appliance]) -> &str {
    appliances
        .first()
        .map(|appliance| appliance.id.as_str())
        .unwrap_or("")
}

pub fn report_appliances<W: Write>(appliances: &[Appliance], out: &mut W) -> io::Result<()> {
    for appliance in appliances {
        writeln!(out, "[Appliance]    {} {}", appliance.id, appliance.core.name)?;

        if !appliance.tv.is_present() {
            continue;
        }

        writeln!(out, "  input: {}", appliance.tv.state.input)?;
        for button in &appliance.tv.buttons {
            writeln!(
                out,
                "  button: {} (label: {}, image: {})",
                button.name, button.label, button.image
            )?;
        }
    }

    Ok(())
}
