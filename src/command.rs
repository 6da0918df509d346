use log::warn;
use reqwest::StatusCode;
use std::io::Write;

use crate::error::{Error, Result};
use crate::nature::{self, Fetch, TvButton};
use crate::report::{report_appliances, report_devices, select_appliance_id};

/// Raw switches as they come from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub devices: bool,
    pub appliances: bool,
    pub volume_up: bool,
    pub volume_down: bool,
}

/// The single action a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListDevices,
    VolumeUp,
    VolumeDown,
    ListAppliances,
    NoAction,
}

impl Command {
    /// Earlier checks win: devices, then volume up, then volume down, then appliances.
    pub fn from_flags(flags: Flags) -> Self {
        if flags.devices {
            Command::ListDevices
        } else if flags.volume_up {
            Command::VolumeUp
        } else if flags.volume_down {
            Command::VolumeDown
        } else if flags.appliances {
            Command::ListAppliances
        } else {
            Command::NoAction
        }
    }

    pub fn button(&self) -> Option<TvButton> {
        match self {
            Command::VolumeUp => Some(TvButton::VolUp),
            Command::VolumeDown => Some(TvButton::VolDown),
            _ => None,
        }
    }
}

pub async fn run<F, W>(command: Command, api: &F, out: &mut W) -> Result<()>
where
    F: Fetch + ?Sized,
    W: Write,
{
    match command {
        Command::NoAction => Err(Error::Usage),
        Command::ListDevices => {
            let devices = nature::get_devices(api).await?;
            report_devices(&devices, out)?;
            Ok(())
        }
        Command::ListAppliances => {
            let appliances = nature::get_appliances(api).await?;
            report_appliances(&appliances, out)?;
            Ok(())
        }
        Command::VolumeUp | Command::VolumeDown => {
            let button = match command.button() {
                Some(button) => button,
                None => return Err(Error::Usage),
            };

            let appliances = nature::get_appliances(api).await?;
            let appliance = select_appliance_id(&appliances);
            if appliance.is_empty() {
                // Sent anyway; the service rejects the empty path.
                warn!("no appliance registered, pressing {} on an empty id", button);
            }

            let status = nature::press_tv_button(api, appliance, button).await?;
            if status != StatusCode::OK {
                return Err(Error::RemoteFailure(status));
            }

            writeln!(out, "success")?;
            Ok(())
        }
    }
}
