// Pattern: Adapter - plug a USB-only machine into a Lightning-only client.

use std::io::Write;

use crate::error::Result;

// Target interface the client expects
pub trait Computer {
    fn insert_into_lightning_port(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct Client;

impl Client {
    pub fn insert_lightning_connector_into_computer(
        &self,
        computer: &dyn Computer,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "Client inserts Lightning connector into computer.")?;
        computer.insert_into_lightning_port(out)
    }
}

pub struct Mac;

impl Computer for Mac {
    fn insert_into_lightning_port(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Lightning connector is plugged into mac machine.")?;
        Ok(())
    }
}

// Adaptee: only speaks USB
pub struct Windows;

impl Windows {
    pub fn insert_into_usb_port(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "USB connector is plugged into windows machine.")?;
        Ok(())
    }
}

pub struct WindowsAdapter {
    windows_machine: Windows,
}

impl WindowsAdapter {
    pub fn new(windows_machine: Windows) -> Self {
        Self { windows_machine }
    }
}

impl Computer for WindowsAdapter {
    fn insert_into_lightning_port(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adapter converts Lightning signal to USB.")?;
        self.windows_machine.insert_into_usb_port(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let client = Client;

    client.insert_lightning_connector_into_computer(&Mac, out)?;

    let adapter = WindowsAdapter::new(Windows);
    client.insert_lightning_connector_into_computer(&adapter, out)
}
