//! Interactive operator menu loop.
//!
//! The menu is the caller of the core operations: it prompts for device
//! identities, invokes the authorization engine, triggers the security
//! alert on blocked verdicts, and dispatches listing and export requests.
//! Input is read from any [`BufRead`] so sessions can be driven in tests.

use std::io::{self, BufRead};

use crate::audit::LogExporter;
use crate::authorizer::AuthorizationEngine;
use crate::clock;
use crate::device::DeviceIdentity;
use crate::display;

/// One of the five operator menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a candidate device and authorize it.
    Connect,
    /// List the trusted registry.
    ListTrusted,
    /// List the audit log.
    ListLog,
    /// Export the audit log to file.
    Export,
    /// Terminate the session.
    Exit,
}

impl MenuChoice {
    /// Map a menu number to a choice.
    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Connect),
            2 => Some(Self::ListTrusted),
            3 => Some(Self::ListLog),
            4 => Some(Self::Export),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the operator loop until exit or end of input.
///
/// Non-numeric choices discard the offending line and reprompt; numeric
/// choices outside 1-5 reprompt as well. End of input terminates the
/// session like an explicit exit.
///
/// # Errors
///
/// Returns an error only when reading from `input` fails.
pub fn run<R: BufRead>(
    engine: &mut AuthorizationEngine,
    exporter: &LogExporter,
    input: &mut R,
) -> io::Result<()> {
    loop {
        display::print_menu();
        let Some(line) = read_line(input)? else {
            break;
        };

        let Ok(number) = line.trim().parse::<u32>() else {
            println!("Invalid input. Please enter a number.");
            continue;
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            println!("Invalid choice. Please enter 1-5.");
            continue;
        };

        match choice {
            MenuChoice::Connect => connect_device(engine, input)?,
            MenuChoice::ListTrusted => display::print_trusted_devices(engine.registry()),
            MenuChoice::ListLog => display::print_access_log(engine.log()),
            MenuChoice::Export => export_log(engine, exporter),
            MenuChoice::Exit => break,
        }
    }

    println!("Exiting USB Device Access Logger...");
    println!("Final log count: {} entries", engine.log().len());
    Ok(())
}

/// Prompt for a candidate device and run it through the engine.
fn connect_device<R: BufRead>(
    engine: &mut AuthorizationEngine,
    input: &mut R,
) -> io::Result<()> {
    let Some(device) = prompt_device(input)? else {
        return Ok(());
    };

    let verdict = engine.authorize(&device);
    display::print_verdict(&device, !verdict.is_blocked());
    if verdict.is_blocked() {
        display::print_security_alert(&device, &clock::current_timestamp());
    }
    Ok(())
}

/// Prompt for a device ID and type.
///
/// Fields are whitespace-delimited tokens, truncated to their caps at this
/// boundary. Returns `None` when input ends or a field is missing.
fn prompt_device<R: BufRead>(input: &mut R) -> io::Result<Option<DeviceIdentity>> {
    println!("\n=== USB Device Connection Detected ===");

    print!("Enter Device ID: ");
    flush_stdout();
    let Some(id) = read_token(input)? else {
        println!("Error reading device ID");
        return Ok(None);
    };

    print!("Enter Device Type: ");
    flush_stdout();
    let Some(device_type) = read_token(input)? else {
        println!("Error reading device type");
        return Ok(None);
    };

    let device = DeviceIdentity::new(id, device_type);
    println!(
        "Device registered: ID={}, Type={}",
        device.id, device.device_type
    );
    Ok(Some(device))
}

/// Export the audit log and report the outcome to the operator.
fn export_log(engine: &AuthorizationEngine, exporter: &LogExporter) {
    match exporter.export(engine.log()) {
        Ok(count) => {
            println!(
                "Access log exported to {}",
                exporter.destination().display()
            );
            println!("Total entries logged: {count}");
        }
        Err(e) => {
            tracing::error!(error = %e, "Export failed");
            println!("Error: {e}");
        }
    }
}

/// Read one line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// Read the first whitespace-delimited token of the next line.
fn read_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    Ok(line.split_whitespace().next().map(String::from))
}

/// Flush stdout so a same-line prompt appears before the read.
fn flush_stdout() {
    let _ = io::Write::flush(&mut io::stdout());
}
