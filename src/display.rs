//! Colored CLI display utilities for the operator session.
//!
//! This module provides functions for printing the menu, registry and log
//! listings, and security alerts to the terminal. All functions are
//! stateless; the security alert is invoked by the caller only after a
//! blocked verdict and is not part of the authorization decision.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::audit::AuditLog;
use crate::device::DeviceIdentity;
use crate::registry::TrustedRegistry;

/// Print the operator menu and the choice prompt.
pub fn print_menu() {
    println!("\n=== USB Device Access Logger ===");
    println!("1. Simulate USB Device Connection");
    println!("2. View Trusted Devices");
    println!("3. View Access Logs");
    println!("4. Export Logs to File");
    println!("5. Exit");
    print!("Enter your choice: ");
    let _ = io::stdout().flush();
}

/// Print the trusted device registry as a table.
pub fn print_trusted_devices(registry: &TrustedRegistry) {
    println!("\n=== Trusted Device List ===");
    println!("{:<12} {}", "Device ID", "Device Type");
    println!("{}", "=".repeat(26));
    for entry in registry.entries() {
        println!("{:<12} {}", entry.device_id, entry.device_type);
    }
}

/// Print the access log history as a table.
pub fn print_access_log(log: &AuditLog) {
    println!("\n=== Access Log History ===");
    if log.is_empty() {
        println!("No access events logged yet.");
        return;
    }

    println!(
        "{:<12} {:<12} {:<20} {:<12} {}",
        "Device ID", "Type", "Timestamp", "Status", "Action"
    );
    println!("{}", "=".repeat(80));
    for record in log.iter() {
        println!(
            "{:<12} {:<12} {:<20} {:<12} {}",
            record.device_id,
            record.device_type,
            record.timestamp,
            record.status.as_str(),
            record.action
        );
    }
}

/// Print a security alert for a blocked device.
///
/// Pure presentation; carries no state and has no effect on the audit log.
pub fn print_security_alert(device: &DeviceIdentity, timestamp: &str) {
    println!("\n{}", "!! SECURITY ALERT !!".red().bold());
    println!("Unauthorized USB device detected!");
    println!("Device ID: {}", device.id);
    println!("Device Type: {}", device.device_type);
    println!("Action: {}", "Connection blocked".red());
    println!("Timestamp: {}", timestamp.dimmed());
    println!("Please contact system administrator.");
    let _ = io::stdout().flush();
}

/// Print the verdict line after a connection attempt.
pub fn print_verdict(device: &DeviceIdentity, authorized: bool) {
    if authorized {
        println!(
            "{} {} ({})",
            "Device AUTHORIZED:".green().bold(),
            device.id,
            device.device_type
        );
    } else {
        println!(
            "{} {} ({}) - Not in trusted list",
            "Device BLOCKED:".red().bold(),
            device.id,
            device.device_type
        );
    }
}
