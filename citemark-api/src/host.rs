//! Host detection and add-in bootstrap
//!
//! Initialization is two-phase: [`initialize`] decides whether the host can
//! run the add-in at all, and only a [`Readiness::Ready`] value hands out an
//! [`AddIn`] on which triggers can be registered.

use crate::addin::AddIn;
use crate::config::Config;
use log::{debug, info};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Office application hosting the add-in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostType {
    /// Word processor; the only host with a document body to style
    Word,
    /// Spreadsheet
    Excel,
    /// Presentations
    PowerPoint,
    /// Mail client
    Outlook,
    /// Notebook
    OneNote,
    /// Anything else, by name
    Other(String),
}

impl HostType {
    /// True if the add-in can run in this host
    pub fn is_applicable(&self) -> bool {
        matches!(self, HostType::Word)
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostType::Word => f.write_str("Word"),
            HostType::Excel => f.write_str("Excel"),
            HostType::PowerPoint => f.write_str("PowerPoint"),
            HostType::Outlook => f.write_str("Outlook"),
            HostType::OneNote => f.write_str("OneNote"),
            HostType::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for HostType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let host = match s.trim().to_ascii_lowercase().as_str() {
            "word" => HostType::Word,
            "excel" => HostType::Excel,
            "powerpoint" => HostType::PowerPoint,
            "outlook" => HostType::Outlook,
            "onenote" => HostType::OneNote,
            _ => HostType::Other(s.trim().to_string()),
        };
        Ok(host)
    }
}

/// What the runtime reports about its host at startup
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostDescriptor {
    /// Hosting application
    pub host: HostType,
    /// Platform string, if the runtime reports one
    pub platform: Option<String>,
}

impl HostDescriptor {
    /// Descriptor without platform information
    pub fn new(host: HostType) -> Self {
        Self {
            host,
            platform: None,
        }
    }

    /// A word-processor host
    pub fn word() -> Self {
        Self::new(HostType::Word)
    }

    /// Attach a platform string
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}

/// Result of [`initialize`]
#[derive(Debug)]
pub enum Readiness {
    /// The host supports the add-in
    Ready(AddIn),
    /// The host has no document to style; nothing is registered
    NotApplicable(HostType),
}

impl Readiness {
    /// The add-in, if the host is applicable
    pub fn into_add_in(self) -> Option<AddIn> {
        match self {
            Readiness::Ready(add_in) => Some(add_in),
            Readiness::NotApplicable(_) => None,
        }
    }
}

/// Bring the add-in up for a host
pub fn initialize(descriptor: &HostDescriptor, config: Config) -> Readiness {
    if !descriptor.host.is_applicable() {
        debug!("Host {} is not supported; add-in stays idle", descriptor.host);
        return Readiness::NotApplicable(descriptor.host.clone());
    }

    info!(
        "Add-in ready in {}{}",
        descriptor.host,
        descriptor
            .platform
            .as_deref()
            .map(|p| format!(" ({p})"))
            .unwrap_or_default()
    );
    Readiness::Ready(AddIn::new(descriptor.clone(), config))
}
