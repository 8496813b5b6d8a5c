// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Handles command argv lists and port ranges in short or long form.

use serde::Deserialize;

use super::ports::PortRange;
use crate::exec::CommandLine;

pub fn deserialize_command<'de, D>(deserializer: D) -> Result<CommandLine, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let argv: Vec<String> = Vec::deserialize(deserializer)?;
    CommandLine::from_vec(argv).ok_or_else(|| serde::de::Error::custom("command cannot be empty"))
}

pub fn deserialize_port_range<'de, D>(deserializer: D) -> Result<PortRange, D::Error>
where
    D: serde::Deserializer<'de>,
{
    RangeEntry::deserialize(deserializer)?
        .into_port_range()
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RangeEntry {
    Simple(String),
    Detailed { start: u16, end: u16 },
}

impl RangeEntry {
    fn into_port_range(self) -> Result<PortRange, String> {
        match self {
            RangeEntry::Simple(s) => PortRange::parse(&s),
            RangeEntry::Detailed { start, end } => PortRange::new(start, end),
        }
    }
}
