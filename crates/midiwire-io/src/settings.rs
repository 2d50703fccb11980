//! Encoder settings, fixed for the lifetime of a `MidiOutput`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Elide the status byte when it repeats the previous channel voice status.
    pub use_running_status: bool,
    /// Receive-side parsing mode. Has no effect on encoding.
    pub use_1byte_parsing: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_running_status: true,
            use_1byte_parsing: true,
        }
    }
}
