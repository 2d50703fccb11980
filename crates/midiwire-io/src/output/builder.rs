//! MidiOutput builder for choosing encoder settings.

use crate::settings::Settings;
use crate::transport::Transport;

use super::MidiOutput;

#[derive(Debug, Clone, Default)]
pub struct MidiOutputBuilder {
    settings: Settings,
}

impl MidiOutputBuilder {
    pub fn running_status(mut self, enabled: bool) -> Self {
        self.settings.use_running_status = enabled;
        self
    }

    /// Receive-side option, kept so one settings value can configure both
    /// directions.
    pub fn one_byte_parsing(mut self, enabled: bool) -> Self {
        self.settings.use_1byte_parsing = enabled;
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build<T: Transport>(self, transport: T) -> MidiOutput<T> {
        MidiOutput::with_settings(transport, self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build() {
        let midi = MidiOutputBuilder::default().build(Vec::<u8>::new());
        assert_eq!(midi.settings(), &Settings::default());
        assert_eq!(midi.running_status(), None);
    }

    #[test]
    fn test_build_without_running_status() {
        let midi = MidiOutputBuilder::default()
            .running_status(false)
            .one_byte_parsing(false)
            .build(Vec::<u8>::new());
        assert!(!midi.settings().use_running_status);
        assert!(!midi.settings().use_1byte_parsing);
    }

    #[test]
    fn test_settings_then_override() {
        let settings = Settings {
            use_running_status: false,
            use_1byte_parsing: true,
        };
        let midi = MidiOutputBuilder::default()
            .settings(settings)
            .running_status(true)
            .build(Vec::<u8>::new());
        assert!(midi.settings().use_running_status);
    }
}
