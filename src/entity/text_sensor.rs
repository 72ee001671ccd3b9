//! Text sensor entity.
//!
//! Decodes a group telegram into a display string. The [`TextDpt`] selects
//! the codec: raw DPT 16 strings pass through, the time and date types are
//! rendered in a fixed human-readable form ("Mon 14:30:45", "2024-10-20",
//! "2024-10-20 14:30:45" with fault and DST markers appended).

use core::fmt::Write;

use crate::addressing::GroupAddress;
use crate::dpt::{dpt10, dpt11, dpt16, dpt19};
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{id_matches, make_id, EntityName, GaId};

/// Rendered-text capacity. The longest form is the date-time with both
/// markers: "2024-10-20 14:30:45 [FAULT] [DST]".
pub const MAX_TEXT_LENGTH: usize = 48;

pub type Text = heapless::String<MAX_TEXT_LENGTH>;

const DAY_NAMES: [&str; 8] = ["", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Datapoint types a text sensor can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextDpt {
    /// DPT 16.001, character string
    #[default]
    String16,
    /// DPT 10.001, time of day
    TimeOfDay,
    /// DPT 11.001, date
    Date,
    /// DPT 19.001, date and time
    DateTime,
}

impl TextDpt {
    pub const fn dpt_identifier(&self) -> &'static str {
        match self {
            TextDpt::String16 => "16.001",
            TextDpt::TimeOfDay => "10.001",
            TextDpt::Date => "11.001",
            TextDpt::DateTime => "19.001",
        }
    }
}

#[derive(Debug)]
pub struct TextSensor {
    name: EntityName,
    state_ga_id: GaId,
    dpt: TextDpt,
    text: Option<Text>,
}

impl TextSensor {
    /// Create a text sensor entity.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(name: &str, state_ga_id: &str, dpt: TextDpt) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            state_ga_id: make_id(state_ga_id)?,
            dpt,
            text: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dpt(&self) -> TextDpt {
        self.dpt
    }

    /// Last rendered text, `None` until the first telegram.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn handle_telegram(
        &mut self,
        registry: &GroupAddressRegistry,
        address: GroupAddress,
        data: &[u8],
    ) {
        if !id_matches(registry, &self.state_ga_id, address) {
            return;
        }

        let text = render(self.dpt, data);
        knx_log!(debug, "'{}': received '{}'", self.name.as_str(), text.as_str());
        self.text = Some(text);
    }
}

/// Render a payload with the selected codec.
///
/// All codecs are total, so rendering always produces a string; the write
/// results are discarded because the capacity covers the longest form.
fn render(dpt: TextDpt, data: &[u8]) -> Text {
    let mut text = Text::new();

    match dpt {
        TextDpt::String16 => {
            let _ = text.push_str(&dpt16::decode(data));
        }
        TextDpt::TimeOfDay => {
            let time = dpt10::decode(data);
            if (1..=7).contains(&time.day_of_week) {
                let _ = write!(
                    text,
                    "{} {:02}:{:02}:{:02}",
                    DAY_NAMES[usize::from(time.day_of_week)],
                    time.hour,
                    time.minute,
                    time.second
                );
            } else {
                let _ = write!(text, "{:02}:{:02}:{:02}", time.hour, time.minute, time.second);
            }
        }
        TextDpt::Date => {
            let date = dpt11::decode(data);
            let _ = write!(text, "{:04}-{:02}-{:02}", date.year, date.month, date.day);
        }
        TextDpt::DateTime => {
            let dt = dpt19::decode(data);
            let _ = write!(
                text,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second
            );
            if dt.fault {
                let _ = text.push_str(" [FAULT]");
            }
            if dt.summer_time {
                let _ = text.push_str(" [DST]");
            }
        }
    }

    text
}
