//! Menu / edit controller driven by button gestures.
//!
//! | Mode     | ShortPress          | LongPress             | DoubleClick  |
//! |----------|---------------------|-----------------------|--------------|
//! | Standard | → Menu (item 0)     | —                     | —            |
//! | Menu     | next item (mod 4)   | → Edit (value 0)      | → Standard   |
//! | Edit     | value + 1 (mod 100) | value − 1 (wraps 99)  | → Menu       |
//!
//! Gestures with no entry in the table are left to the
//! [`ClockService`](super::service::ClockService) (alarm toggle, layout cycling).

use crate::gesture::Gesture;

/// Top-level UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Clock face.
    Standard,
    /// Menu navigation.
    Menu,
    /// Editing the selected item.
    Edit,
}

/// Entries of the settings menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuItem {
    SetTime = 0,
    SetDate = 1,
    SetAlarm = 2,
    AlarmOnOff = 3,
}

impl MenuItem {
    pub const COUNT: u8 = 4;

    pub fn from_index(idx: u8) -> Self {
        match idx % Self::COUNT {
            0 => Self::SetTime,
            1 => Self::SetDate,
            2 => Self::SetAlarm,
            _ => Self::AlarmOnOff,
        }
    }

    /// Label on the menu screen.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::SetTime => "Set Time",
            Self::SetDate => "Set Date",
            Self::SetAlarm => "Set Alarm",
            Self::AlarmOnOff => "Alarm On/Off",
        }
    }

    /// Label on the edit screen header.
    pub fn edit_label(self) -> &'static str {
        match self {
            Self::SetTime => "Time",
            Self::SetDate => "Date",
            Self::SetAlarm => "Alarm Time",
            Self::AlarmOnOff => "Alarm State",
        }
    }
}

const EDIT_MODULUS: u8 = 100;

pub struct MenuController {
    mode: Mode,
    menu_index: u8,
    edit_value: u8,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            mode: Mode::Standard,
            menu_index: 0,
            edit_value: 0,
        }
    }

    /// Apply one gesture.
    pub fn handle(&mut self, gesture: Gesture) {
        match (gesture, self.mode) {
            (Gesture::ShortPress, Mode::Standard) => {
                self.mode = Mode::Menu;
                self.menu_index = 0;
            }
            (Gesture::ShortPress, Mode::Menu) => {
                self.menu_index = (self.menu_index + 1) % MenuItem::COUNT;
            }
            (Gesture::ShortPress, Mode::Edit) => {
                self.edit_value = (self.edit_value + 1) % EDIT_MODULUS;
            }

            (Gesture::LongPress, Mode::Menu) => {
                self.mode = Mode::Edit;
                self.edit_value = 0;
            }
            (Gesture::LongPress, Mode::Edit) => {
                self.edit_value = self.edit_value.checked_sub(1).unwrap_or(EDIT_MODULUS - 1);
            }

            (Gesture::DoubleClick, Mode::Menu) => self.mode = Mode::Standard,
            (Gesture::DoubleClick, Mode::Edit) => self.mode = Mode::Menu,

            (Gesture::LongPress | Gesture::DoubleClick, Mode::Standard) => {}
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::from_index(self.menu_index)
    }

    pub fn edit_value(&self) -> u8 {
        self.edit_value
    }
}
