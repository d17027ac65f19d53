/* ===============================================================================
Pizza order form.
User-facing errors. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use parse_display::Display;

use crate::loc::{Key, Loc};

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

// Every error is recovered locally with a notice to the user
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
   #[display("empty name")]
   NoName,
   #[display("quantity is not a positive number")]
   NoQuantity,
   #[display("no orders to finalize")]
   NoOrders,
   #[display("no summary to copy")]
   NoSummary,
   #[display("clipboard unavailable")]
   NoClipboard,
}

impl std::error::Error for OrderError {}

impl OrderError {
   pub fn key(&self) -> Key {
      match self {
         Self::NoName => Key::AlertNoName,
         Self::NoQuantity => Key::AlertNoQuantity,
         Self::NoOrders => Key::AlertNoOrders,
         Self::NoSummary => Key::AlertNoSummary,
         Self::NoClipboard => Key::AlertNoClipboard,
      }
   }

   // Translated notice
   pub fn notice(&self, loc: &Loc) -> String {
      loc.t(self.key())
   }
}
