/* ===============================================================================
Pizza order form.
A list of orders with editing cursor. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::loc::{Key, Loc};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Order {
   pub name: String,
   pub size: String,
   pub quantity: u64,
   pub toppings: Vec<String>,
   pub notes: String,
   pub allergies: String,
}

impl Order {
   pub fn quantity_or_one(&self) -> u64 {
      if self.quantity == 0 { 1 } else { self.quantity }
   }

   // Size or dash if not set
   pub fn size_desc(&self) -> &str {
      if self.size.is_empty() { "-" } else { self.size.as_str() }
   }

   // One line for the list of orders
   pub fn list_line(&self, loc: &Loc) -> String {
      let toppings = if self.toppings.is_empty() {
         loc.t(Key::SummaryNoToppings)
      } else {
         self.toppings.join(", ")
      };

      format!("{} • {}: {} • {}: {} • {}",
         self.name,
         loc.t(Key::SummaryQuantity),
         self.quantity_or_one(),
         loc.t(Key::SummarySize),
         self.size_desc(),
         toppings
      )
   }
}

// Result of adding an order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
   Appended(usize),
   Replaced(usize),
}

// Result of a removal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removed {
   pub order: Order,
   // The removed order was being edited
   pub edit_cancelled: bool,
}

#[derive(Clone, Debug, Default)]
pub struct OrderList {
   data: Vec<Order>,
   editing: Option<usize>,
}

impl OrderList {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn len(&self) -> usize {
      self.data.len()
   }

   pub fn is_empty(&self) -> bool {
      self.data.is_empty()
   }

   #[cfg(test)]
   pub fn get(&self, index: usize) -> Option<&Order> {
      self.data.get(index)
   }

   pub fn iter(&self) -> std::slice::Iter<'_, Order> {
      self.data.iter()
   }

   pub fn as_slice(&self) -> &[Order] {
      &self.data
   }

   pub fn editing(&self) -> Option<usize> {
      self.editing
   }

   // Replace the edited order or append a new one
   pub fn add(&mut self, order: Order) -> Commit {
      let res = match self.editing.take() {
         Some(index) => {
            self.data[index] = order;
            Commit::Replaced(index)
         }
         None => {
            self.data.push(order);
            Commit::Appended(self.data.len() - 1)
         }
      };
      log::debug!("orders::add {:?}, total {}", res, self.data.len());
      res
   }

   // Set cursor and return the order to fill the form
   pub fn begin_edit(&mut self, index: usize) -> Option<&Order> {
      let order = self.data.get(index)?;
      self.editing = Some(index);
      Some(order)
   }

   pub fn cancel_edit(&mut self) {
      self.editing = None;
   }

   pub fn remove(&mut self, index: usize) -> Option<Removed> {
      if index >= self.data.len() {
         return None;
      }
      let order = self.data.remove(index);

      let edit_cancelled = match self.editing {
         Some(i) if i == index => {
            self.editing = None;
            true
         }
         Some(i) if i > index => {
            self.editing = Some(i - 1);
            false
         }
         _ => false,
      };

      log::debug!("orders::remove {}, editing {:?}", index, self.editing);
      Some(Removed { order, edit_cancelled })
   }

   pub fn clear(&mut self) {
      self.data.clear();
      self.editing = None;
   }
}
