/* ===============================================================================
Pizza order form.
Order being entered. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use smart_default::SmartDefault;

use crate::error::OrderError;
use crate::loc::Menu;
use crate::orders::Order;

#[derive(SmartDefault, Clone, Debug, PartialEq, Eq)]
pub struct OrderForm {
   pub name: String,
   pub size: String,
   #[default(String::from("1"))]
   pub quantity: String, // as typed
   toppings: Vec<String>, // always in menu order
   preset: Option<usize>, // none for custom
   pub notes: String,
   pub allergies: String,
}

// Leading integer of the text, only positive values
pub fn parse_quantity(s: &str) -> Option<u64> {
   let s = s.trim_start();
   let (negative, rest) = match s.chars().next() {
      Some('-') => (true, &s[1..]),
      Some('+') => (false, &s[1..]),
      _ => (false, s),
   };
   let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
   if digits.is_empty() {
      return None;
   }
   // Too many digits
   let n = digits.parse::<u64>().unwrap_or(u64::MAX);
   if negative || n == 0 { None } else { Some(n) }
}

impl OrderForm {
   pub fn new(menu: &Menu) -> Self {
      let mut res = Self::default();
      res.reset(menu);
      res
   }

   pub fn reset(&mut self, menu: &Menu) {
      *self = Self {
         size: menu.default_size(),
         ..Self::default()
      };
   }

   pub fn toppings(&self) -> &[String] {
      &self.toppings
   }

   pub fn preset(&self) -> Option<usize> {
      self.preset
   }

   // Only sizes from the menu
   pub fn set_size(&mut self, menu: &Menu, size: &str) -> bool {
      if menu.sizes.iter().any(|s| s == size) {
         self.size = String::from(size);
         true
      } else {
         false
      }
   }

   // Returns false for unknown topping
   pub fn toggle_topping(&mut self, menu: &Menu, topping: &str) -> bool {
      if !menu.ingredients.iter().any(|t| t == topping) {
         return false;
      }

      if let Some(pos) = self.toppings.iter().position(|t| t == topping) {
         self.toppings.remove(pos);
      } else {
         let mut selected = self.toppings.clone();
         selected.push(String::from(topping));
         self.set_toppings(menu, &selected);
      }
      true
   }

   // Select given toppings which are in the menu
   pub fn set_toppings(&mut self, menu: &Menu, toppings: &[String]) {
      self.toppings = menu.ingredients.iter()
      .filter(|t| toppings.contains(t))
      .cloned()
      .collect();
   }

   // None means custom and clears toppings
   pub fn apply_preset(&mut self, menu: &Menu, preset: Option<usize>) -> bool {
      match preset {
         None => {
            self.preset = None;
            self.toppings.clear();
            true
         }
         Some(index) => match menu.presets.get(index) {
            Some(p) => {
               self.preset = Some(index);
               self.set_toppings(menu, &p.toppings);
               true
            }
            None => false,
         },
      }
   }

   // Pre-populate from a stored order
   pub fn fill(&mut self, menu: &Menu, order: &Order) {
      self.name = order.name.clone();
      self.quantity = order.quantity_or_one().to_string();
      if !order.size.is_empty() {
         self.size = order.size.clone();
      }
      self.notes = order.notes.clone();
      self.allergies = order.allergies.clone();
      self.preset = None;
      self.set_toppings(menu, &order.toppings);
   }

   // Validated order
   pub fn order(&self) -> Result<Order, OrderError> {
      let name = self.name.trim();
      if name.is_empty() {
         return Err(OrderError::NoName);
      }
      let quantity = parse_quantity(&self.quantity).ok_or(OrderError::NoQuantity)?;

      Ok(Order {
         name: String::from(name),
         size: self.size.clone(),
         quantity,
         toppings: self.toppings.clone(),
         notes: self.notes.trim().to_string(),
         allergies: self.allergies.trim().to_string(),
      })
   }

   // Order from whatever was entered, none if the form is blank
   pub fn draft(&self, placeholder: &str) -> Option<Order> {
      let name = self.name.trim();
      let notes = self.notes.trim();
      let allergies = self.allergies.trim();
      if name.is_empty() && self.toppings.is_empty() && notes.is_empty() && allergies.is_empty() {
         return None;
      }

      Some(Order {
         name: String::from(if name.is_empty() { placeholder } else { name }),
         size: self.size.clone(),
         quantity: parse_quantity(&self.quantity).unwrap_or(1),
         toppings: self.toppings.clone(),
         notes: String::from(notes),
         allergies: String::from(allergies),
      })
   }
}
