/* ===============================================================================
Pizza order form.
Form session FSM. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::error::OrderError;
use crate::export::Clipboard;
use crate::form::OrderForm;
use crate::loc::{Key, Loc, Menu};
use crate::orders::{Commit, OrderList};
use crate::summary;

// Redraw callbacks, called after every state change
pub trait View {
   fn render_list(&mut self, orders: &OrderList, loc: &Loc);
   fn render_form(&mut self, form: &OrderForm, editing: Option<usize>, menu: &Menu, loc: &Loc);
   fn show_summary(&mut self, text: &str, loc: &Loc);
   fn notify(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
   Entry, // filling orders
   Summary, // form hidden, summary displayed
}

pub struct Session<V: View> {
   loc: Loc,
   menu: Menu,
   orders: OrderList,
   form: OrderForm,
   mode: Mode,
   last_summary: Option<String>,
   view: V,
}

impl<V: View> Session<V> {
   pub fn new(loc: Loc, view: V) -> Self {
      let menu = Menu::from_loc(&loc);
      let form = OrderForm::new(&menu);
      let mut res = Self {
         loc,
         menu,
         orders: OrderList::new(),
         form,
         mode: Mode::Entry,
         last_summary: None,
         view,
      };
      res.restart();
      res
   }

   #[cfg(test)]
   pub fn orders(&self) -> &OrderList {
      &self.orders
   }

   #[cfg(test)]
   pub fn form(&self) -> &OrderForm {
      &self.form
   }

   pub fn mode(&self) -> Mode {
      self.mode
   }

   #[cfg(test)]
   pub fn last_summary(&self) -> Option<&str> {
      self.last_summary.as_deref()
   }

   #[cfg(test)]
   pub fn view(&self) -> &V {
      &self.view
   }

   // Back to an empty form and list, the last summary is kept for copying
   pub fn restart(&mut self) {
      self.mode = Mode::Entry;
      self.orders.clear();
      self.form.reset(&self.menu);
      self.view.render_list(&self.orders, &self.loc);
      self.redraw_form();
   }

   // New translations rebuild the menu and restart
   pub fn set_loc(&mut self, loc: Loc) {
      self.menu = Menu::from_loc(&loc);
      self.loc = loc;
      self.restart();
   }

   fn redraw_form(&mut self) {
      self.view.render_form(&self.form, self.orders.editing(), &self.menu, &self.loc);
   }

   fn reset_form(&mut self) {
      self.orders.cancel_edit();
      self.form.reset(&self.menu);
      self.redraw_form();
   }

   fn report(&mut self, err: OrderError) -> OrderError {
      log::info!("states::report {}", err);
      let text = err.notice(&self.loc);
      self.view.notify(&text);
      err
   }

   pub fn edit_form<F, R>(&mut self, f: F) -> R
   where F: FnOnce(&mut OrderForm, &Menu) -> R
   {
      let res = f(&mut self.form, &self.menu);
      self.redraw_form();
      res
   }

   // Store the form as a new order or over the edited one
   pub fn add(&mut self) -> Result<Commit, OrderError> {
      let order = self.form.order().map_err(|e| self.report(e))?;
      let res = self.orders.add(order);
      self.reset_form();
      self.view.render_list(&self.orders, &self.loc);
      Ok(res)
   }

   pub fn begin_edit(&mut self, index: usize) -> bool {
      let order = match self.orders.begin_edit(index) {
         Some(order) => order.clone(),
         None => return false,
      };
      self.form.fill(&self.menu, &order);
      self.redraw_form();
      true
   }

   pub fn remove(&mut self, index: usize) -> bool {
      let editing = self.orders.editing();
      let removed = match self.orders.remove(index) {
         Some(removed) => removed,
         None => return false,
      };
      if removed.edit_cancelled {
         self.reset_form();
      } else if self.orders.editing() != editing {
         // Edited order got a new number
         self.redraw_form();
      }
      self.view.render_list(&self.orders, &self.loc);
      true
   }

   // Take the unsaved form as the last order and show the summary
   pub fn finalize(&mut self) -> Result<&str, OrderError> {
      if let Some(order) = self.form.draft(&self.loc.t(Key::UnknownName)) {
         self.orders.add(order);
         self.view.render_list(&self.orders, &self.loc);
      }

      if self.orders.is_empty() {
         return Err(self.report(OrderError::NoOrders));
      }

      let text = summary::summarize(self.orders.as_slice(), &self.loc);
      self.mode = Mode::Summary;
      self.view.show_summary(&text, &self.loc);
      self.reset_form();
      log::info!("Summary for {} orders", self.orders.len());

      Ok(self.last_summary.insert(text).as_str())
   }

   pub async fn copy<C: Clipboard>(&mut self, clipboard: Option<&C>) -> Result<(), OrderError> {
      let text = match self.last_summary.clone() {
         Some(text) => text,
         None => return Err(self.report(OrderError::NoSummary)),
      };

      let clipboard = match clipboard {
         Some(clipboard) => clipboard,
         None => return Err(self.report(OrderError::NoClipboard)),
      };

      match clipboard.write(&text).await {
         Ok(()) => {
            let text = self.loc.t(Key::AlertCopied);
            self.view.notify(&text);
            Ok(())
         }
         Err(e) => {
            log::warn!("states::copy clipboard error: {}", e);
            Err(self.report(OrderError::NoClipboard))
         }
      }
   }
}
