/* ===============================================================================
Pizza order form.
Console commands and view. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use lazy_static::lazy_static;
use regex::Regex;
use strum::AsRefStr;

use crate::environment as env;
use crate::form::OrderForm;
use crate::loc::{self, Key, Loc, Menu};
use crate::orders::OrderList;
use crate::states::{Mode, Session, View};

// ============================================================================
// [Commands]
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq, AsRefStr)]
pub enum Command {
   #[strum(to_string = "/name")]
   Name(String),
   #[strum(to_string = "/size")]
   Size(String),
   #[strum(to_string = "/qty")]
   Quantity(String),
   #[strum(to_string = "/top")]
   Topping(String), // toggle
   #[strum(to_string = "/preset")]
   Preset(Option<usize>), // none for custom
   #[strum(to_string = "/notes")]
   Notes(String),
   #[strum(to_string = "/allergies")]
   Allergies(String),
   #[strum(to_string = "/next")]
   Next,
   #[strum(to_string = "/edit")]
   Edit(usize),
   #[strum(to_string = "/del")]
   Delete(usize),
   #[strum(to_string = "/finish")]
   Finish,
   #[strum(to_string = "/copy")]
   Copy,
   #[strum(to_string = "/lang")]
   Lang(String),
   #[strum(to_string = "/restart")]
   Restart,
   #[strum(to_string = "/quit")]
   Quit,
   Unknown,
}

const CUSTOM: &str = "custom";

impl Command {
   // Indexes are shown to the user starting from 1
   pub fn parse(s: &str) -> Self {
      lazy_static! {
         static ref COMMAND_REGEX: Regex = Regex::new(r"^(/[a-z]+)(\d+)?(?:\s+(.*))?$").unwrap();
      }

      let caps = match COMMAND_REGEX.captures(s.trim()) {
         Some(caps) => caps,
         None => return Self::Unknown,
      };
      let word = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
      let number = caps.get(2).and_then(|m| m.as_str().parse::<usize>().ok());
      let arg = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();

      let index = || number.or_else(|| arg.parse().ok())
         .and_then(|n: usize| n.checked_sub(1));

      // Commands with index
      if word == Self::Edit(0).as_ref() {
         return index().map(Self::Edit).unwrap_or(Self::Unknown);
      }
      if word == Self::Delete(0).as_ref() {
         return index().map(Self::Delete).unwrap_or(Self::Unknown);
      }
      if number.is_some() {
         return Self::Unknown;
      }

      let text = String::from(arg);
      if word == Self::Name(String::new()).as_ref() { Self::Name(text) }
      else if word == Self::Notes(String::new()).as_ref() { Self::Notes(text) }
      else if word == Self::Allergies(String::new()).as_ref() { Self::Allergies(text) }
      else if word == Self::Quantity(String::new()).as_ref() { Self::Quantity(text) }
      else if word == Self::Next.as_ref() { Self::Next }
      else if word == Self::Finish.as_ref() { Self::Finish }
      else if word == Self::Copy.as_ref() { Self::Copy }
      else if word == Self::Restart.as_ref() { Self::Restart }
      else if word == Self::Quit.as_ref() { Self::Quit }
      else if word == Self::Preset(None).as_ref() {
         if arg.is_empty() || arg == CUSTOM {
            Self::Preset(None)
         } else {
            match arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
               Some(i) => Self::Preset(Some(i)),
               None => Self::Unknown,
            }
         }
      }
      else if arg.is_empty() { Self::Unknown }
      else if word == Self::Size(String::new()).as_ref() { Self::Size(text) }
      else if word == Self::Topping(String::new()).as_ref() { Self::Topping(text) }
      else if word == Self::Lang(String::new()).as_ref() { Self::Lang(text) }
      else { Self::Unknown }
   }
}

pub fn help() -> String {
   String::from("Commands:\n\
      /name <text>, /size <size>, /qty <number>, /top <topping>, /preset <number|custom>,\n\
      /notes <text>, /allergies <text>, /next - save the order,\n\
      /edit<N>, /del<N> - change or remove order N from the list,\n\
      /finish - show summary, /copy - copy summary,\n\
      /lang <code>, /restart, /quit")
}

// Returns false when the session is over
pub async fn update<V: View>(session: &mut Session<V>, input: &str) -> bool {
   let cmd = Command::parse(input);
   log::debug!("commands::update {:?}", cmd);

   // The form is hidden while the summary is displayed
   let form_cmd = !matches!(cmd, Command::Copy | Command::Lang(_) | Command::Restart | Command::Quit | Command::Unknown);
   if form_cmd && session.mode() == Mode::Summary {
      println!("Use /copy, /restart or /lang to continue");
      return true;
   }

   match cmd {
      Command::Name(s) => session.edit_form(|form, _| form.name = s),
      Command::Notes(s) => session.edit_form(|form, _| form.notes = s),
      Command::Allergies(s) => session.edit_form(|form, _| form.allergies = s),
      Command::Quantity(s) => session.edit_form(|form, _| form.quantity = s),

      Command::Size(s) => {
         if !session.edit_form(|form, menu| form.set_size(menu, &s)) {
            println!("Unknown size {}", s);
         }
      }

      Command::Topping(s) => {
         if !session.edit_form(|form, menu| form.toggle_topping(menu, &s)) {
            println!("Unknown topping {}", s);
         }
      }

      Command::Preset(p) => {
         if !session.edit_form(|form, menu| form.apply_preset(menu, p)) {
            println!("Unknown preset");
         }
      }

      Command::Next => {
         // Errors are already shown to the user
         let _ = session.add();
      }

      Command::Edit(index) => {
         if !session.begin_edit(index) {
            log::debug!("commands::update no order {} to edit", index);
         }
      }

      Command::Delete(index) => {
         if !session.remove(index) {
            log::debug!("commands::update no order {} to remove", index);
         }
      }

      Command::Finish => {
         let _ = session.finalize();
      }

      Command::Copy => {
         let _ = session.copy(env::clipboard()).await;
      }

      Command::Lang(code) => {
         match loc::load(&env::locales(), &code).await {
            Ok(loc) => session.set_loc(loc),
            Err(e) => log::error!("Error loading translations: {}", e),
         }
      }

      Command::Restart => session.restart(),

      Command::Quit => return false,

      Command::Unknown => println!("{}", help()),
   }

   true
}

// ============================================================================
// [View]
// ============================================================================
pub struct ConsoleView;

// Placeholder for an empty field
fn or_hint(value: &str, hint: String) -> String {
   if value.is_empty() { format!("({})", hint) } else { String::from(value) }
}

impl View for ConsoleView {
   fn render_list(&mut self, orders: &OrderList, loc: &Loc) {
      println!("\n{}", loc.t(Key::OrdersListTitle));
      for (i, order) in orders.iter().enumerate() {
         let n = i + 1;
         println!("{}. {}   [{} /edit{}] [{} /del{}]",
            n,
            order.list_line(loc),
            loc.t(Key::ButtonEdit),
            n,
            loc.t(Key::ButtonRemove),
            n
         );
      }
   }

   fn render_form(&mut self, form: &OrderForm, editing: Option<usize>, menu: &Menu, loc: &Loc) {
      let toppings = menu.ingredients.iter()
      .map(|t| {
         let mark = if form.toppings().contains(t) { "x" } else { " " };
         format!("[{}] {}", mark, t)
      })
      .collect::<Vec<_>>()
      .join("  ");

      let preset = match form.preset().and_then(|i| menu.presets.get(i)) {
         Some(p) => p.name.clone(),
         None => loc.t(Key::PresetCustom),
      };

      let presets = menu.presets.iter()
      .enumerate()
      .map(|(i, p)| format!("{}. {}", i + 1, p.name))
      .collect::<Vec<_>>()
      .join(", ");

      let button = match editing {
         Some(i) => format!("{} #{}", loc.t(Key::ButtonUpdate), i + 1),
         None => loc.t(Key::ButtonNext),
      };

      println!("\n{}", loc.t(Key::Heading));
      println!("{}: {}", loc.t(Key::LabelName), or_hint(&form.name, loc.t(Key::NamePlaceholder)));
      println!("{}: {} ({})", loc.t(Key::LabelSize), form.size, menu.sizes.join(", "));
      println!("{}: {}", loc.t(Key::LabelQuantity), form.quantity);
      println!("{}: {} ({})", loc.t(Key::LabelPreset), preset, presets);
      println!("{}", toppings);
      println!("{}: {}", loc.t(Key::LabelNotes), or_hint(&form.notes, loc.t(Key::NotesPlaceholder)));
      println!("{}: {}", loc.t(Key::LabelAllergies), or_hint(&form.allergies, loc.t(Key::AllergiesPlaceholder)));
      println!("/next - {}, /finish - {}", button, loc.t(Key::ButtonFinish));
   }

   fn show_summary(&mut self, text: &str, loc: &Loc) {
      println!("\n{}", text);
      println!("/copy - {}, /restart", loc.t(Key::ButtonCopy));
   }

   fn notify(&mut self, text: &str) {
      println!("! {}", text);
   }
}
