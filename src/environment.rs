/* ===============================================================================
Pizza order form.
Global vars. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use once_cell::sync::OnceCell;
use std::env;

use crate::export::CommandClipboard;
use crate::loc::{Source, BASE_LANG};

// Settings
pub static VARS: OnceCell<Vars> = OnceCell::new();

// Enviroment variables
#[derive(Clone, Debug)]
pub struct Vars {
   // Language code for lang_{code}.json
   pub lang: String,

   // Directory or http(s) base url with translations
   pub locales: Source,

   // Program for copying summary
   pub clipboard: Option<CommandClipboard>,
}

impl Vars {
   pub fn from_env() -> Self {
      Self::from_lookup(|name| env::var(name).ok())
   }

   pub fn from_lookup<F>(var: F) -> Self
   where F: Fn(&str) -> Option<String>
   {
      let lang = match var("ORDER_LANG") {
         Some(s) if !s.trim().is_empty() => s.trim().to_string(),
         _ => {
            log::info!("There is no environment variable ORDER_LANG, using '{}'", BASE_LANG);
            String::from(BASE_LANG)
         }
      };

      let locales = match var("LOCALES") {
         Some(s) if !s.trim().is_empty() => Source::parse(s.trim()),
         _ => Source::parse("locales/"),
      };

      let clipboard = match var("CLIPBOARD_CMD") {
         Some(s) => {
            let res = CommandClipboard::parse(&s);
            if res.is_none() {
               log::warn!("Environment variable CLIPBOARD_CMD is empty, no clipboard");
            }
            res
         }
         None => {
            log::info!("There is no environment variable CLIPBOARD_CMD, no clipboard");
            None
         }
      };

      Vars {
         lang,
         locales,
         clipboard,
      }
   }
}

// Default language if settings not loaded
pub fn lang() -> String {
   VARS.get()
   .map(|v| v.lang.clone())
   .unwrap_or_else(|| String::from(BASE_LANG))
}

pub fn locales() -> Source {
   VARS.get()
   .map(|v| v.locales.clone())
   .unwrap_or_else(|| Source::parse("locales/"))
}

pub fn clipboard() -> Option<&'static CommandClipboard> {
   VARS.get().and_then(|v| v.clipboard.as_ref())
}

#[cfg(test)]
mod tests {
   use super::*;
   use std::collections::HashMap;
   use std::path::PathBuf;

   fn vars(pairs: &[(&str, &str)]) -> Vars {
      let map: HashMap<String, String> = pairs.iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
      Vars::from_lookup(|name| map.get(name).cloned())
   }

   #[test]
   fn defaults() {
      let v = vars(&[]);
      assert_eq!(v.lang, "en");
      assert_eq!(v.locales, Source::Dir(PathBuf::from("locales/")));
      assert!(v.clipboard.is_none());
   }

   #[test]
   fn values_from_environment() {
      let v = vars(&[
         ("ORDER_LANG", " de "),
         ("LOCALES", "https://example.org/locales"),
         ("CLIPBOARD_CMD", "wl-copy"),
      ]);
      assert_eq!(v.lang, "de");
      assert_eq!(v.locales, Source::Url(String::from("https://example.org/locales")));
      assert!(v.clipboard.is_some());
   }
}
