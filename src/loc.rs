/* ===============================================================================
Pizza order form.
Localize module. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::path::PathBuf;
use derive_more::From;
use parse_display::Display;
use serde_json::{Map, Value};
use strum::AsRefStr;

// Language of the fallback table
pub const BASE_LANG: &str = "en";

// Used when the translation has no sizes
const DEFAULT_SIZES: [&str; 3] = ["S", "M", "L"];

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum Key {
   Title,
   Heading,
   LabelName,
   NamePlaceholder,
   LabelSize,
   LabelQuantity,
   LabelPreset,
   LabelNotes,
   LabelAllergies,
   NotesPlaceholder,
   AllergiesPlaceholder,
   ButtonNext,
   ButtonUpdate,
   ButtonFinish,
   ButtonCopy,
   ButtonEdit,
   ButtonRemove,
   OrdersListTitle,
   SizeOptions,
   PresetOptions,
   PresetCustom,
   Ingredients,
   UnknownName,
   AlertNoName,
   AlertNoQuantity,
   AlertNoOrders,
   AlertNoSummary,
   AlertNoClipboard,
   AlertCopied,
   SummaryTitle,
   SummaryByPerson,
   SummaryGrouped,
   SummaryQuantity,
   SummarySize,
   SummaryToppings,
   SummaryNoToppings,
   SummaryNotes,
   SummaryAllergies,
   Wants,
}

// Two translation tables, selected language first, then the base one
#[derive(Clone, Debug, Default)]
pub struct Loc {
   current: Map<String, Value>,
   base: Map<String, Value>,
}

impl Loc {
   pub fn new(current: Value, base: Value) -> Self {
      fn table(v: Value) -> Map<String, Value> {
         match v {
            Value::Object(map) => map,
            _ => Map::new(),
         }
      }

      Self {
         current: table(current),
         base: table(base),
      }
   }

   fn value(&self, key: &str) -> Option<&Value> {
      self.current.get(key).filter(|v| is_truthy(v))
      .or_else(|| self.base.get(key).filter(|v| is_truthy(v)))
   }

   pub fn t(&self, key: Key) -> String {
      self.text(key.as_ref())
   }

   // Text for the key or the key itself
   pub fn text(&self, key: &str) -> String {
      match self.value(key) {
         Some(Value::String(s)) => s.clone(),
         _ => String::from(key),
      }
   }

   // Array for the key or empty slice
   pub fn list(&self, key: Key) -> &[Value] {
      match self.value(key.as_ref()) {
         Some(Value::Array(arr)) => arr.as_slice(),
         _ => &[],
      }
   }
}

fn is_truthy(v: &Value) -> bool {
   match v {
      Value::Null => false,
      Value::Bool(b) => *b,
      Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
      Value::String(s) => !s.is_empty(),
      Value::Array(_) | Value::Object(_) => true,
   }
}

// ============================================================================
// [Menu data]
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
   pub name: String,
   pub toppings: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
   pub sizes: Vec<String>,
   pub presets: Vec<Preset>,
   pub ingredients: Vec<String>,
}

impl Menu {
   pub fn from_loc(loc: &Loc) -> Self {
      let strings = |arr: &[Value]| -> Vec<String> {
         arr.iter()
         .filter_map(|v| v.as_str())
         .map(String::from)
         .collect()
      };

      let mut sizes = strings(loc.list(Key::SizeOptions));
      if sizes.is_empty() {
         sizes = DEFAULT_SIZES.iter().map(|s| s.to_string()).collect();
      }

      // Skip presets without name or toppings list
      let presets = loc.list(Key::PresetOptions).iter()
      .filter_map(|p| {
         let name = p.get("name")?.as_str().filter(|s| !s.is_empty())?;
         let toppings = p.get("toppings")?.as_array()?;
         Some(Preset {
            name: String::from(name),
            toppings: strings(toppings.as_slice()),
         })
      })
      .collect();

      Self {
         sizes,
         presets,
         ingredients: strings(loc.list(Key::Ingredients)),
      }
   }

   // Second size is preselected if exists
   pub fn default_size(&self) -> String {
      let index = 1usize.min(self.sizes.len().saturating_sub(1));
      self.sizes.get(index).cloned().unwrap_or_default()
   }
}

// ============================================================================
// [Loading]
// ============================================================================
#[derive(Debug, Display, From)]
pub enum LocError {
   #[display("file error: {0}")]
   Io(std::io::Error),
   #[display("http error: {0}")]
   Http(reqwest::Error),
   #[display("json error: {0}")]
   Json(serde_json::Error),
}

impl std::error::Error for LocError {}

// Where translation files lang_{code}.json live
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
   Dir(PathBuf),
   Url(String),
}

impl Source {
   pub fn parse(s: &str) -> Self {
      if s.starts_with("http://") || s.starts_with("https://") {
         Self::Url(s.trim_end_matches('/').to_string())
      } else {
         Self::Dir(PathBuf::from(s))
      }
   }

   async fn fetch(&self, lang: &str) -> Result<Value, LocError> {
      let file_name = format!("lang_{}.json", lang);
      let text = match self {
         Self::Dir(dir) => tokio::fs::read_to_string(dir.join(file_name)).await?,
         Self::Url(base) => {
            reqwest::get(format!("{}/{}", base, file_name))
            .await?
            .error_for_status()?
            .text()
            .await?
         }
      };
      Ok(serde_json::from_str(&text)?)
   }
}

// Base table is required, selected language is optional
pub async fn load(source: &Source, lang: &str) -> Result<Loc, LocError> {
   let base = source.fetch(BASE_LANG).await?;

   let current = if lang == BASE_LANG {
      base.clone()
   } else {
      match source.fetch(lang).await {
         Ok(v) => v,
         Err(e) => {
            log::warn!("loc::load no translation for '{}': {}", lang, e);
            Value::Null
         }
      }
   };

   log::info!("Translations loaded for '{}'", lang);
   Ok(Loc::new(current, base))
}

#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;

   #[test]
   fn key_names_are_camel_case() {
      assert_eq!(Key::AlertNoName.as_ref(), "alertNoName");
      assert_eq!(Key::SizeOptions.as_ref(), "sizeOptions");
      assert_eq!(Key::Wants.as_ref(), "wants");
   }

   #[test]
   fn lookup_falls_back_to_base_then_key() {
      let loc = Loc::new(
         json!({"title": "Pizzabestellung", "heading": ""}),
         json!({"title": "Pizza order", "heading": "Order", "wants": "wants"}),
      );
      assert_eq!(loc.t(Key::Title), "Pizzabestellung");
      // Empty string in the selected table is skipped
      assert_eq!(loc.t(Key::Heading), "Order");
      assert_eq!(loc.t(Key::Wants), "wants");
      assert_eq!(loc.t(Key::AlertCopied), "alertCopied");
      assert_eq!(loc.text("somethingElse"), "somethingElse");
   }

   #[test]
   fn menu_uses_defaults_and_skips_bad_presets() {
      let loc = Loc::new(json!({}), json!({
         "presetOptions": [
            {"name": "Margherita", "toppings": ["Cheese", "Tomato"]},
            {"name": "Broken"},
            {"toppings": ["Ham"]},
            null
         ],
         "ingredients": ["Cheese", "Tomato", "Ham"]
      }));
      let menu = Menu::from_loc(&loc);
      assert_eq!(menu.sizes, vec!["S", "M", "L"]);
      assert_eq!(menu.default_size(), "M");
      assert_eq!(menu.presets.len(), 1);
      assert_eq!(menu.presets[0].name, "Margherita");
      assert_eq!(menu.ingredients.len(), 3);
   }

   #[test]
   fn default_size_with_single_option() {
      let loc = Loc::new(json!({"sizeOptions": ["One"]}), json!({}));
      let menu = Menu::from_loc(&loc);
      assert_eq!(menu.default_size(), "One");
   }

   #[test]
   fn source_detects_url() {
      assert_eq!(Source::parse("https://host/locales/"), Source::Url(String::from("https://host/locales")));
      assert_eq!(Source::parse("locales/"), Source::Dir(PathBuf::from("locales/")));
   }

   #[tokio::test]
   async fn load_from_directory() {
      let dir = std::env::temp_dir().join(format!("pizzaform-loc-{}", std::process::id()));
      tokio::fs::create_dir_all(&dir).await.unwrap();
      tokio::fs::write(dir.join("lang_en.json"), r#"{"title": "Pizza order", "wants": "wants"}"#).await.unwrap();
      tokio::fs::write(dir.join("lang_de.json"), r#"{"title": "Pizzabestellung"}"#).await.unwrap();

      let source = Source::Dir(dir.clone());
      let loc = load(&source, "de").await.unwrap();
      assert_eq!(loc.t(Key::Title), "Pizzabestellung");
      assert_eq!(loc.t(Key::Wants), "wants");

      // Missing selected language keeps the base table
      let loc = load(&source, "fr").await.unwrap();
      assert_eq!(loc.t(Key::Title), "Pizza order");

      tokio::fs::remove_dir_all(&dir).await.unwrap();
   }

   #[tokio::test]
   async fn load_without_base_fails() {
      let source = Source::Dir(PathBuf::from("/nonexistent/pizzaform"));
      assert!(matches!(load(&source, "en").await, Err(LocError::Io(_))));
   }
}
