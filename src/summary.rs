/* ===============================================================================
Pizza order form.
Summary text for the whole list of orders. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::loc::{Key, Loc};
use crate::orders::Order;

// Orders with the same size, toppings, notes and allergies
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedEntry {
   pub size: String,
   pub toppings: Vec<String>,
   pub notes: String,
   pub allergies: String,
   pub quantity: u64,
}

// Base letters first, then accents, lowercase before uppercase on ties
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
   let lower = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<String>();
   let base = |s: &str| lower(&s.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>());

   base(a).cmp(&base(b))
   .then_with(|| lower(a).as_str().nfd().cmp(lower(b).as_str().nfd()))
   .then_with(|| b.cmp(a))
}

// Groups in order of first appearance
pub fn group(orders: &[Order]) -> Vec<GroupedEntry> {
   let mut res: Vec<GroupedEntry> = Vec::new();
   let mut index: HashMap<(String, String, String, String), usize> = HashMap::new();

   for order in orders {
      let mut toppings = order.toppings.clone();
      toppings.sort();
      let key = (order.size.clone(), toppings.join("|"), order.notes.clone(), order.allergies.clone());

      match index.get(&key) {
         Some(&i) => res[i].quantity = res[i].quantity.saturating_add(order.quantity_or_one()),
         None => {
            index.insert(key, res.len());
            res.push(GroupedEntry {
               size: order.size.clone(),
               toppings,
               notes: order.notes.clone(),
               allergies: order.allergies.clone(),
               quantity: order.quantity_or_one(),
            });
         }
      }
   }
   res
}

pub fn summarize(orders: &[Order], loc: &Loc) -> String {
   let mut sorted: Vec<&Order> = orders.iter().collect();
   sorted.sort_by(|a, b| locale_cmp(&a.name, &b.name));

   let quantity = loc.t(Key::SummaryQuantity);
   let size = loc.t(Key::SummarySize);
   let no_toppings = loc.t(Key::SummaryNoToppings);
   let notes = loc.t(Key::SummaryNotes);
   let allergies = loc.t(Key::SummaryAllergies);

   let mut text = format!("{}\n----------------------\n{}\n", loc.t(Key::SummaryTitle), loc.t(Key::SummaryByPerson));

   // By person
   let wants = loc.t(Key::Wants);
   let toppings_title = loc.t(Key::SummaryToppings);
   for (i, entry) in sorted.iter().enumerate() {
      text += &format!("{}. {} {}:\n", i + 1, entry.name, wants);
      text += &format!("   {}: {}\n", quantity, entry.quantity_or_one());
      text += &format!("   {}: {}\n", size, entry.size_desc());
      if entry.toppings.is_empty() {
         text += &format!("   {}\n", no_toppings);
      } else {
         text += &format!("   {}:\n", toppings_title);
         for topping in &entry.toppings {
            text += &format!("   - {}\n", topping);
         }
      }
      if !entry.notes.is_empty() {
         text += &format!("   {}: {}\n", notes, entry.notes);
      }
      if !entry.allergies.is_empty() {
         text += &format!("   {}: {}\n", allergies, entry.allergies);
      }
      text += "\n";
   }

   // Grouped
   text += &format!("{}\n", loc.t(Key::SummaryGrouped));
   for entry in group(orders) {
      let toppings = if entry.toppings.is_empty() {
         no_toppings.clone()
      } else {
         entry.toppings.join(", ")
      };
      let size_desc = if entry.size.is_empty() { "-" } else { entry.size.as_str() };
      text += &format!("- {}x ({}: {}) {}\n", entry.quantity, size, size_desc, toppings);
      if !entry.notes.is_empty() {
         text += &format!("  {}: {}\n", notes, entry.notes);
      }
      if !entry.allergies.is_empty() {
         text += &format!("  {}: {}\n", allergies, entry.allergies);
      }
   }

   text
}

#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;

   fn loc() -> Loc {
      Loc::new(json!({}), json!({
         "summaryTitle": "Order summary",
         "summaryByPerson": "By person:",
         "summaryGrouped": "Grouped:",
         "summaryQuantity": "Quantity",
         "summarySize": "Size",
         "summaryToppings": "Toppings",
         "summaryNoToppings": "No toppings",
         "summaryNotes": "Notes",
         "summaryAllergies": "Allergies",
         "wants": "wants"
      }))
   }

   fn order(name: &str, size: &str, quantity: u64, toppings: &[&str]) -> Order {
      Order {
         name: String::from(name),
         size: String::from(size),
         quantity,
         toppings: toppings.iter().map(|s| s.to_string()).collect(),
         ..Default::default()
      }
   }

   #[test]
   fn two_people_same_pizza() {
      let orders = vec![
         order("Bob", "M", 2, &["Cheese"]),
         order("Alice", "M", 1, &["Cheese"]),
      ];
      let expected = "Order summary\n\
         ----------------------\n\
         By person:\n\
         1. Alice wants:\n   Quantity: 1\n   Size: M\n   Toppings:\n   - Cheese\n\n\
         2. Bob wants:\n   Quantity: 2\n   Size: M\n   Toppings:\n   - Cheese\n\n\
         Grouped:\n\
         - 3x (Size: M) Cheese\n";
      assert_eq!(summarize(&orders, &loc()), expected);
   }

   #[test]
   fn notes_allergies_and_empty_fields() {
      let mut o = order("Ann", "", 0, &[]);
      o.notes = String::from("well done");
      o.allergies = String::from("nuts");
      let text = summarize(&[o], &loc());
      let expected = "Order summary\n\
         ----------------------\n\
         By person:\n\
         1. Ann wants:\n   Quantity: 1\n   Size: -\n   No toppings\n   Notes: well done\n   Allergies: nuts\n\n\
         Grouped:\n\
         - 1x (Size: -) No toppings\n  Notes: well done\n  Allergies: nuts\n";
      assert_eq!(text, expected);
   }

   #[test]
   fn topping_order_ignored_for_grouping_only() {
      let orders = vec![
         order("Ann", "L", 1, &["B", "A"]),
         order("Bob", "L", 1, &["A", "B"]),
      ];
      let groups = group(&orders);
      assert_eq!(groups.len(), 1);
      assert_eq!(groups[0].quantity, 2);
      assert_eq!(groups[0].toppings, vec!["A", "B"]);

      let text = summarize(&orders, &loc());
      assert!(text.contains("1. Ann wants:\n   Quantity: 1\n   Size: L\n   Toppings:\n   - B\n   - A\n"));
      assert!(text.contains("- 2x (Size: L) A, B\n"));
   }

   #[test]
   fn different_notes_make_different_groups() {
      let mut spicy = order("Ann", "M", 1, &["Ham"]);
      spicy.notes = String::from("spicy");
      let orders = vec![spicy, order("Bob", "M", 1, &["Ham"]), order("Cid", "S", 1, &["Ham"])];
      let groups = group(&orders);
      assert_eq!(groups.len(), 3);
      assert_eq!(groups[0].notes, "spicy");
      assert_eq!(groups[2].size, "S");
   }

   #[test]
   fn groups_follow_first_appearance_not_names() {
      let orders = vec![
         order("Zed", "L", 1, &[]),
         order("Amy", "S", 1, &[]),
         order("Bea", "L", 2, &[]),
      ];
      let groups = group(&orders);
      assert_eq!(groups.iter().map(|g| (g.size.as_str(), g.quantity)).collect::<Vec<_>>(), vec![("L", 3), ("S", 1)]);
   }

   #[test]
   fn totals_do_not_depend_on_input_order() {
      let orders = vec![
         order("Ann", "M", 2, &["Ham"]),
         order("Bob", "L", 1, &[]),
         order("Cid", "M", 3, &["Ham"]),
         order("Dan", "L", 4, &["Olives"]),
      ];
      let mut reversed = orders.clone();
      reversed.reverse();

      let totals = |orders: &[Order]| {
         let mut q: Vec<u64> = group(orders).iter().map(|g| g.quantity).collect();
         q.sort();
         q
      };
      assert_eq!(totals(&orders), totals(&reversed));
   }

   #[test]
   fn summary_is_repeatable() {
      let orders = vec![order("Bob", "M", 2, &["Cheese"]), order("alice", "S", 1, &[])];
      let loc = loc();
      assert_eq!(summarize(&orders, &loc), summarize(&orders, &loc));
   }

   #[test]
   fn names_sorted_case_insensitively_and_stable() {
      let mut first = order("ann", "S", 1, &[]);
      first.notes = String::from("first");
      let mut second = order("ann", "S", 1, &[]);
      second.notes = String::from("second");
      let orders = vec![order("Bob", "M", 1, &[]), first, second, order("Ann", "L", 1, &[])];

      let text = summarize(&orders, &loc());
      let pos = |s: &str| text.find(s).unwrap();
      assert!(pos("1. ann wants") < pos("2. ann wants"));
      assert!(pos("Notes: first") < pos("Notes: second"));
      assert!(text.contains("3. Ann wants"));
      assert!(text.contains("4. Bob wants"));
   }

   #[test]
   fn accented_names_sorted_by_base_letter() {
      let mut names = vec!["Peter", "Özil", "Zoe", "Émile", "Anna"];
      names.sort_by(|a, b| locale_cmp(a, b));
      assert_eq!(names, vec!["Anna", "Émile", "Özil", "Peter", "Zoe"]);

      assert_eq!(locale_cmp("Ozil", "Özil"), Ordering::Less);
      assert_eq!(locale_cmp("Özil", "Peter"), Ordering::Less);
   }

   #[test]
   fn huge_quantities_do_not_overflow() {
      let o = order("Ann", "M", u64::MAX, &["Ham"]);
      let groups = group(&[o.clone(), o]);
      assert_eq!(groups[0].quantity, u64::MAX);

      let big = order("Bob", "M", u64::from(u32::MAX), &[]);
      let groups = group(&[big.clone(), big]);
      assert_eq!(groups[0].quantity, 2 * u64::from(u32::MAX));
   }

   #[test]
   fn locale_cmp_orders_by_letters_first() {
      assert_eq!(locale_cmp("alice", "Bob"), Ordering::Less);
      assert_eq!(locale_cmp("a", "A"), Ordering::Less);
      assert_eq!(locale_cmp("Bob", "Bob"), Ordering::Equal);
   }
}
