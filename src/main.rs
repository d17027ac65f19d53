/* ===============================================================================
Pizza order form.
Main module. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};

mod commands;
mod environment;
mod error;
mod export;
mod form;
mod loc;
mod orders;
mod states;
mod summary;

use crate::error::HandlerResult;

// ============================================================================
// [Run!]
// ============================================================================
#[tokio::main]
async fn main() {
   if let Err(e) = run().await {
      log::error!("main::run {}", e);
   }
}

async fn run() -> HandlerResult {
   let mut builder = pretty_env_logger::formatted_builder();
   if let Ok(filters) = env::var("RUST_LOG") {
      builder.parse_filters(&filters);
   }
   builder.init();

   log::info!("Starting...");

   // Settings from environments
   let vars = environment::Vars::from_env();
   if environment::VARS.set(vars).is_err() {
      log::info!("Something wrong with settings");
   }

   // Without translations labels are shown as keys
   let lang = environment::lang();
   let tables = match loc::load(&environment::locales(), &lang).await {
      Ok(tables) => tables,
      Err(e) => {
         log::error!("Error loading translations: {}", e);
         loc::Loc::default()
      }
   };

   println!("{}", tables.t(loc::Key::Title));
   println!("{}", commands::help());
   let mut session = states::Session::new(tables, commands::ConsoleView);

   let mut lines = BufReader::new(tokio::io::stdin()).lines();
   while let Some(line) = lines.next_line().await? {
      if !commands::update(&mut session, &line).await {
         break;
      }
   }

   log::info!("Bye");
   Ok(())
}
