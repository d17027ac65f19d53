/* ===============================================================================
Pizza order form.
Copy summary to clipboard. 16 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[allow(async_fn_in_trait)]
pub trait Clipboard {
   async fn write(&self, text: &str) -> io::Result<()>;
}

// External program that takes the text from stdin, e.g. "xclip -selection clipboard"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandClipboard {
   program: String,
   args: Vec<String>,
}

impl CommandClipboard {
   pub fn parse(cmd: &str) -> Option<Self> {
      let mut parts = cmd.split_whitespace().map(String::from);
      let program = parts.next()?;
      Some(Self {
         program,
         args: parts.collect(),
      })
   }
}

impl Clipboard for CommandClipboard {
   async fn write(&self, text: &str) -> io::Result<()> {
      let mut child = Command::new(&self.program)
      .args(&self.args)
      .stdin(Stdio::piped())
      .stdout(Stdio::null())
      .spawn()?;

      if let Some(mut stdin) = child.stdin.take() {
         stdin.write_all(text.as_bytes()).await?;
      }

      let status = child.wait().await?;
      if status.success() {
         Ok(())
      } else {
         Err(io::Error::new(io::ErrorKind::Other, format!("{} exited with {}", self.program, status)))
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn parse_command_line() {
      let clip = CommandClipboard::parse("xclip -selection clipboard").unwrap();
      assert_eq!(clip.program, "xclip");
      assert_eq!(clip.args, vec!["-selection", "clipboard"]);
      assert!(CommandClipboard::parse("   ").is_none());
   }

   #[tokio::test]
   async fn missing_program_fails() {
      let clip = CommandClipboard::parse("pizzaform-no-such-clipboard-tool").unwrap();
      assert!(clip.write("text").await.is_err());
   }
}
