use std::fmt::Display;

use inquire::{InquireError, Text};
use joinery::JoinableIterator;

use crate::{
    error::ScrapeError, profile::ProfileRecord, session::Presenter, username::Username,
};

const RULE: &str = "-------------------------------------------------------";

/// Plain terminal output; prompts with `inquire`.
///
/// A name given up front is used for the first prompt.  Without `interactive`
/// the session ends after that.
pub struct TerminalPresenter {
    pending: Option<String>,
    interactive: bool,
}

impl TerminalPresenter {
    pub fn interactive() -> Self {
        Self {
            pending: None,
            interactive: true,
        }
    }

    pub fn once(name: String) -> Self {
        Self {
            pending: Some(name),
            interactive: false,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn prompt(&mut self) -> anyhow::Result<Option<String>> {
        if let Some(name) = self.pending.take() {
            return Ok(Some(name));
        }
        if !self.interactive {
            return Ok(None);
        }
        match Text::new("Enter a name ->").prompt() {
            Ok(name) => Ok(Some(name)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn present(&mut self, username: &Username, record: &ProfileRecord) {
        print!("{}", render(username, record));
    }

    fn report(&mut self, error: &ScrapeError) {
        eprintln!("{error}");
    }
}

pub fn render(username: &Username, record: &ProfileRecord) -> String {
    fn or_unknown<T: Display>(x: Option<T>) -> String {
        x.map_or_else(|| "unknown".to_owned(), |x| x.to_string())
    }
    fn section<T: Display>(title: &str, items: &[T]) -> String {
        format!(
            "{RULE}\n{title:^55}\n{RULE}\n{}\n",
            items.iter().join_with("\n")
        )
    }
    format!(
        "{username}'s profile\nUUID: {}\nViews: {} / month\nFollowers: {}\n\n{}\n{}\n{}",
        or_unknown(record.uuid().as_ref()),
        or_unknown(record.monthly_views()),
        or_unknown(record.followers()),
        section("PAST NAMES", record.past_names()),
        section("CAPES", record.capes()),
        section("FAVOURITE SERVERS", record.favorite_servers()),
    )
}
