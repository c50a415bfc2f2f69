use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, digit1, multispace0, space1},
    combinator::{all_consuming, map, map_res, value, verify},
    sequence::{delimited, pair, preceded},
    IResult,
};
use parts_session::WordId;

/// A word named on the command line, either by bank id or by its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordRef {
    Id(WordId),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(WordRef),
    Remove(usize),
    Check,
    Clear,
    Show,
    Bank,
    Help,
    Quit,
}

impl Command {
    /// Whether the session may have changed, so the view should be redrawn.
    pub fn redraws(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Remove(_) | Command::Check | Command::Clear | Command::Show
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unrecognized command '{0}' (type 'help')")]
    Unrecognized(String),
}

pub const HELP: &str = "\
commands:
  add <id|word>    append a word from the bank
  remove <index>   remove the word at position <index> (alias: rm)
  check            check the grammar of the sentence
  clear            remove every word
  show             redraw the exercise
  bank             list the word bank
  help             this text
  quit             leave (alias: exit)";

/// Case-insensitive keyword that must not run into further letters.
fn keyword<'a>(kw: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    verify(alpha1, move |s: &str| s.eq_ignore_ascii_case(kw))
}

fn word_ref(input: &str) -> IResult<&str, WordRef> {
    map(take_while1(|c: char| !c.is_whitespace()), |s: &str| {
        match s.parse::<WordId>() {
            Ok(id) => WordRef::Id(id),
            Err(_) => WordRef::Text(s.to_string()),
        }
    })(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

fn command(input: &str) -> IResult<&str, Command> {
    alt((
        map(preceded(pair(keyword("add"), space1), word_ref), Command::Add),
        map(
            preceded(pair(alt((keyword("remove"), keyword("rm"))), space1), index),
            Command::Remove,
        ),
        value(Command::Check, keyword("check")),
        value(Command::Clear, keyword("clear")),
        value(Command::Show, keyword("show")),
        value(Command::Bank, keyword("bank")),
        value(Command::Help, alt((keyword("help"), tag("?")))),
        value(Command::Quit, alt((keyword("quit"), keyword("exit")))),
    ))(input)
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    all_consuming(delimited(multispace0, command, multispace0))(line)
        .map(|(_, cmd)| Some(cmd))
        .map_err(|_| CommandError::Unrecognized(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_add_by_id_or_text() {
        assert_eq!(parse("add 8"), Command::Add(WordRef::Id(WordId(8))));
        assert_eq!(parse("add They"), Command::Add(WordRef::Text("They".into())));
        assert_eq!(parse("  ADD   am  "), Command::Add(WordRef::Text("am".into())));
        // Not all digits, so it's a word
        assert_eq!(parse("add 1st"), Command::Add(WordRef::Text("1st".into())));
    }

    #[test]
    fn test_remove() {
        assert_eq!(parse("remove 0"), Command::Remove(0));
        assert_eq!(parse("rm 12"), Command::Remove(12));
    }

    #[test]
    fn test_bare_keywords() {
        assert_eq!(parse("check"), Command::Check);
        assert_eq!(parse("Clear"), Command::Clear);
        assert_eq!(parse("show"), Command::Show);
        assert_eq!(parse("bank"), Command::Bank);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_blank_and_comments() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   \t"), Ok(None));
        assert_eq!(parse_command("# build 'I am'"), Ok(None));
    }

    #[test]
    fn test_rejects_malformed_lines() {
        for line in ["add", "add ", "remove x", "remove -1", "checkup", "check now", "fly"] {
            assert_eq!(
                parse_command(line),
                Err(CommandError::Unrecognized(line.trim().to_string())),
                "{:?}",
                line
            );
        }
    }

    #[test]
    fn test_redraws() {
        assert!(Command::Check.redraws());
        assert!(Command::Remove(0).redraws());
        assert!(!Command::Help.redraws());
        assert!(!Command::Bank.redraws());
    }
}
