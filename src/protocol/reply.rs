/// Shell reply types
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
  /// Plain status text, used for "OK" and listing entries
  Status(String),
  /// Errors
  Error(String),
  /// Integers
  Integer(i64),
  /// Quoted strings (can be nil)
  Bulk(Option<String>),
  /// Numbered lists of other replies
  Array(Vec<Reply>),
}

impl Reply {
  /// Create a simple OK reply
  pub fn ok() -> Self {
    Reply::Status("OK".to_string())
  }

  /// Create an error reply
  pub fn error(msg: impl Into<String>) -> Self {
    Reply::Error(msg.into())
  }

  /// Render the reply as text, without a trailing newline
  pub fn encode(&self) -> String {
    let mut buf = String::new();
    self.encode_to(&mut buf);
    buf
  }

  fn encode_to(&self, buf: &mut String) {
    match self {
      Reply::Status(s) => buf.push_str(s),
      Reply::Error(e) => {
        buf.push_str("(error) ");
        buf.push_str(e);
      }
      Reply::Integer(i) => {
        buf.push_str("(integer) ");
        buf.push_str(&i.to_string());
      }
      Reply::Bulk(None) => buf.push_str("(nil)"),
      Reply::Bulk(Some(s)) => buf.push_str(&format!("{:?}", s)),
      Reply::Array(items) if items.is_empty() => buf.push_str("(empty list)"),
      Reply::Array(items) => {
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            buf.push('\n');
          }
          buf.push_str(&format!("{}) ", i + 1));
          item.encode_to(buf);
        }
      }
    }
  }
}

/// Splits a command line into arguments
pub struct Parser;

impl Parser {
  /// Parse one line into its arguments.
  ///
  /// Arguments are separated by whitespace. A double-quoted argument may
  /// contain whitespace and the escapes `\"` and `\\`. Returns `None` when a
  /// quote is left open.
  pub fn parse(line: &str) -> Option<Vec<String>> {
    let mut args = Vec::new();
    let mut chars = line.trim().chars().peekable();

    loop {
      while chars.next_if(|c| c.is_whitespace()).is_some() {}
      let Some(&first) = chars.peek() else {
        break;
      };

      let mut arg = String::new();
      if first == '"' {
        chars.next();
        loop {
          match chars.next()? {
            '"' => break,
            '\\' => match chars.next()? {
              c @ ('"' | '\\') => arg.push(c),
              c => {
                arg.push('\\');
                arg.push(c);
              }
            },
            c => arg.push(c),
          }
        }
      } else {
        while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
          arg.push(c);
        }
      }
      args.push(arg);
    }

    Some(args)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_words() {
    let args = Parser::parse("SET /app/name  memkv").unwrap();
    assert_eq!(args, vec!["SET", "/app/name", "memkv"]);
  }

  #[test]
  fn test_parse_quoted() {
    let args = Parser::parse(r#"set /motd "hello \"world\"" "a\\b""#).unwrap();
    assert_eq!(args, vec!["set", "/motd", r#"hello "world""#, r"a\b"]);
  }

  #[test]
  fn test_parse_empty_quoted_argument() {
    let args = Parser::parse(r#"set /empty """#).unwrap();
    assert_eq!(args, vec!["set", "/empty", ""]);
  }

  #[test]
  fn test_parse_blank_line() {
    assert_eq!(Parser::parse("   ").unwrap(), Vec::<String>::new());
  }

  #[test]
  fn test_parse_unbalanced_quote() {
    assert_eq!(Parser::parse(r#"set /k "open"#), None);
  }

  #[test]
  fn test_encode_scalars() {
    assert_eq!(Reply::ok().encode(), "OK");
    assert_eq!(Reply::error("ERR boom").encode(), "(error) ERR boom");
    assert_eq!(Reply::Integer(3).encode(), "(integer) 3");
    assert_eq!(Reply::Bulk(None).encode(), "(nil)");
    assert_eq!(Reply::Bulk(Some("a b".to_string())).encode(), "\"a b\"");
  }

  #[test]
  fn test_encode_array() {
    let reply = Reply::Array(vec![
      Reply::Status("cache".to_string()),
      Reply::Status("db".to_string()),
    ]);
    assert_eq!(reply.encode(), "1) cache\n2) db");
    assert_eq!(Reply::Array(vec![]).encode(), "(empty list)");
  }
}
