use core::str::{FromStr, Split};

use crate::{
    ArgumentIssue, DatePattern, Format, FormatError, RandomBits, Result, SequenceWidth, Token,
    TokenKind,
};

impl Format {
    /// Parses a canonical format string into tokens.
    ///
    /// Literal runs become [`Token::Text`]; every `{...}` becomes a directive
    /// token. Limits are not checked here, see [`Format::validate`].
    ///
    /// # Errors
    ///
    /// - [`FormatError::MalformedDirective`] for an unterminated `{`, an empty
    ///   head, or a `{` nested inside a directive.
    /// - [`FormatError::UnknownDirective`] for a head other than `RANDOM`,
    ///   `GUID`, `DATE` or `SEQ`.
    /// - [`FormatError::InvalidArgument`] for a missing, superfluous or
    ///   out-of-range argument.
    ///
    /// # Example
    ///
    /// ```
    /// use idfmt::{Format, Token};
    ///
    /// let format = Format::parse("ITEM-{SEQ}").unwrap();
    /// assert_eq!(format.tokens(), &[Token::text("ITEM-"), Token::sequence()]);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while !rest.is_empty() {
            let consumed = if let Some(body) = rest.strip_prefix('{') {
                let end = body
                    .find('}')
                    .ok_or(FormatError::MalformedDirective { offset })?;
                tokens.push(parse_directive(&body[..end], offset)?);
                end + 2
            } else {
                let end = rest.find('{').unwrap_or(rest.len());
                tokens.push(Token::text(&rest[..end]));
                end
            };
            rest = &rest[consumed..];
            offset += consumed;
        }

        Ok(Self::from(tokens))
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The arguments following a directive head.
struct Args<'a> {
    kind: TokenKind,
    offset: usize,
    rest: Split<'a, char>,
}

impl<'a> Args<'a> {
    fn invalid(&self, issue: ArgumentIssue) -> FormatError {
        FormatError::InvalidArgument {
            kind: self.kind,
            offset: self.offset,
            issue,
        }
    }

    fn optional(&mut self) -> Result<Option<&'a str>> {
        match self.rest.next() {
            Some("") => Err(self.invalid(ArgumentIssue::Missing)),
            other => Ok(other),
        }
    }

    fn required(&mut self) -> Result<&'a str> {
        self.optional()?
            .ok_or_else(|| self.invalid(ArgumentIssue::Missing))
    }

    fn number(&self, arg: &str) -> Result<u32> {
        parse_number(arg).map_err(|issue| self.invalid(issue))
    }

    fn finish(mut self, token: Token) -> Result<Token> {
        match self.rest.next() {
            Some(extra) => Err(self.invalid(ArgumentIssue::Unexpected(extra.to_owned()))),
            None => Ok(token),
        }
    }
}

fn parse_directive(content: &str, offset: usize) -> Result<Token> {
    if content.contains('{') {
        return Err(FormatError::MalformedDirective { offset });
    }

    let mut parts = content.split(':');
    let head = parts.next().unwrap_or_default();
    if head.is_empty() {
        return Err(FormatError::MalformedDirective { offset });
    }
    let Some(kind) = TokenKind::from_head(head) else {
        return Err(FormatError::UnknownDirective {
            head: head.to_owned(),
            offset,
        });
    };

    let mut args = Args {
        kind,
        offset,
        rest: parts,
    };
    let token = match kind {
        TokenKind::Random => {
            let arg = args.required()?;
            let bits = args.number(arg)?;
            Token::random(RandomBits::try_from(bits).map_err(|issue| args.invalid(issue))?)
        }
        TokenKind::Date => {
            let pattern = args
                .required()?
                .parse::<DatePattern>()
                .map_err(|issue| args.invalid(issue))?;
            Token::date(pattern)
        }
        TokenKind::Sequence => {
            let width = match args.optional()? {
                None => SequenceWidth::Default,
                Some(arg) => {
                    SequenceWidth::explicit(args.number(arg)?).map_err(|issue| args.invalid(issue))?
                }
            };
            Token::Sequence { width }
        }
        TokenKind::Guid => Token::guid(),
        TokenKind::Text => {
            return Err(FormatError::UnknownDirective {
                head: head.to_owned(),
                offset,
            });
        }
    };

    args.finish(token)
}

/// Parses a canonical decimal: ASCII digits only, no sign, no leading zero.
///
/// Non-canonical spellings such as `06` are rejected so that re-serializing a
/// parsed format reproduces the input exactly. Values too large for `u32`
/// saturate; every caller rejects them as out of range.
fn parse_number(arg: &str) -> Result<u32, ArgumentIssue> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArgumentIssue::NotNumeric(arg.to_owned()));
    }
    if arg.len() > 1 && arg.starts_with('0') {
        return Err(ArgumentIssue::LeadingZero(arg.to_owned()));
    }
    Ok(arg.parse().unwrap_or(u32::MAX))
}
