use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("(0|[1-9][0-9]*)(\\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
                RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
                RegexPattern { regex: Regex::new("\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
                RegexPattern { regex: Regex::new("/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
            ],
            source: source.to_string(),
        }
    }

    /// Advances the cursor over `text`, maintaining line and column counts.
    pub fn advance_over(&mut self, text: &str) {
        for character in text.chars() {
            self.pos += character.len_utf8();
            if character == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn position(&self) -> Position {
        Position {
            index: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex
        .find(lexer.remainder())
        .expect("handler invoked without a match")
        .as_str()
        .to_string();
    lexer.advance_over(&matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let value = regex
        .find(lexer.remainder())
        .expect("handler invoked without a match")
        .as_str()
        .to_string();

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let start = lexer.position();
    lexer.advance_over(&value);
    let end = lexer.position();
    lexer.push(MK_TOKEN!(kind, value, Span { start, end }));
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let value = regex
        .find(lexer.remainder())
        .expect("handler invoked without a match")
        .as_str()
        .to_string();

    // A digit run followed by `.` and more digits is one Float token; a bare
    // trailing `.` is left for the dot pattern, so `42.` is Integer then Dot.
    let kind = if value.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let start = lexer.position();
    lexer.advance_over(&value);
    let end = lexer.position();
    lexer.push(MK_TOKEN!(kind, value, Span { start, end }));
    Ok(())
}

fn string_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    let start = lexer.position();

    let (value, consumed, terminated) = {
        let remainder = lexer.remainder();
        let mut value = String::new();
        let mut consumed = 1;
        let mut terminated = false;
        let mut chars = remainder[1..].chars().peekable();

        while let Some(character) = chars.next() {
            consumed += character.len_utf8();
            match character {
                '"' => {
                    terminated = true;
                    break;
                }
                '\\' => match chars.peek() {
                    Some('n') => {
                        value.push('\n');
                        consumed += 1;
                        chars.next();
                    }
                    Some('t') => {
                        value.push('\t');
                        consumed += 1;
                        chars.next();
                    }
                    Some('\\') => {
                        value.push('\\');
                        consumed += 1;
                        chars.next();
                    }
                    Some('"') => {
                        value.push('"');
                        consumed += 1;
                        chars.next();
                    }
                    _ => {
                        value.push(character); // Keep the backslash
                    }
                },
                _ => value.push(character),
            }
        }

        (value, consumed, terminated)
    };

    if !terminated {
        return Err(Error::new(ErrorImpl::UnterminatedString, start));
    }

    let text = lexer.remainder()[..consumed].to_string();
    lexer.advance_over(&text);
    let end = lexer.position();
    lexer.push(MK_TOKEN!(TokenKind::String, value, Span { start, end }));
    Ok(())
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);

    while !lexer.at_eof() {
        let mut matched = false;

        for index in 0..lexer.patterns.len() {
            let regex = lexer.patterns[index].regex.clone();
            let handler = lexer.patterns[index].handler;

            let match_start = regex.find(lexer.remainder()).map(|found| found.start());
            if match_start == Some(0) {
                handler(&mut lexer, regex)?;
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: lexer.at(),
                },
                lexer.position(),
            ));
        }
    }

    let end = lexer.position();
    lexer.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: end.clone(),
            end
        }
    ));
    Ok(lexer.tokens)
}
