//! translator.rs - Dialect pattern to `regex` syntax translation.
//!
//! Rule files use a small pattern dialect:
//!
//! | Dialect   | Meaning                                   |
//! |-----------|-------------------------------------------|
//! | `A.B`     | concatenation (same as `AB`)              |
//! | `A\|B`    | alternation                               |
//! | `A*`      | zero or more                              |
//! | `A+`      | one or more                               |
//! | `(A)`     | grouping                                  |
//! | `!A`      | any single character except `A`           |
//! | `%s`      | whitespace (` \t\r\n\f\v`)                |
//! | `%a`      | any character                             |
//! | `%d`      | digit                                     |
//! | `%l` `%L` | lowercase / uppercase ASCII letter        |
//! | `%w` `%W` | ASCII letter / ASCII letter or digit      |
//! | `%t` `%n` | tab / newline                             |
//! | `%x`      | literal `x` for `x` in `. \| * + ( ) ! %` |
//!
//! Every other printable character stands for itself; characters that are
//! special to the `regex` crate but not to the dialect are escaped on output.
//!
//! Translation is a single left-to-right pass of a finite-state transducer.
//! The transducer only rewrites syntax; it never evaluates the pattern.

use crate::errors::SynmarkError;

/// Characters that are literal in the dialect but structural in `regex` syntax.
const HOST_METACHARACTERS: &[char] = &['{', '}', '[', ']', '?', '/', '^', '$', '\\'];

/// Transducer state after consuming a prefix of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet.
    Start,
    /// After `!`: a `[^` class is open and waits for its single member.
    Negated,
    /// After `%`: waits for the escape class letter.
    Escape,
    /// After a complete atom.
    Literal,
    /// After `|`.
    Alternation,
    /// After `.`: nothing emitted yet, an atom must follow.
    AfterDot,
    /// After `*`, or after merging two repetition operators.
    ZeroOrMorePending,
    /// After `+`.
    OneOrMorePending,
    /// After `(`.
    GroupOpen,
    /// After `)`.
    GroupClose,
}

impl State {
    /// States in which the input may legally end.
    fn is_accepting(self) -> bool {
        matches!(
            self,
            State::Literal | State::ZeroOrMorePending | State::OneOrMorePending | State::GroupClose
        )
    }

    /// States that require an atom before any operator.
    fn expects_atom(self) -> bool {
        matches!(
            self,
            State::Start | State::Alternation | State::AfterDot | State::GroupOpen
        )
    }

    /// States that directly follow a complete atom (`.` and `|` may follow).
    fn after_atom(self) -> bool {
        matches!(self, State::Literal | State::GroupClose)
    }

    fn is_repetition(self) -> bool {
        matches!(self, State::ZeroOrMorePending | State::OneOrMorePending)
    }
}

/// The character classes the transition function dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Not,
    OpenGroup,
    CloseGroup,
    Percent,
    Dot,
    Pipe,
    Star,
    Plus,
    /// Printable, but must be escaped for the host engine.
    Meta(char),
    /// Printable and copied verbatim.
    Plain(char),
    /// Below 0x20; never valid.
    Control(char),
}

impl Input {
    fn classify(c: char) -> Self {
        match c {
            '!' => Input::Not,
            '(' => Input::OpenGroup,
            ')' => Input::CloseGroup,
            '%' => Input::Percent,
            '.' => Input::Dot,
            '|' => Input::Pipe,
            '*' => Input::Star,
            '+' => Input::Plus,
            c if (c as u32) < 0x20 => Input::Control(c),
            c if HOST_METACHARACTERS.contains(&c) => Input::Meta(c),
            c => Input::Plain(c),
        }
    }
}

/// Output buffer of the transducer.
///
/// Appends are the common case; the only rewrite is [`PatternBuffer::replace_last`],
/// used when two repetition operators collapse into one.
#[derive(Debug, Default)]
struct PatternBuffer {
    out: String,
}

impl PatternBuffer {
    fn push(&mut self, c: char) {
        self.out.push(c);
    }

    fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn push_escaped(&mut self, c: char) {
        self.out.push('\\');
        self.out.push(c);
    }

    /// Replaces the most recently emitted character.
    fn replace_last(&mut self, c: char) {
        self.out.pop();
        self.out.push(c);
    }

    fn into_string(self) -> String {
        self.out
    }
}

/// Runs the transducer over one pattern.
struct Translator<'a> {
    pattern: &'a str,
    state: State,
    buffer: PatternBuffer,
    open_groups: usize,
}

impl<'a> Translator<'a> {
    fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            state: State::Start,
            buffer: PatternBuffer::default(),
            open_groups: 0,
        }
    }

    fn reject(&self, reason: impl Into<String>) -> SynmarkError {
        SynmarkError::invalid_pattern(self.pattern, reason)
    }

    fn run(mut self) -> Result<String, SynmarkError> {
        for (position, c) in self.pattern.chars().enumerate() {
            match self.step(Input::classify(c)) {
                Ok(next) => self.state = next,
                Err(reason) => return Err(self.reject(format!("{reason} at position {position}"))),
            }
        }

        if !self.state.is_accepting() {
            return Err(self.reject(match self.state {
                State::Start => "empty pattern",
                State::Negated => "'!' is not followed by a character",
                State::Escape => "'%' is not followed by an escape letter",
                State::AfterDot => "'.' is not followed by an atom",
                State::Alternation => "'|' is not followed by an atom",
                _ => "'(' is not followed by an atom",
            }));
        }
        if self.open_groups > 0 {
            return Err(self.reject("unclosed group"));
        }

        Ok(self.buffer.into_string())
    }

    /// The transition function: consumes one input, emits output, returns the next state.
    fn step(&mut self, input: Input) -> Result<State, String> {
        let state = self.state;
        match state {
            State::Negated => self.step_negated(input),
            State::Escape => self.step_escape(input),
            _ => match input {
                Input::Not if state.is_repetition() => {
                    Err("'!' cannot follow a repetition".to_string())
                }
                Input::Not => {
                    self.buffer.push_str("[^");
                    Ok(State::Negated)
                }
                Input::OpenGroup => {
                    self.buffer.push('(');
                    self.open_groups += 1;
                    Ok(State::GroupOpen)
                }
                Input::CloseGroup if state.expects_atom() => {
                    Err("')' needs an atom before it".to_string())
                }
                Input::CloseGroup if self.open_groups == 0 => {
                    Err("')' has no matching '('".to_string())
                }
                Input::CloseGroup => {
                    self.buffer.push(')');
                    self.open_groups -= 1;
                    Ok(State::GroupClose)
                }
                Input::Percent => {
                    self.buffer.push('[');
                    Ok(State::Escape)
                }
                Input::Dot if state.after_atom() => Ok(State::AfterDot),
                Input::Pipe if state.after_atom() => {
                    self.buffer.push('|');
                    Ok(State::Alternation)
                }
                Input::Dot | Input::Pipe => {
                    Err(format!("'{}' needs an atom before it", operator_char(input)))
                }
                Input::Star | Input::Plus if state.is_repetition() => {
                    self.buffer.replace_last('*');
                    Ok(State::ZeroOrMorePending)
                }
                Input::Star if state.after_atom() => {
                    self.buffer.push('*');
                    Ok(State::ZeroOrMorePending)
                }
                Input::Plus if state.after_atom() => {
                    self.buffer.push('+');
                    Ok(State::OneOrMorePending)
                }
                Input::Star | Input::Plus => {
                    Err(format!("'{}' needs an atom before it", operator_char(input)))
                }
                Input::Meta(c) => {
                    self.buffer.push_escaped(c);
                    Ok(State::Literal)
                }
                Input::Plain(c) => {
                    self.buffer.push(c);
                    Ok(State::Literal)
                }
                Input::Control(c) => Err(format!("control character {:?}", c)),
            },
        }
    }

    /// Inside `!`: exactly one member, then the class closes.
    fn step_negated(&mut self, input: Input) -> Result<State, String> {
        match input {
            Input::Percent => Ok(State::Escape),
            Input::Meta(c) => {
                self.buffer.push_escaped(c);
                self.buffer.push(']');
                Ok(State::Literal)
            }
            Input::Plain(c) => {
                self.buffer.push(c);
                self.buffer.push(']');
                Ok(State::Literal)
            }
            Input::Control(c) => Err(format!("control character {:?}", c)),
            other => Err(format!("'{}' cannot be negated", operator_char(other))),
        }
    }

    /// After `%`: the escape letter selects the class body; the class is closed here.
    fn step_escape(&mut self, input: Input) -> Result<State, String> {
        let body = match input {
            Input::Plain('s') => " \\t\\r\\n\\f\\v",
            Input::Plain('a') => "\\S\\s",
            Input::Plain('d') => "0-9",
            Input::Plain('l') => "a-z",
            Input::Plain('L') => "A-Z",
            Input::Plain('w') => "a-zA-Z",
            Input::Plain('W') => "a-zA-Z0-9",
            Input::Plain('t') => "\\t",
            Input::Plain('n') => "\\n",
            Input::Dot => "\\.",
            Input::Pipe => "\\|",
            Input::Plus => "\\+",
            Input::Star => "\\*",
            Input::OpenGroup => "\\(",
            Input::CloseGroup => "\\)",
            Input::Not => "!",
            Input::Percent => "%",
            Input::Plain(c) | Input::Meta(c) | Input::Control(c) => {
                return Err(format!("unknown escape '%{}'", c.escape_default()));
            }
        };
        self.buffer.push_str(body);
        self.buffer.push(']');
        Ok(State::Literal)
    }
}

fn operator_char(input: Input) -> char {
    match input {
        Input::Not => '!',
        Input::OpenGroup => '(',
        Input::CloseGroup => ')',
        Input::Percent => '%',
        Input::Dot => '.',
        Input::Pipe => '|',
        Input::Star => '*',
        Input::Plus => '+',
        Input::Meta(c) | Input::Plain(c) | Input::Control(c) => c,
    }
}

/// Translates one dialect pattern into `regex` crate syntax.
///
/// # Errors
///
/// Returns [`SynmarkError::InvalidPatternSyntax`] when a character is not
/// allowed in the current context, or when the pattern ends in a state that
/// still expects input (trailing `!`, `%`, `.`, `|`, an open group, or an
/// empty pattern).
pub fn translate(pattern: &str) -> Result<String, SynmarkError> {
    Translator::new(pattern).run()
}
