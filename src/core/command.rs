//! Console command decoding
//!
//! Turns a raw input line into a typed [`Command`] before anything touches the
//! database. Argument counts come from a fixed arity table per command.

use crate::error::{CommandError, LookupError, Result};
use regex::Regex;
use tracing::{debug, instrument};

/// The closed set of commands understood by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Demo,
    ViewSubjects,
    LookupAddress,
    ListReviews,
    ListCourses,
    ListIncomplete,
    ListFailing,
    Exit,
}

impl CommandKind {
    /// Every command, in menu order
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Demo,
        CommandKind::ViewSubjects,
        CommandKind::LookupAddress,
        CommandKind::ListReviews,
        CommandKind::ListCourses,
        CommandKind::ListIncomplete,
        CommandKind::ListFailing,
        CommandKind::Exit,
    ];

    /// Token typed at the prompt
    pub const fn token(self) -> &'static str {
        match self {
            Self::Demo => "d",
            Self::ViewSubjects => "vs",
            Self::LookupAddress => "la",
            Self::ListReviews => "lr",
            Self::ListCourses => "lc",
            Self::ListIncomplete => "lnc",
            Self::ListFailing => "lf",
            Self::Exit => "e",
        }
    }

    /// Number of arguments the command requires
    pub const fn arity(self) -> usize {
        match self {
            Self::ViewSubjects | Self::ListReviews | Self::ListCourses => 1,
            Self::LookupAddress => 2,
            Self::Demo | Self::ListIncomplete | Self::ListFailing | Self::Exit => 0,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(token))
    }
}

/// A decoded command with validated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every student's first and last name
    Demo,
    /// Distinct course names taken by a student
    ViewSubjects { student_id: String },
    /// Street and city for a student name
    LookupAddress { first_name: String, last_name: String },
    /// Review scores and text for a student
    ListReviews { student_id: String },
    /// Distinct courses taught by a teacher
    ListCourses { teacher_id: String },
    /// Students with an incomplete enrollment
    ListIncomplete,
    /// Students who completed a course with a mark of 30 or below
    ListFailing,
    Exit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Demo => CommandKind::Demo,
            Self::ViewSubjects { .. } => CommandKind::ViewSubjects,
            Self::LookupAddress { .. } => CommandKind::LookupAddress,
            Self::ListReviews { .. } => CommandKind::ListReviews,
            Self::ListCourses { .. } => CommandKind::ListCourses,
            Self::ListIncomplete => CommandKind::ListIncomplete,
            Self::ListFailing => CommandKind::ListFailing,
            Self::Exit => CommandKind::Exit,
        }
    }
}

/// Decoder for console input lines
pub struct CommandParser {
    /// Regex for names made only of letters
    re_name: Regex,
}

impl CommandParser {
    /// Create a new command parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_name: Regex::new(r"^\p{Alphabetic}+$")
                .map_err(|e| LookupError::config(format!("Failed to compile regex: {}", e)))?,
        })
    }

    /// Decode a raw input line into a command
    #[instrument(skip(self))]
    pub fn parse(&self, line: &str) -> std::result::Result<Command, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = tokens.collect();

        let kind = CommandKind::from_token(token)
            .ok_or_else(|| CommandError::Unknown(token.to_lowercase()))?;

        if args.len() != kind.arity() {
            debug!("{} expects {} argument(s), got {}", kind.token(), kind.arity(), args.len());
            return Err(CommandError::Arity {
                command: kind.token(),
                required: kind.arity(),
            });
        }

        let command = match kind {
            CommandKind::Demo => Command::Demo,
            CommandKind::ViewSubjects => Command::ViewSubjects {
                student_id: args[0].to_uppercase(),
            },
            CommandKind::LookupAddress => {
                let first_name = capitalize(args[0]);
                let last_name = capitalize(args[1]);
                if !self.is_name(&first_name) || !self.is_name(&last_name) {
                    return Err(CommandError::InvalidName);
                }
                Command::LookupAddress {
                    first_name,
                    last_name,
                }
            }
            CommandKind::ListReviews => Command::ListReviews {
                student_id: args[0].to_uppercase(),
            },
            CommandKind::ListCourses => Command::ListCourses {
                teacher_id: args[0].to_uppercase(),
            },
            CommandKind::ListIncomplete => Command::ListIncomplete,
            CommandKind::ListFailing => Command::ListFailing,
            CommandKind::Exit => Command::Exit,
        };

        debug!("Decoded command: {:?}", command);
        Ok(command)
    }

    fn is_name(&self, value: &str) -> bool {
        self.re_name.is_match(value)
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
