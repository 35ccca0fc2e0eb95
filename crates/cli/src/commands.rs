//! Command-line parsing.

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: tactica <command>

Commands:
  new <path> [title]                       write a blank scenario
  validate <path>                          check a scenario and list its teams
  normalize <path> [out] [--force]         rewrite in the canonical layout
  mark-correct <path> <team-index> [--force]
                                           make one team the correct answer
  play <path> <team-index> [result-path]   score a choice
  session <path> <team-index> [<path> <team-index> ...]
                                           score a run of choices

--force overwrites a file even when reading it dropped data.";

const FORCE: &str = "--force";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New {
        path: PathBuf,
        title: Option<String>,
    },
    Validate {
        path: PathBuf,
    },
    Normalize {
        path: PathBuf,
        out: Option<PathBuf>,
        force: bool,
    },
    MarkCorrect {
        path: PathBuf,
        team: usize,
        force: bool,
    },
    Play {
        path: PathBuf,
        team: usize,
        result_path: Option<PathBuf>,
    },
    Session {
        choices: Vec<(PathBuf, usize)>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("No command given")]
    NoCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: missing <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: unexpected argument {argument}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("Team index must be a non-negative integer, got {0}")]
    BadTeamIndex(String),
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or(UsageError::NoCommand)?;
        let command = match name.as_str() {
            "new" => "new",
            "validate" => "validate",
            "normalize" => "normalize",
            "mark-correct" => "mark-correct",
            "play" => "play",
            "session" => "session",
            _ => return Err(UsageError::UnknownCommand(name)),
        };

        let mut rest: Vec<String> = args.collect();
        let force = match rest.iter().position(|a| a == FORCE) {
            Some(i) => {
                rest.remove(i);
                true
            }
            None => false,
        };
        if force && !matches!(command, "normalize" | "mark-correct") {
            return Err(UsageError::UnexpectedArgument {
                command,
                argument: FORCE.to_string(),
            });
        }
        let mut args = Args {
            command,
            rest: rest.into_iter(),
        };

        let command = match args.command {
            "new" => Command::New {
                path: args.required("path")?.into(),
                title: args.optional(),
            },
            "validate" => Command::Validate {
                path: args.required("path")?.into(),
            },
            "normalize" => Command::Normalize {
                path: args.required("path")?.into(),
                out: args.optional().map(PathBuf::from),
                force,
            },
            "mark-correct" => Command::MarkCorrect {
                path: args.required("path")?.into(),
                team: team_index(args.required("team-index")?)?,
                force,
            },
            "session" => {
                let mut choices = vec![(
                    PathBuf::from(args.required("path")?),
                    team_index(args.required("team-index")?)?,
                )];
                while let Some(path) = args.optional() {
                    choices.push((path.into(), team_index(args.required("team-index")?)?));
                }
                Command::Session { choices }
            }
            _ => Command::Play {
                path: args.required("path")?.into(),
                team: team_index(args.required("team-index")?)?,
                result_path: args.optional().map(PathBuf::from),
            },
        };
        args.finish()?;
        Ok(command)
    }
}

struct Args<I> {
    command: &'static str,
    rest: I,
}

impl<I: Iterator<Item = String>> Args<I> {
    fn required(&mut self, argument: &'static str) -> Result<String, UsageError> {
        self.rest.next().ok_or(UsageError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn optional(&mut self) -> Option<String> {
        self.rest.next()
    }

    fn finish(mut self) -> Result<(), UsageError> {
        match self.rest.next() {
            Some(argument) => Err(UsageError::UnexpectedArgument {
                command: self.command,
                argument,
            }),
            None => Ok(()),
        }
    }
}

fn team_index(raw: String) -> Result<usize, UsageError> {
    raw.parse().map_err(|_| UsageError::BadTeamIndex(raw))
}
