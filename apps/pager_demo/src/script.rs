use std::str::FromStr;

use anyhow::{anyhow, bail, Context};

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    GoTo(usize),
    Add,
    Insert(usize),
    Remove(usize),
    RemoveCurrent,
    Reset,
    Swipe { forward: bool, completed: bool },
    Bounce,
    Lock,
    Unlock,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (raw, None),
        };
        let index = || -> anyhow::Result<usize> {
            let arg = arg.ok_or_else(|| anyhow!("step '{name}' needs an index, e.g. '{name}:2'"))?;
            arg.parse()
                .with_context(|| format!("invalid index '{arg}' for step '{name}'"))
        };

        let step = match name {
            "next" => Self::Next,
            "prev" | "previous" => Self::Previous,
            "goto" => Self::GoTo(index()?),
            "add" => Self::Add,
            "insert" => Self::Insert(index()?),
            "remove" => Self::Remove(index()?),
            "remove-current" => Self::RemoveCurrent,
            "reset" => Self::Reset,
            "swipe" | "cancel" => {
                let forward = match arg {
                    Some("next") | None => true,
                    Some("prev") => false,
                    Some(other) => bail!("swipe direction must be 'next' or 'prev', got '{other}'"),
                };
                Self::Swipe {
                    forward,
                    completed: name == "swipe",
                }
            }
            "bounce" => Self::Bounce,
            "lock" => Self::Lock,
            "unlock" => Self::Unlock,
            other => bail!("unknown step '{other}'"),
        };
        Ok(step)
    }
}

pub fn parse_script<S: AsRef<str>>(raw: &[S]) -> anyhow::Result<Vec<Step>> {
    raw.iter()
        .map(|step| step.as_ref().parse())
        .collect()
}

/// The button sequence of the example host screen followed by a few swipes.
pub fn default_script() -> Vec<Step> {
    vec![
        Step::Next,
        Step::Next,
        Step::Previous,
        Step::GoTo(2),
        Step::Add,
        Step::Insert(2),
        Step::Remove(1),
        Step::GoTo(0),
        Step::Swipe {
            forward: true,
            completed: true,
        },
        Step::Bounce,
        Step::Swipe {
            forward: true,
            completed: false,
        },
        Step::Reset,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps_with_and_without_arguments() {
        let steps = parse_script(&["next", "goto:3", "cancel:prev", "swipe", " reset "])
            .expect("valid script");

        assert_eq!(
            steps,
            vec![
                Step::Next,
                Step::GoTo(3),
                Step::Swipe {
                    forward: false,
                    completed: false
                },
                Step::Swipe {
                    forward: true,
                    completed: true
                },
                Step::Reset,
            ]
        );
    }

    #[test]
    fn rejects_missing_or_bad_arguments() {
        assert!("goto".parse::<Step>().is_err());
        assert!("insert:x".parse::<Step>().is_err());
        assert!("swipe:up".parse::<Step>().is_err());
        assert!("jump".parse::<Step>().is_err());
    }
}
