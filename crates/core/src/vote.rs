use std::fmt;
use std::str::FromStr;

/// Prefix of the path segment that carries a vote, e.g. `vote-up`.
pub const VOTE_SEGMENT_PREFIX: &str = "vote-";

/// Direction of a vote cast on an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown vote direction: {0}")]
pub struct UnknownVoteDirection(pub String);

impl VoteDirection {
    /// Change applied to an answer's vote count.
    pub fn delta(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VoteDirection::Up => "up",
            VoteDirection::Down => "down",
        }
    }

    /// Parse a whole path segment such as `vote-up` or `vote-down`.
    pub fn from_segment(segment: &str) -> Result<Self, UnknownVoteDirection> {
        segment
            .strip_prefix(VOTE_SEGMENT_PREFIX)
            .ok_or_else(|| UnknownVoteDirection(segment.to_string()))?
            .parse()
    }
}

impl FromStr for VoteDirection {
    type Err = UnknownVoteDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            other => Err(UnknownVoteDirection(other.to_string())),
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_directions() {
        assert_eq!("up".parse::<VoteDirection>(), Ok(VoteDirection::Up));
        assert_eq!("down".parse::<VoteDirection>(), Ok(VoteDirection::Down));
    }

    #[test]
    fn rejects_anything_else() {
        for raw in ["sideways", "UP", "Up", " up", "upp", ""] {
            assert_eq!(
                raw.parse::<VoteDirection>(),
                Err(UnknownVoteDirection(raw.to_string()))
            );
        }
    }

    #[test]
    fn parses_path_segments() {
        assert_eq!(VoteDirection::from_segment("vote-up"), Ok(VoteDirection::Up));
        assert_eq!(VoteDirection::from_segment("vote-down"), Ok(VoteDirection::Down));
        assert!(VoteDirection::from_segment("vote-sideways").is_err());
        assert!(VoteDirection::from_segment("up").is_err());
        assert!(VoteDirection::from_segment("vote-").is_err());
    }

    #[test]
    fn deltas_cancel_out() {
        assert_eq!(VoteDirection::Up.delta() + VoteDirection::Down.delta(), 0);
    }
}
