use std::fmt;

/// What to do to bring a length to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Add(usize),
    /// Also used when the length already equals the target, as `Remove(0)`.
    Remove(usize),
}

impl Adjustment {
    pub fn between(length: usize, target: usize) -> Self {
        if length < target {
            Adjustment::Add(target - length)
        } else {
            Adjustment::Remove(length - target)
        }
    }

    pub fn amount(&self) -> usize {
        match *self {
            Adjustment::Add(n) | Adjustment::Remove(n) => n,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Adjustment::Add(_) => "add",
            Adjustment::Remove(_) => "remove",
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb(), self.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_direction_around_target() {
        assert_eq!(Adjustment::between(399, 400), Adjustment::Add(1));
        assert_eq!(Adjustment::between(400, 400), Adjustment::Remove(0));
        assert_eq!(Adjustment::between(401, 400), Adjustment::Remove(1));
    }

    #[test]
    fn displays_verb_and_amount() {
        assert_eq!(Adjustment::Add(395).to_string(), "add 395");
        assert_eq!(Adjustment::Remove(0).to_string(), "remove 0");
    }
}
