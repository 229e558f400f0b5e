use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;

/// The screens the session controller can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    MainMenu,
    Profile,
    Quiz,
    Learning,
    Schedule,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Login,
        Screen::MainMenu,
        Screen::Profile,
        Screen::Quiz,
        Screen::Learning,
        Screen::Schedule,
    ];

    /// Screens that only make sense with somebody logged in.
    pub fn requires_user(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Login => "Login",
            Screen::MainMenu => "MainMenu",
            Screen::Profile => "Profile",
            Screen::Quiz => "Quiz",
            Screen::Learning => "Learning",
            Screen::Schedule => "Schedule",
        };
        f.write_str(name)
    }
}

/// Quiz difficulty bucket derived from the learner's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// 6..=12 is Easy, 13..=20 is Medium, anything else (under 6 included) is Hard.
    pub fn for_age(age: u32) -> Tier {
        match age {
            6..=12 => Tier::Easy,
            13..=20 => Tier::Medium,
            _ => Tier::Hard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }

    pub fn from_label(label: &str) -> Option<Tier> {
        match label {
            "Easy" => Some(Tier::Easy),
            "Medium" => Some(Tier::Medium),
            "Hard" => Some(Tier::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ToSql for Tier {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for Tier {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let label = value.as_str()?;
        Tier::from_label(label).ok_or_else(|| FromSqlError::Other(format!("unknown level: {label}").into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub username: String,
    pub score: u32,
    pub total: u32,
    pub level: Tier,
    pub time: String,
}

impl QuizResult {
    /// Score as a percentage of the total; a zero total counts as 0%.
    pub fn ratio_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.score) * 100.0 / f64::from(self.total)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub time: String,
    pub object: String,
}

impl ScheduleEntry {
    pub fn new(time: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            object: object.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal message shown on top of the active screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_age(5), Tier::Hard);
        assert_eq!(Tier::for_age(6), Tier::Easy);
        assert_eq!(Tier::for_age(12), Tier::Easy);
        assert_eq!(Tier::for_age(13), Tier::Medium);
        assert_eq!(Tier::for_age(20), Tier::Medium);
        assert_eq!(Tier::for_age(21), Tier::Hard);
        assert_eq!(Tier::for_age(0), Tier::Hard);
    }

    #[test]
    fn test_tier_label_roundtrip() {
        for tier in [Tier::Easy, Tier::Medium, Tier::Hard] {
            assert_eq!(Tier::from_label(tier.label()), Some(tier));
        }
        assert_eq!(Tier::from_label("easy"), None);
    }

    #[test]
    fn test_ratio_percent_guards_zero_total() {
        let result = QuizResult {
            username: "ada".to_string(),
            score: 3,
            total: 0,
            level: Tier::Easy,
            time: String::new(),
        };
        assert_eq!(result.ratio_percent(), 0.0);
    }

    #[test]
    fn test_only_login_is_public() {
        let public: Vec<Screen> = Screen::ALL
            .into_iter()
            .filter(|s| !s.requires_user())
            .collect();
        assert_eq!(public, vec![Screen::Login]);
    }
}
