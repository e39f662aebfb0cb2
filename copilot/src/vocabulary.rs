//! Canonical action types and deploy directions.
//!
//! Hand-written documents frequently use the localized display names
//! (`部署`, `上`, ...). Lookups accept either the localized alias (exact) or
//! the canonical name (ASCII case-insensitive).

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod vocabulary_test;

use std::fmt;

/// Kind of an action step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionType {
    Deploy,
    Skill,
    Retreat,
    SpeedUp,
    BulletTime,
    SkillUsage,
    Output,
    SkillDaemon,
    MoveCamera,
    DrawCard,
    CheckIfStartOver,
}

impl ActionType {
    pub const ALL: [Self; 11] = [
        Self::Deploy,
        Self::Skill,
        Self::Retreat,
        Self::SpeedUp,
        Self::BulletTime,
        Self::SkillUsage,
        Self::Output,
        Self::SkillDaemon,
        Self::MoveCamera,
        Self::DrawCard,
        Self::CheckIfStartOver,
    ];

    /// Canonical wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deploy => "Deploy",
            Self::Skill => "Skill",
            Self::Retreat => "Retreat",
            Self::SpeedUp => "SpeedUp",
            Self::BulletTime => "BulletTime",
            Self::SkillUsage => "SkillUsage",
            Self::Output => "Output",
            Self::SkillDaemon => "SkillDaemon",
            Self::MoveCamera => "MoveCamera",
            Self::DrawCard => "DrawCard",
            Self::CheckIfStartOver => "CheckIfStartOver",
        }
    }

    /// Localized display name.
    #[must_use]
    pub fn localized(self) -> &'static str {
        match self {
            Self::Deploy => "部署",
            Self::Skill => "技能",
            Self::Retreat => "撤退",
            Self::SpeedUp => "二倍速",
            Self::BulletTime => "子弹时间",
            Self::SkillUsage => "技能用法",
            Self::Output => "打印",
            Self::SkillDaemon => "摆完挂机",
            Self::MoveCamera => "移动镜头",
            Self::DrawCard => "抽卡",
            Self::CheckIfStartOver => "检查重开",
        }
    }

    /// Resolve a free-text type. Returns `None` for unrecognized values.
    #[must_use]
    pub fn find(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|ty| ty.localized() == raw || ty.as_str().eq_ignore_ascii_case(raw))
    }

    /// Whether the action places an operator and therefore carries a direction.
    #[must_use]
    pub fn has_direction(self) -> bool {
        matches!(self, Self::Deploy)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facing of a deployed operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Explicitly no facing (e.g. for tokens).
    None,
}

impl Direction {
    pub const ALL: [Self; 5] = [Self::Up, Self::Down, Self::Left, Self::Right, Self::None];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::None => "None",
        }
    }

    #[must_use]
    pub fn localized(self) -> &'static str {
        match self {
            Self::Up => "上",
            Self::Down => "下",
            Self::Left => "左",
            Self::Right => "右",
            Self::None => "无",
        }
    }

    /// Resolve a free-text direction. Returns `None` for unrecognized values.
    #[must_use]
    pub fn find(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|dir| dir.localized() == raw || dir.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
