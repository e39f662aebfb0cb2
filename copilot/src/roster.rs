//! Static operator and profession roster.
//!
//! Names are the localized (zh-CN) names used in copilot documents. The
//! roster is a curated subset; documents may reference any operator name and
//! the editor treats names missing here as custom operators.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

/// Sub-profession id used for non-character entries (reserve operators).
pub const NOT_CHARACTER_SUB_PROF: &str = "notchar1";

/// A top-level operator class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profession {
    pub id: &'static str,
    pub name: &'static str,
    pub sub: &'static [SubProfession],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubProfession {
    pub id: &'static str,
    pub name: &'static str,
}

/// A known operator and its branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorInfo {
    pub name: &'static str,
    pub sub_prof: &'static str,
}

const fn sub(id: &'static str, name: &'static str) -> SubProfession {
    SubProfession { id, name }
}

const fn op(name: &'static str, sub_prof: &'static str) -> OperatorInfo {
    OperatorInfo { name, sub_prof }
}

pub const PROFESSIONS: &[Profession] = &[
    Profession {
        id: "pioneer",
        name: "先锋",
        sub: &[sub("pioneer", "尖兵"), sub("charger", "冲锋手"), sub("tactician", "战术家"), sub("bearer", "执旗手")],
    },
    Profession {
        id: "warrior",
        name: "近卫",
        sub: &[
            sub("centurion", "强攻手"),
            sub("instructor", "教官"),
            sub("fighter", "斗士"),
            sub("lord", "领主"),
            sub("sword", "剑豪"),
            sub("musha", "武者"),
            sub("artsfghter", "术战者"),
            sub("reaper", "收割者"),
        ],
    },
    Profession {
        id: "tank",
        name: "重装",
        sub: &[
            sub("protector", "铁卫"),
            sub("guardian", "守护者"),
            sub("unyield", "不屈者"),
            sub("artsprotector", "驭法铁卫"),
            sub("duelist", "决战者"),
            sub("fortress", "要塞"),
        ],
    },
    Profession {
        id: "sniper",
        name: "狙击",
        sub: &[
            sub("fastshot", "速射手"),
            sub("longrange", "神射手"),
            sub("aoesniper", "炮手"),
            sub("closerange", "重射手"),
            sub("siegesniper", "攻城手"),
            sub("bombarder", "投掷手"),
        ],
    },
    Profession {
        id: "caster",
        name: "术师",
        sub: &[
            sub("corecaster", "中坚术师"),
            sub("splashcaster", "扩散术师"),
            sub("chain", "链术师"),
            sub("mystic", "秘术师"),
            sub("phalanx", "阵法术师"),
            sub("funnel", "驭械术师"),
        ],
    },
    Profession {
        id: "medic",
        name: "医疗",
        sub: &[sub("physician", "医师"), sub("ringhealer", "群愈师"), sub("healer", "疗养师"), sub("wandermedic", "行医")],
    },
    Profession {
        id: "support",
        name: "辅助",
        sub: &[
            sub("slower", "凝滞师"),
            sub("underminer", "削弱者"),
            sub("bard", "吟游者"),
            sub("summoner", "召唤师"),
            sub("craftsman", "工匠"),
        ],
    },
    Profession {
        id: "special",
        name: "特种",
        sub: &[
            sub("executor", "处决者"),
            sub("pusher", "推击手"),
            sub("hookmaster", "钩索师"),
            sub("geek", "怪杰"),
            sub("stalker", "伏击客"),
            sub("merchant", "行商"),
            sub("traper", "陷阱师"),
        ],
    },
];

pub const OPERATORS: &[OperatorInfo] = &[
    op("德克萨斯", "pioneer"),
    op("推进之王", "pioneer"),
    op("芬", "pioneer"),
    op("风笛", "charger"),
    op("桃金娘", "bearer"),
    op("银灰", "centurion"),
    op("陈", "sword"),
    op("山", "fighter"),
    op("史尔特尔", "artsfghter"),
    op("棘刺", "lord"),
    op("芙兰卡", "duelist"),
    op("星熊", "protector"),
    op("塞雷娅", "guardian"),
    op("年", "protector"),
    op("泥岩", "unyield"),
    op("能天使", "fastshot"),
    op("蓝毒", "fastshot"),
    op("克洛丝", "fastshot"),
    op("W", "aoesniper"),
    op("艾雅法拉", "corecaster"),
    op("阿米娅", "corecaster"),
    op("伊芙利特", "splashcaster"),
    op("天火", "splashcaster"),
    op("异客", "chain"),
    op("闪灵", "physician"),
    op("夜莺", "ringhealer"),
    op("华法琳", "physician"),
    op("安洁莉娜", "slower"),
    op("铃兰", "slower"),
    op("麦哲伦", "summoner"),
    op("温蒂", "pusher"),
    op("红", "executor"),
    op("傀影", "executor"),
    op("阿", "geek"),
    op("预备干员-近战", NOT_CHARACTER_SUB_PROF),
    op("预备干员-术师", NOT_CHARACTER_SUB_PROF),
];

#[must_use]
pub fn find_profession(id: &str) -> Option<&'static Profession> {
    PROFESSIONS.iter().find(|prof| prof.id == id)
}

#[must_use]
pub fn find_operator(name: &str) -> Option<&'static OperatorInfo> {
    OPERATORS.iter().find(|info| info.name == name)
}

/// Profession owning `sub_prof`, if any.
#[must_use]
pub fn profession_of(sub_prof: &str) -> Option<&'static Profession> {
    PROFESSIONS.iter().find(|prof| prof.sub.iter().any(|s| s.id == sub_prof))
}
