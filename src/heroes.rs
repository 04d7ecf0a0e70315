use std::fmt;

/// Keys the API accepts for the hero endpoints. Any hero id or name string
/// works as well; this list only saves typing out the known ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeroName {
    AdamWarlock,
    BlackPanther,
    BlackWidow,
    Blade,
    CaptainAmerica,
    CloakAndDagger,
    DoctorStrange,
    EmmaFrost,
    Groot,
    Hawkeye,
    Hela,
    HumanTorch,
    Hulk,
    InvisibleWoman,
    IronFist,
    IronMan,
    JeffTheLandShark,
    Loki,
    LunaSnow,
    Magik,
    Magneto,
    Mantis,
    MisterFantastic,
    MoonKnight,
    Namor,
    PeniParker,
    Psylocke,
    RocketRaccoon,
    ScarletWitch,
    SpiderMan,
    SquirrelGirl,
    StarLord,
    Storm,
    ThePunisher,
    TheThing,
    Thor,
    Ultron,
    Venom,
    WinterSoldier,
    Wolverine,
}

impl HeroName {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroName::AdamWarlock => "adam warlock",
            HeroName::BlackPanther => "black panther",
            HeroName::BlackWidow => "black widow",
            HeroName::Blade => "blade",
            HeroName::CaptainAmerica => "captain america",
            HeroName::CloakAndDagger => "cloak & dagger",
            HeroName::DoctorStrange => "doctor strange",
            HeroName::EmmaFrost => "emma frost",
            HeroName::Groot => "groot",
            HeroName::Hawkeye => "hawkeye",
            HeroName::Hela => "hela",
            HeroName::HumanTorch => "human torch",
            HeroName::Hulk => "hulk",
            HeroName::InvisibleWoman => "invisible woman",
            HeroName::IronFist => "iron fist",
            HeroName::IronMan => "iron man",
            HeroName::JeffTheLandShark => "jeff the land shark",
            HeroName::Loki => "loki",
            HeroName::LunaSnow => "luna snow",
            HeroName::Magik => "magik",
            HeroName::Magneto => "magneto",
            HeroName::Mantis => "mantis",
            HeroName::MisterFantastic => "mister fantastic",
            HeroName::MoonKnight => "moon knight",
            HeroName::Namor => "namor",
            HeroName::PeniParker => "peni parker",
            HeroName::Psylocke => "psylocke",
            HeroName::RocketRaccoon => "rocket raccoon",
            HeroName::ScarletWitch => "scarlet witch",
            HeroName::SpiderMan => "spider-man",
            HeroName::SquirrelGirl => "squirrel girl",
            HeroName::StarLord => "star-lord",
            HeroName::Storm => "storm",
            HeroName::ThePunisher => "the punisher",
            HeroName::TheThing => "the thing",
            HeroName::Thor => "thor",
            HeroName::Ultron => "ultron",
            HeroName::Venom => "venom",
            HeroName::WinterSoldier => "winter soldier",
            HeroName::Wolverine => "wolverine",
        }
    }
}

impl AsRef<str> for HeroName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HeroName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
