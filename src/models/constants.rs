/// Number of distinct gallows drawing steps. Reaching this many wrong
/// guesses ends the game.
pub const MAX_STAGES: u32 = 11;

/// Marker shown for a letter position that has not been revealed yet.
pub const BLANK: char = '_';

/// One drawing step of the gallows, added per wrong guess.
/// Discriminants are the stage indices (1 through 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallowsStage {
    StandBottom = 1,
    StandSide = 2,
    StandTop = 3,
    CornerBrace = 4,
    Noose = 5,
    Head = 6,
    Body = 7,
    LeftArm = 8,
    RightArm = 9,
    LeftLeg = 10,
    RightLeg = 11,
}

impl GallowsStage {
    /// Map a wrong-guess count (1..=MAX_STAGES) to its stage.
    pub fn from_index(index: u32) -> Option<GallowsStage> {
        match index {
            1 => Some(GallowsStage::StandBottom),
            2 => Some(GallowsStage::StandSide),
            3 => Some(GallowsStage::StandTop),
            4 => Some(GallowsStage::CornerBrace),
            5 => Some(GallowsStage::Noose),
            6 => Some(GallowsStage::Head),
            7 => Some(GallowsStage::Body),
            8 => Some(GallowsStage::LeftArm),
            9 => Some(GallowsStage::RightArm),
            10 => Some(GallowsStage::LeftLeg),
            11 => Some(GallowsStage::RightLeg),
            _ => None,
        }
    }

    pub fn index(&self) -> u32 {
        *self as u32
    }

    pub fn caption(&self) -> &'static str {
        match self {
            GallowsStage::StandBottom => "THE BASE OF THE STAND APPEARS",
            GallowsStage::StandSide => "THE UPRIGHT GOES UP",
            GallowsStage::StandTop => "THE CROSSBEAM IS IN PLACE",
            GallowsStage::CornerBrace => "A BRACE STEADIES THE BEAM",
            GallowsStage::Noose => "THE NOOSE IS TIED",
            GallowsStage::Head => "A HEAD...",
            GallowsStage::Body => "...A BODY...",
            GallowsStage::LeftArm => "...THE LEFT ARM...",
            GallowsStage::RightArm => "...THE RIGHT ARM...",
            GallowsStage::LeftLeg => "...THE LEFT LEG...",
            GallowsStage::RightLeg => "...AND THE RIGHT LEG.",
        }
    }

    pub const ALL: [GallowsStage; MAX_STAGES as usize] = [
        GallowsStage::StandBottom,
        GallowsStage::StandSide,
        GallowsStage::StandTop,
        GallowsStage::CornerBrace,
        GallowsStage::Noose,
        GallowsStage::Head,
        GallowsStage::Body,
        GallowsStage::LeftArm,
        GallowsStage::RightArm,
        GallowsStage::LeftLeg,
        GallowsStage::RightLeg,
    ];
}
