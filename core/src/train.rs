//! Train Geometry
//!
//! Per-variant layout: sprite length and height, how the wheel animation is
//! phased, where each trailing part sits relative to the engine, where the
//! funnel is, and where passengers appear in accident mode.

use crate::config::TrainVariant;
use crate::sprites;

/// Index into a variant's engine frame table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameIndex(pub usize);

/// A trailing part (tender, wagon, coach) drawn alongside the engine
#[derive(Clone, Copy, Debug)]
pub struct Part {
    /// Sprite lines, one per engine row
    pub lines: &'static [&'static str],
    /// Column offset from the engine's left edge
    pub col: i32,
    /// Extra rows the part hangs below the engine while flying
    pub fly_drop: i32,
}

/// Where a passenger figure appears in accident mode
#[derive(Clone, Copy, Debug)]
pub struct Passenger {
    /// Row offset from the top of the engine
    pub row: i32,
    /// Column offset from the engine's left edge
    pub col: i32,
    /// Extra rows while flying (follows the part the passenger rides in)
    pub fly_drop: i32,
}

/// Static layout of one train variant
#[derive(Debug)]
pub struct TrainSpec {
    /// Which variant this describes
    pub variant: TrainVariant,
    /// Horizontal extent of the whole train in columns
    pub length: i32,
    /// Index of the last engine row (frames have `height + 1` lines)
    pub height: i32,
    /// Columns per wheel phase step
    pub phase_divisor: i32,
    /// Rows above the screen middle where the engine top sits
    pub lift: i32,
    /// Columns per row climbed in flight mode
    pub flight_slope: i32,
    /// Funnel column relative to the engine, if the train makes smoke
    pub funnel: Option<i32>,
    /// Engine frames, one per wheel phase
    pub engine: &'static [&'static [&'static str]],
    /// Parts following the engine
    pub trailers: &'static [Part],
    /// Passenger positions for accident mode
    pub passengers: &'static [Passenger],
    /// Whether the body is drawn in the livery tint
    pub livery: bool,
}

impl TrainSpec {
    /// Number of wheel phases
    pub fn patterns(&self) -> usize {
        self.engine.len()
    }

    /// Engine lines for a frame index
    pub fn engine_frame(&self, index: FrameIndex) -> &'static [&'static str] {
        self.engine[index.0 % self.engine.len()]
    }
}

static LOGO: TrainSpec = TrainSpec {
    variant: TrainVariant::Logo,
    length: 84,
    height: 6,
    phase_divisor: 3,
    lift: 3,
    flight_slope: 6,
    funnel: Some(4),
    engine: sprites::LOGO_ENGINE,
    trailers: &[
        Part {
            lines: sprites::LOGO_COAL,
            col: 21,
            fly_drop: 2,
        },
        Part {
            lines: sprites::LOGO_CAR,
            col: 42,
            fly_drop: 4,
        },
        Part {
            lines: sprites::LOGO_CAR,
            col: 63,
            fly_drop: 6,
        },
    ],
    passengers: &[
        Passenger {
            row: 1,
            col: 14,
            fly_drop: 0,
        },
        Passenger {
            row: 1,
            col: 45,
            fly_drop: 4,
        },
        Passenger {
            row: 1,
            col: 53,
            fly_drop: 4,
        },
        Passenger {
            row: 1,
            col: 66,
            fly_drop: 6,
        },
        Passenger {
            row: 1,
            col: 74,
            fly_drop: 6,
        },
    ],
    livery: false,
};

static D51: TrainSpec = TrainSpec {
    variant: TrainVariant::D51,
    length: 83,
    height: 10,
    phase_divisor: 1,
    lift: 5,
    flight_slope: 7,
    funnel: Some(7),
    engine: sprites::D51_ENGINE,
    trailers: &[Part {
        lines: sprites::D51_TENDER,
        col: 53,
        fly_drop: 1,
    }],
    passengers: &[
        Passenger {
            row: 2,
            col: 43,
            fly_drop: 0,
        },
        Passenger {
            row: 2,
            col: 47,
            fly_drop: 0,
        },
    ],
    livery: false,
};

static C51: TrainSpec = TrainSpec {
    variant: TrainVariant::C51,
    length: 87,
    height: 11,
    phase_divisor: 1,
    lift: 5,
    flight_slope: 7,
    funnel: Some(7),
    engine: sprites::C51_ENGINE,
    trailers: &[Part {
        lines: sprites::C51_TENDER,
        col: 55,
        fly_drop: 1,
    }],
    passengers: &[
        Passenger {
            row: 3,
            col: 45,
            fly_drop: 0,
        },
        Passenger {
            row: 3,
            col: 49,
            fly_drop: 0,
        },
    ],
    livery: false,
};

static TGV: TrainSpec = TrainSpec {
    variant: TrainVariant::Tgv,
    length: 165,
    height: 8,
    phase_divisor: 2,
    lift: 5,
    flight_slope: 7,
    funnel: None,
    engine: sprites::TGV_ENGINE,
    trailers: &[Part {
        lines: sprites::TGV_COACHES,
        col: 55,
        fly_drop: 1,
    }],
    passengers: &[
        Passenger {
            row: 2,
            col: 14,
            fly_drop: 0,
        },
        Passenger {
            row: 3,
            col: 85,
            fly_drop: 1,
        },
        Passenger {
            row: 3,
            col: 91,
            fly_drop: 1,
        },
        Passenger {
            row: 3,
            col: 103,
            fly_drop: 1,
        },
        Passenger {
            row: 3,
            col: 114,
            fly_drop: 1,
        },
        Passenger {
            row: 3,
            col: 146,
            fly_drop: 1,
        },
        Passenger {
            row: 3,
            col: 152,
            fly_drop: 1,
        },
    ],
    livery: true,
};

impl TrainVariant {
    /// Static layout for this variant
    pub fn spec(self) -> &'static TrainSpec {
        match self {
            Self::Logo => &LOGO,
            Self::C51 => &C51,
            Self::D51 => &D51,
            Self::Tgv => &TGV,
        }
    }

    /// Horizontal extent of the whole train
    pub fn length(self) -> i32 {
        self.spec().length
    }
}

/// Wheel phase for a train whose left edge sits at `offset`
///
/// `offset` is the engine column after subtracting the train length from the
/// cursor, so `length + offset` is never negative while the train is visible.
pub fn frame_for(variant: TrainVariant, offset: i32) -> FrameIndex {
    let spec = variant.spec();
    let step = (spec.length + offset) / spec.phase_divisor;
    let patterns = i32::try_from(spec.patterns()).unwrap_or(1);
    // step is only negative for off-screen offsets
    FrameIndex(usize::try_from(step.rem_euclid(patterns)).unwrap_or(0))
}
