//! Sprite Tables
//!
//! Static ASCII art for every train part, the smoke puffs and the
//! passengers. Each engine table holds one full frame per wheel phase; every
//! frame ends with a blank line that wipes the row the train leaves behind
//! when it flies upwards. Every line ends in blanks so the previous frame is
//! overwritten as the train moves one column left.

// ============================================================================
// D51
// ============================================================================

const D51_STR1: &str = r"      ====        ________                ___________ ";
const D51_STR2: &str = r"  _D _|  |_______/        \__I_I_____===__|_________| ";
const D51_STR3: &str = r"   |(_)---  |   H\________/ |   |        =|___ ___|   ";
const D51_STR4: &str = r"   /     |  |   H  |  |     |   |         ||_| |_||   ";
const D51_STR5: &str = r"  |      |  |   H  |__--------------------| [___] |   ";
const D51_STR6: &str = r"  | ________|___H__/__|_____/[][]~\_______|       |   ";
const D51_STR7: &str = r"  |/ |   |-----------I_____I [][] []  D   |=======|__ ";

const D51_WHL11: &str = r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ";
const D51_WHL12: &str = r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ";
const D51_WHL13: &str = r"  \_/      \O=====O=====O=====O_/      \_/            ";

const D51_WHL21: &str = r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ";
const D51_WHL22: &str = r" |/-=|___|=O=====O=====O=====O   |_____/~\___/        ";
const D51_WHL23: &str = r"  \_/      \__/  \__/  \__/  \__/      \_/            ";

const D51_WHL31: &str = r"__/ =| o |=-O=====O=====O=====O \ ____Y___________|__ ";
const D51_WHL32: &str = r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ";
const D51_WHL33: &str = r"  \_/      \__/  \__/  \__/  \__/      \_/            ";

const D51_WHL41: &str = r"__/ =| o |=-~O=====O=====O=====O\ ____Y___________|__ ";
const D51_WHL42: &str = r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ";
const D51_WHL43: &str = r"  \_/      \__/  \__/  \__/  \__/      \_/            ";

const D51_WHL51: &str = r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ";
const D51_WHL52: &str = r" |/-=|___|=   O=====O=====O=====O|_____/~\___/        ";
const D51_WHL53: &str = r"  \_/      \__/  \__/  \__/  \__/      \_/            ";

const D51_WHL61: &str = r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ";
const D51_WHL62: &str = r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ";
const D51_WHL63: &str = r"  \_/      \_O=====O=====O=====O/      \_/            ";

const D51_DEL: &str = r"                                                      ";

/// D51 engine, one frame per wheel phase
pub const D51_ENGINE: &[&[&str]] = &[
    &[
        D51_STR1, D51_STR2, D51_STR3, D51_STR4, D51_STR5, D51_STR6, D51_STR7, D51_WHL11,
        D51_WHL12, D51_WHL13, D51_DEL,
    ],
    &[
        D51_STR1, D51_STR2, D51_STR3, D51_STR4, D51_STR5, D51_STR6, D51_STR7, D51_WHL21,
        D51_WHL22, D51_WHL23, D51_DEL,
    ],
    &[
        D51_STR1, D51_STR2, D51_STR3, D51_STR4, D51_STR5, D51_STR6, D51_STR7, D51_WHL31,
        D51_WHL32, D51_WHL33, D51_DEL,
    ],
    &[
        D51_STR1, D51_STR2, D51_STR3, D51_STR4, D51_STR5, D51_STR6, D51_STR7, D51_WHL41,
        D51_WHL42, D51_WHL43, D51_DEL,
    ],
    &[
        D51_STR1, D51_STR2, D51_STR3, D51_STR4, D51_STR5, D51_STR6, D51_STR7, D51_WHL51,
        D51_WHL52, D51_WHL53, D51_DEL,
    ],
    &[
        D51_STR1, D51_STR2, D51_STR3, D51_STR4, D51_STR5, D51_STR6, D51_STR7, D51_WHL61,
        D51_WHL62, D51_WHL63, D51_DEL,
    ],
];

// ============================================================================
// Coal tender (shared by D51 and C51)
// ============================================================================

const COAL01: &str = r"                              ";
const COAL02: &str = r"                              ";
const COAL03: &str = r"    _________________         ";
const COAL04: &str = r"   _|                \_____A  ";
const COAL05: &str = r" =|                        |  ";
const COAL06: &str = r" -|                        |  ";
const COAL07: &str = r"__|________________________|_ ";
const COAL08: &str = r"|__________________________|_ ";
const COAL09: &str = r"   |_D__D__D_|  |_D__D__D_|   ";
const COAL10: &str = r"    \_/   \_/    \_/   \_/    ";

const COAL_DEL: &str = r"                              ";

/// Tender behind the D51
pub const D51_TENDER: &[&str] = &[
    COAL01, COAL02, COAL03, COAL04, COAL05, COAL06, COAL07, COAL08, COAL09, COAL10, COAL_DEL,
];

/// Tender behind the C51 (one row taller: the C51 stands higher)
pub const C51_TENDER: &[&str] = &[
    COAL_DEL, COAL01, COAL02, COAL03, COAL04, COAL05, COAL06, COAL07, COAL08, COAL09, COAL10,
    COAL_DEL,
];

// ============================================================================
// C51
// ============================================================================

const C51_STR1: &str = r"        ___                                            ";
const C51_STR2: &str = r"       _|_|_  _     __       __             ___________";
const C51_STR3: &str = r"    D__/   \_(_)___|  |__H__|  |_____I_Ii_()|_________|";
const C51_STR4: &str = r"     | `---'   |:: `--'  H  `--'         |  |___ ___|  ";
const C51_STR5: &str = r"    +|~~~~~~~~++::~~~~~~~H~~+=====+~~~~~~|~~||_| |_||  ";
const C51_STR6: &str = r"    ||        | ::       H  +=====+      |  |::  ...|  ";
const C51_STR7: &str = r"|    | _______|_::-----------------[][]-----|       |  ";

const C51_WH11: &str = r"| /~~ ||   |-----/~~~~\  /[I_____I][][] --|||_______|__";
const C51_WH12: &str = r"------'|oOo|=[]=-      ||      ||      |  ||=======_|__";
const C51_WH13: &str = r"/~\____|___|/~\_|  O=======O=======O   |__|+-/~\_|     ";
const C51_WH14: &str = r"\_/         \_/  \____/  \____/  \____/      \_/       ";

const C51_WH21: &str = r"| /~~ ||   |-----/~~~~\  /[I_____I][][] --|||_______|__";
const C51_WH22: &str = r"------'|oOo|=[]=- O=======O=======O    |  ||=======_|__";
const C51_WH23: &str = r"/~\____|___|/~\_|      ||      ||      |__|+-/~\_|     ";
const C51_WH24: &str = r"\_/         \_/  \____/  \____/  \____/      \_/       ";

const C51_WH31: &str = r"| /~~ ||   |-----/~~~~\  /[I_____I][][] --|||_______|__";
const C51_WH32: &str = r"------'|oOo|==[]=- O=======O=======O   |  ||=======_|__";
const C51_WH33: &str = r"/~\____|___|/~\_|      ||      ||      |__|+-/~\_|     ";
const C51_WH34: &str = r"\_/         \_/  \____/  \____/  \____/      \_/       ";

const C51_WH41: &str = r"| /~~ ||   |-----/~~~~\  /[I_____I][][] --|||_______|__";
const C51_WH42: &str = r"------'|oOo|===[]=- O=======O=======O  |  ||=======_|__";
const C51_WH43: &str = r"/~\____|___|/~\_|      ||      ||      |__|+-/~\_|     ";
const C51_WH44: &str = r"\_/         \_/  \____/  \____/  \____/      \_/       ";

const C51_WH51: &str = r"| /~~ ||   |-----/~~~~\  /[I_____I][][] --|||_______|__";
const C51_WH52: &str = r"------'|oOo|===[]=-    ||      ||      |  ||=======_|__";
const C51_WH53: &str = r"/~\____|___|/~\_|    O=======O=======O |__|+-/~\_|     ";
const C51_WH54: &str = r"\_/         \_/  \____/  \____/  \____/      \_/       ";

const C51_WH61: &str = r"| /~~ ||   |-----/~~~~\  /[I_____I][][] --|||_______|__";
const C51_WH62: &str = r"------'|oOo|==[]=-     ||      ||      |  ||=======_|__";
const C51_WH63: &str = r"/~\____|___|/~\_|   O=======O=======O  |__|+-/~\_|     ";
const C51_WH64: &str = r"\_/         \_/  \____/  \____/  \____/      \_/       ";

const C51_DEL: &str = r"                                                       ";

/// C51 engine, one frame per wheel phase
pub const C51_ENGINE: &[&[&str]] = &[
    &[
        C51_STR1, C51_STR2, C51_STR3, C51_STR4, C51_STR5, C51_STR6, C51_STR7, C51_WH11, C51_WH12,
        C51_WH13, C51_WH14, C51_DEL,
    ],
    &[
        C51_STR1, C51_STR2, C51_STR3, C51_STR4, C51_STR5, C51_STR6, C51_STR7, C51_WH21, C51_WH22,
        C51_WH23, C51_WH24, C51_DEL,
    ],
    &[
        C51_STR1, C51_STR2, C51_STR3, C51_STR4, C51_STR5, C51_STR6, C51_STR7, C51_WH31, C51_WH32,
        C51_WH33, C51_WH34, C51_DEL,
    ],
    &[
        C51_STR1, C51_STR2, C51_STR3, C51_STR4, C51_STR5, C51_STR6, C51_STR7, C51_WH41, C51_WH42,
        C51_WH43, C51_WH44, C51_DEL,
    ],
    &[
        C51_STR1, C51_STR2, C51_STR3, C51_STR4, C51_STR5, C51_STR6, C51_STR7, C51_WH51, C51_WH52,
        C51_WH53, C51_WH54, C51_DEL,
    ],
    &[
        C51_STR1, C51_STR2, C51_STR3, C51_STR4, C51_STR5, C51_STR6, C51_STR7, C51_WH61, C51_WH62,
        C51_WH63, C51_WH64, C51_DEL,
    ],
];

// ============================================================================
// SL logo
// ============================================================================

const LOGO1: &str = r"     ++      +------ ";
const LOGO2: &str = r"     ||      |+-+ |  ";
const LOGO3: &str = r"   /---------|| | |  ";
const LOGO4: &str = r"  + ========  +-+ |  ";

const LWHL11: &str = r" _|--O========O~\-+  ";
const LWHL12: &str = r"//// \_/      \_/    ";

const LWHL21: &str = r" _|--/O========O\-+  ";
const LWHL22: &str = r"//// \_/      \_/    ";

const LWHL31: &str = r" _|--/~O========O-+  ";
const LWHL32: &str = r"//// \_/      \_/    ";

const LWHL41: &str = r" _|--/~\------/~\-+  ";
const LWHL42: &str = r"//// \_O========O    ";

const LWHL51: &str = r" _|--/~\------/~\-+  ";
const LWHL52: &str = r"//// \O========O/    ";

const LWHL61: &str = r" _|--/~\------/~\-+  ";
const LWHL62: &str = r"//// O========O_/    ";

const LOGO_DEL: &str = r"                     ";

/// Logo engine, one frame per wheel phase
pub const LOGO_ENGINE: &[&[&str]] = &[
    &[LOGO1, LOGO2, LOGO3, LOGO4, LWHL11, LWHL12, LOGO_DEL],
    &[LOGO1, LOGO2, LOGO3, LOGO4, LWHL21, LWHL22, LOGO_DEL],
    &[LOGO1, LOGO2, LOGO3, LOGO4, LWHL31, LWHL32, LOGO_DEL],
    &[LOGO1, LOGO2, LOGO3, LOGO4, LWHL41, LWHL42, LOGO_DEL],
    &[LOGO1, LOGO2, LOGO3, LOGO4, LWHL51, LWHL52, LOGO_DEL],
    &[LOGO1, LOGO2, LOGO3, LOGO4, LWHL61, LWHL62, LOGO_DEL],
];

/// Coal wagon behind the logo engine
pub const LOGO_COAL: &[&str] = &[
    r"____                 ",
    r"|   \@@@@@@@@@@@     ",
    r"|    \@@@@@@@@@@@@@_ ",
    r"|                  | ",
    r"|__________________| ",
    r"   (O)       (O)     ",
    LOGO_DEL,
];

/// Passenger car behind the logo coal wagon
pub const LOGO_CAR: &[&str] = &[
    r"____________________ ",
    r"|  ___ ___ ___ ___ | ",
    r"|  |_| |_| |_| |_| | ",
    r"|__________________| ",
    r"|__________________| ",
    r"   (O)        (O)    ",
    LOGO_DEL,
];

// ============================================================================
// TGV
// ============================================================================

const TGV_STR0: &str = r"                 _____________________________________ ";
const TGV_STR1: &str = r"           _____/ ___    ___    ___    ___    ___    | ";
const TGV_STR2: &str = r"       ___/     ||___|  |___|  |___|  |___|  |___|   | ";
const TGV_STR3: &str = r"    __/  |==|   |                                    | ";
const TGV_STR4: &str = r"  _/     |==|   |   T G V    -=====================- | ";
const TGV_STR5: &str = r" /_______|__|___|____________________________________| ";
const TGV_STR6: &str = r" \___________________________________________________/ ";

const TGV_WHL1: &str = r"    (O)(O)   (O)(O)                  (O)(O)   (O)(O)   ";
const TGV_WHL2: &str = r"    (o)(o)   (o)(o)                  (o)(o)   (o)(o)   ";

const TGV_DEL: &str = r"                                                       ";

/// TGV power car, one frame per bogie phase
pub const TGV_ENGINE: &[&[&str]] = &[
    &[
        TGV_STR0, TGV_STR1, TGV_STR2, TGV_STR3, TGV_STR4, TGV_STR5, TGV_STR6, TGV_WHL1, TGV_DEL,
    ],
    &[
        TGV_STR0, TGV_STR1, TGV_STR2, TGV_STR3, TGV_STR4, TGV_STR5, TGV_STR6, TGV_WHL2, TGV_DEL,
    ],
];

/// Two TGV coaches, drawn as one part
pub const TGV_COACHES: &[&str] = &[
    r"  __________________________________________________     __________________________________________________   ",
    r" |  ___  ___  ___  ___  ___  ___  ___  ___  ___  __ |   |  ___  ___  ___  ___  ___  ___  ___  ___  ___  __ |  ",
    r" | |   ||   ||   ||   ||   ||   ||   ||   ||   ||  ||   | |   ||   ||   ||   ||   ||   ||   ||   ||   ||  ||  ",
    r" | |___||___||___||___||___||___||___||___||___||__||   | |___||___||___||___||___||___||___||___||___||__||  ",
    r"=|                                                  |  =|                                                  |  ",
    r" |__________________________________________________|   |__________________________________________________|  ",
    r"  \_______________________________________________/      \_______________________________________________/    ",
    r"    (O)(O)                              (O)(O)             (O)(O)                              (O)(O)         ",
    r"                                                                                                              ",
];

// ============================================================================
// Passengers
// ============================================================================

/// Passenger figure, two phases of two lines each
pub const MAN: [[&str; 2]; 2] = [["", "(O)"], ["Help!", r"\O/"]];

// ============================================================================
// Smoke
// ============================================================================

/// Number of fade stages a puff goes through
pub const SMOKE_STAGES: usize = 16;

/// Puff glyphs per kind and stage; the last stage is blank
pub const SMOKE: [[&str; SMOKE_STAGES]; 2] = [
    [
        "(   )", "(    )", "(    )", "(   )", "(  )", "(  )", "( )", "( )", "()", "()", "O", "O",
        "O", "O", "O", " ",
    ],
    [
        "(@@@)", "(@@@@)", "(@@@@)", "(@@@)", "(@@)", "(@@)", "(@)", "(@)", "@@", "@@", "@", "@",
        "@", "@", "@", " ",
    ],
];

/// Blanks matching the width of each smoke stage
pub const SMOKE_ERASER: [&str; SMOKE_STAGES] = [
    "     ", "      ", "      ", "     ", "    ", "    ", "   ", "   ", "  ", "  ", " ", " ", " ",
    " ", " ", " ",
];

/// Rows a puff rises when leaving each stage
pub const SMOKE_DY: [i32; SMOKE_STAGES] = [2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Columns a puff drifts when leaving each stage
pub const SMOKE_DX: [i32; SMOKE_STAGES] = [-2, -1, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_uniform_width(name: &str, lines: &[&str]) {
        let width = lines[0].chars().count();
        for (idx, line) in lines.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                width,
                "{name} line {idx} has a different width"
            );
        }
    }

    #[test]
    fn test_engine_frames_are_rectangular() {
        for (name, engine) in [
            ("d51", D51_ENGINE),
            ("c51", C51_ENGINE),
            ("logo", LOGO_ENGINE),
            ("tgv", TGV_ENGINE),
        ] {
            let height = engine[0].len();
            for frame in engine {
                assert_eq!(frame.len(), height, "{name} frame height");
                assert_uniform_width(name, frame);
            }
        }
    }

    #[test]
    fn test_trailing_parts_are_rectangular() {
        assert_uniform_width("d51 tender", D51_TENDER);
        assert_uniform_width("c51 tender", C51_TENDER);
        assert_uniform_width("logo coal", LOGO_COAL);
        assert_uniform_width("logo car", LOGO_CAR);
        assert_uniform_width("tgv coaches", TGV_COACHES);
    }

    #[test]
    fn test_smoke_erasers_cover_glyphs() {
        for kind in SMOKE {
            for (stage, glyph) in kind.iter().enumerate() {
                assert!(glyph.len() <= SMOKE_ERASER[stage].len().max(1));
            }
        }
        assert_eq!(SMOKE[0][SMOKE_STAGES - 1], " ");
        assert_eq!(SMOKE[1][SMOKE_STAGES - 1], " ");
    }
}
