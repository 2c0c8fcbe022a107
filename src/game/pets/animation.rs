// Animation keys and the frame table sliced from a pet sprite sheet

use std::fmt;

use crate::engine::assets::{Frame, SpriteSheet};

/// Frames per animation strip in the sheet
pub const FRAMES_PER_STRIP: u32 = 4;

/// Number of colour variants laid side by side in the sheet
pub const COLOR_VARIANT_COUNT: u32 = 4;

/// Number of rows in the sheet
pub const SHEET_ROWS: u32 = 8;

/// What the pet is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Walk,
    Idle,
    Sleep,
    Special,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Walk, Action::Idle, Action::Sleep, Action::Special];

    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Walk => "walk",
            Action::Idle => "idle",
            Action::Sleep => "sleep",
            Action::Special => "special",
        }
    }
}

/// Which way the pet is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    /// Map a numeric direction (0=right, 1=down, 2=left, 3=up).
    /// Anything else falls back to right.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Up,
            _ => Direction::Right,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
        }
    }
}

/// Fur colour; selects which block of columns frames are sliced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorVariant {
    #[default]
    White,
    Brown,
    Golden,
    Black,
}

impl ColorVariant {
    pub const ALL: [ColorVariant; 4] = [
        ColorVariant::White,
        ColorVariant::Brown,
        ColorVariant::Golden,
        ColorVariant::Black,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    /// The next variant, wrapping around after black
    pub fn next(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % Self::ALL.len()]
    }
}

impl TryFrom<u8> for ColorVariant {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(value)
    }
}

/// Identifies one frame sequence: an (action, direction) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationKey {
    pub action: Action,
    pub direction: Direction,
}

impl AnimationKey {
    pub const fn new(action: Action, direction: Direction) -> Self {
        Self { action, direction }
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.action.name(), self.direction.name())
    }
}

/// The eight rows of a pet sprite sheet, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRow {
    WalkRight,
    IdleUpDown,
    WalkDown,
    Sleep,
    WalkLeft,
    IdleRightLeft,
    WalkUp,
    Special,
}

impl SheetRow {
    pub const ALL: [SheetRow; SHEET_ROWS as usize] = [
        SheetRow::WalkRight,
        SheetRow::IdleUpDown,
        SheetRow::WalkDown,
        SheetRow::Sleep,
        SheetRow::WalkLeft,
        SheetRow::IdleRightLeft,
        SheetRow::WalkUp,
        SheetRow::Special,
    ];

    pub fn row(self) -> u32 {
        self as u32
    }

    /// Animation keys served by this row's frames.
    ///
    /// Idle rows serve two facings each. Sleep and special poses have no facing
    /// of their own, so they are deliberately registered under every direction:
    /// a plain `<action>_<direction>` lookup such as `sleep_left` would
    /// otherwise never find them.
    pub fn keys(self) -> Vec<AnimationKey> {
        use Action::*;
        use Direction::*;

        match self {
            SheetRow::WalkRight => vec![AnimationKey::new(Walk, Right)],
            SheetRow::WalkDown => vec![AnimationKey::new(Walk, Down)],
            SheetRow::WalkLeft => vec![AnimationKey::new(Walk, Left)],
            SheetRow::WalkUp => vec![AnimationKey::new(Walk, Up)],
            SheetRow::IdleUpDown => vec![AnimationKey::new(Idle, Up), AnimationKey::new(Idle, Down)],
            SheetRow::IdleRightLeft => {
                vec![AnimationKey::new(Idle, Right), AnimationKey::new(Idle, Left)]
            }
            SheetRow::Sleep => Direction::ALL.iter().map(|&d| AnimationKey::new(Sleep, d)).collect(),
            SheetRow::Special => Direction::ALL
                .iter()
                .map(|&d| AnimationKey::new(Special, d))
                .collect(),
        }
    }
}

/// Frame sequences indexed by action and direction.
/// An empty sequence means the key is absent.
#[derive(Debug, Clone, Default)]
pub struct AnimationTable {
    sequences: [[Vec<Frame>; 4]; 4],
}

impl AnimationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice every row of `sheet` for the given colour variant.
    ///
    /// Rows that fall outside the sheet, including offsets too large for `u32`,
    /// are skipped and their keys stay absent.
    pub fn from_sheet(
        sheet: &SpriteSheet,
        frame_width: u32,
        frame_height: u32,
        color: ColorVariant,
    ) -> Self {
        let mut table = Self::new();
        // Saturated offsets land past any real sheet and fail the bounds check
        let start_x = color
            .index()
            .saturating_mul(FRAMES_PER_STRIP)
            .saturating_mul(frame_width);

        for row in SheetRow::ALL {
            let y = row.row().saturating_mul(frame_height);
            match sheet.slice_strip(start_x, y, frame_width, frame_height, FRAMES_PER_STRIP) {
                Ok(frames) => {
                    for key in row.keys() {
                        table.insert(key, frames.clone());
                    }
                }
                Err(e) => {
                    log::warn!("Skipping sprite row {:?} ({:?}): {}", row, color, e);
                }
            }
        }

        table
    }

    /// Store a frame sequence under `key`, replacing any previous one
    pub fn insert(&mut self, key: AnimationKey, frames: Vec<Frame>) {
        self.sequences[key.action.index()][key.direction.index()] = frames;
    }

    /// Frames for `key`, or `None` if absent
    pub fn get(&self, key: AnimationKey) -> Option<&[Frame]> {
        let frames = &self.sequences[key.action.index()][key.direction.index()];
        (!frames.is_empty()).then_some(frames.as_slice())
    }

    pub fn contains(&self, key: AnimationKey) -> bool {
        self.get(key).is_some()
    }

    /// All keys that currently have frames
    pub fn keys(&self) -> Vec<AnimationKey> {
        Action::ALL
            .iter()
            .flat_map(|&a| Direction::ALL.iter().map(move |&d| AnimationKey::new(a, d)))
            .filter(|&k| self.contains(k))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Build a full sheet where each pixel encodes (variant, row, frame)
    pub(crate) fn synthetic_sheet(frame_size: u32, rows: u32) -> SpriteSheet {
        let width = COLOR_VARIANT_COUNT * FRAMES_PER_STRIP * frame_size;
        let height = rows * frame_size;
        SpriteSheet::new(RgbaImage::from_fn(width, height, |x, y| {
            let column = x / frame_size;
            let variant = column / FRAMES_PER_STRIP;
            let frame = column % FRAMES_PER_STRIP;
            let row = y / frame_size;
            Rgba([variant as u8, row as u8, frame as u8, 255])
        }))
    }

    #[test]
    fn test_key_display() {
        let key = AnimationKey::new(Action::Walk, Direction::Right);
        assert_eq!(key.to_string(), "walk_right");
        assert_eq!(AnimationKey::new(Action::Idle, Direction::Up).to_string(), "idle_up");
    }

    #[test]
    fn test_direction_from_index() {
        assert_eq!(Direction::from_index(0), Direction::Right);
        assert_eq!(Direction::from_index(1), Direction::Down);
        assert_eq!(Direction::from_index(2), Direction::Left);
        assert_eq!(Direction::from_index(3), Direction::Up);
        assert_eq!(Direction::from_index(7), Direction::Right);
        assert_eq!(Direction::from_index(-1), Direction::Right);
    }

    #[test]
    fn test_color_variant_conversion() {
        assert_eq!(ColorVariant::try_from(2), Ok(ColorVariant::Golden));
        assert_eq!(ColorVariant::try_from(4), Err(4));
        assert_eq!(ColorVariant::Black.next(), ColorVariant::White);
        assert_eq!(ColorVariant::White.next(), ColorVariant::Brown);
    }

    #[test]
    fn test_full_sheet_has_every_key() {
        let table = AnimationTable::from_sheet(&synthetic_sheet(4, 8), 4, 4, ColorVariant::White);

        assert_eq!(table.keys().len(), 16);
        for key in table.keys() {
            assert_eq!(table.get(key).map(<[Frame]>::len), Some(4));
        }
    }

    #[test]
    fn test_rows_map_to_keys() {
        let table = AnimationTable::from_sheet(&synthetic_sheet(4, 8), 4, 4, ColorVariant::White);
        let row_of = |action, direction| {
            table.get(AnimationKey::new(action, direction)).unwrap()[0].get_pixel(0, 0)[1]
        };

        assert_eq!(row_of(Action::Walk, Direction::Right), 0);
        assert_eq!(row_of(Action::Idle, Direction::Up), 1);
        assert_eq!(row_of(Action::Idle, Direction::Down), 1);
        assert_eq!(row_of(Action::Walk, Direction::Down), 2);
        assert_eq!(row_of(Action::Sleep, Direction::Left), 3);
        assert_eq!(row_of(Action::Walk, Direction::Left), 4);
        assert_eq!(row_of(Action::Idle, Direction::Right), 5);
        assert_eq!(row_of(Action::Idle, Direction::Left), 5);
        assert_eq!(row_of(Action::Walk, Direction::Up), 6);
        assert_eq!(row_of(Action::Special, Direction::Down), 7);
    }

    #[test]
    fn test_frames_in_order() {
        let table = AnimationTable::from_sheet(&synthetic_sheet(4, 8), 4, 4, ColorVariant::White);
        let frames = table.get(AnimationKey::new(Action::Walk, Direction::Up)).unwrap();

        let order: Vec<u8> = frames.iter().map(|f| f.get_pixel(2, 2)[2]).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_color_variant_offsets_columns() {
        let sheet = synthetic_sheet(4, 8);
        let key = AnimationKey::new(Action::Walk, Direction::Right);

        for variant in ColorVariant::ALL {
            let table = AnimationTable::from_sheet(&sheet, 4, 4, variant);
            assert_eq!(table.get(key).unwrap()[0].get_pixel(0, 0)[0], variant.index() as u8);
        }
    }

    #[test]
    fn test_short_sheet_skips_missing_rows() {
        // Only the first four rows exist
        let table = AnimationTable::from_sheet(&synthetic_sheet(4, 4), 4, 4, ColorVariant::White);

        assert!(table.contains(AnimationKey::new(Action::Walk, Direction::Right)));
        assert!(table.contains(AnimationKey::new(Action::Sleep, Direction::Up)));
        assert!(!table.contains(AnimationKey::new(Action::Walk, Direction::Left)));
        assert!(!table.contains(AnimationKey::new(Action::Idle, Direction::Right)));
        assert!(!table.contains(AnimationKey::new(Action::Special, Direction::Right)));
    }

    #[test]
    fn test_huge_frames_skip_every_row() {
        let sheet = synthetic_sheet(4, 8);

        let wide = AnimationTable::from_sheet(&sheet, 1 << 30, 4, ColorVariant::Black);
        assert!(wide.is_empty());

        let tall = AnimationTable::from_sheet(&sheet, 4, 1 << 30, ColorVariant::White);
        assert!(tall.is_empty());

        let both = AnimationTable::from_sheet(&sheet, u32::MAX, u32::MAX, ColorVariant::Golden);
        assert!(both.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = AnimationTable::new();
        assert!(table.is_empty());
        assert!(table.get(AnimationKey::new(Action::Idle, Direction::Right)).is_none());
    }

    #[test]
    fn test_insert_empty_sequence_is_absent() {
        let mut table = AnimationTable::new();
        let key = AnimationKey::new(Action::Walk, Direction::Down);
        table.insert(key, Vec::new());
        assert!(!table.contains(key));
    }
}
