//! Stable property tags for the sparse, order-independent attribute
//! encoding.
//!
//! One namespace covers every section. Values are append-only: a tag,
//! once assigned, is never reused for a different meaning, and no two
//! tags share a value. Writers emit a tag only when the field differs
//! from its documented default; readers that do not recognize a tag can
//! skip its kind-marked value.

/// Property tag byte preceding each optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    // Project header
    ProjectName = 1,
    ProjectDirectory = 2,
    TableDef = 3,

    // Background attributes (windows and controls)
    BackgroundKind = 10,
    Texture = 11,
    AlternateTexture = 12,
    BorderWidth = 13,

    // Window attributes
    Color = 20,
    IgnoreRtl = 21,
    Member = 22,

    // Control text attributes
    TextKey = 30,
    TextDynamic = 31,
    TextScale = 32,
    TextColor = 33,
    TextAlign = 34,
    TextStyle = 35,

    // Control tooltip attributes
    TooltipKey = 40,
    TooltipScale = 41,

    // Click actions
    LeftClick = 50,
    RightClick = 51,
    ShiftClick = 52,

    // Containers and table data
    ContainerKind = 60,
    ContainerChild = 61,
    ContainerElement = 62,
    DisplayColumn = 63,
    InternalColumn = 64,
    TableInsert = 65,

    // Table definition attributes
    TableColumn = 70,
    HighlightColor = 71,
    DividerColor = 72,
}

impl Tag {
    /// All defined tags, in declaration order.
    pub const ALL: [Tag; 30] = [
        Tag::ProjectName,
        Tag::ProjectDirectory,
        Tag::TableDef,
        Tag::BackgroundKind,
        Tag::Texture,
        Tag::AlternateTexture,
        Tag::BorderWidth,
        Tag::Color,
        Tag::IgnoreRtl,
        Tag::Member,
        Tag::TextKey,
        Tag::TextDynamic,
        Tag::TextScale,
        Tag::TextColor,
        Tag::TextAlign,
        Tag::TextStyle,
        Tag::TooltipKey,
        Tag::TooltipScale,
        Tag::LeftClick,
        Tag::RightClick,
        Tag::ShiftClick,
        Tag::ContainerKind,
        Tag::ContainerChild,
        Tag::ContainerElement,
        Tag::DisplayColumn,
        Tag::InternalColumn,
        Tag::TableInsert,
        Tag::TableColumn,
        Tag::HighlightColor,
        Tag::DividerColor,
    ];

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a tag byte.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::ProjectName),
            2 => Some(Self::ProjectDirectory),
            3 => Some(Self::TableDef),
            10 => Some(Self::BackgroundKind),
            11 => Some(Self::Texture),
            12 => Some(Self::AlternateTexture),
            13 => Some(Self::BorderWidth),
            20 => Some(Self::Color),
            21 => Some(Self::IgnoreRtl),
            22 => Some(Self::Member),
            30 => Some(Self::TextKey),
            31 => Some(Self::TextDynamic),
            32 => Some(Self::TextScale),
            33 => Some(Self::TextColor),
            34 => Some(Self::TextAlign),
            35 => Some(Self::TextStyle),
            40 => Some(Self::TooltipKey),
            41 => Some(Self::TooltipScale),
            50 => Some(Self::LeftClick),
            51 => Some(Self::RightClick),
            52 => Some(Self::ShiftClick),
            60 => Some(Self::ContainerKind),
            61 => Some(Self::ContainerChild),
            62 => Some(Self::ContainerElement),
            63 => Some(Self::DisplayColumn),
            64 => Some(Self::InternalColumn),
            65 => Some(Self::TableInsert),
            70 => Some(Self::TableColumn),
            71 => Some(Self::HighlightColor),
            72 => Some(Self::DividerColor),
            _ => None,
        }
    }
}
