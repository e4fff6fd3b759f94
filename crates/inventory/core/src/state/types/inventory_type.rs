//! Inventory categories.

/// The category an inventory belongs to.
///
/// The type decides:
/// - whether records are worn gear ([`InventoryType::is_equip_shaped`])
/// - whether the slot limit may grow ([`InventoryType::is_extendable`])
/// - which persistence schema populates it ([`InventoryType::code`])
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InventoryType {
    /// Gear that is owned but not worn.
    Equip,
    /// Consumables.
    Use,
    /// Placeable setup items (chairs and the like).
    Setup,
    /// Materials and quest items.
    Etc,
    /// Items bought with premium currency.
    Cash,
    /// Gear currently worn. Positions are negative body slots.
    Equipped,
    /// Placeholder for rows that do not belong to any inventory.
    #[default]
    Undefined,
}

/// Raised when a persisted inventory code does not name any [`InventoryType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown inventory type code {0}")]
pub struct UnknownInventoryCode(pub i8);

impl InventoryType {
    /// Inventory types that hold persisted rows, in load order.
    pub const PERSISTED: [InventoryType; 6] = [
        InventoryType::Equipped,
        InventoryType::Equip,
        InventoryType::Use,
        InventoryType::Setup,
        InventoryType::Etc,
        InventoryType::Cash,
    ];

    /// Code used by the persistence schema.
    pub const fn code(self) -> i8 {
        match self {
            Self::Undefined => 0,
            Self::Equip => 1,
            Self::Use => 2,
            Self::Setup => 3,
            Self::Etc => 4,
            Self::Cash => 5,
            Self::Equipped => -1,
        }
    }

    pub const fn from_code(code: i8) -> Result<Self, UnknownInventoryCode> {
        Ok(match code {
            0 => Self::Undefined,
            1 => Self::Equip,
            2 => Self::Use,
            3 => Self::Setup,
            4 => Self::Etc,
            5 => Self::Cash,
            -1 => Self::Equipped,
            other => return Err(UnknownInventoryCode(other)),
        })
    }

    /// True for inventories whose records are gear rather than consumables.
    pub const fn is_equip_shaped(self) -> bool {
        matches!(self, Self::Equip | Self::Equipped)
    }

    /// True if the slot limit may be raised during play.
    pub const fn is_extendable(self) -> bool {
        !matches!(self, Self::Undefined | Self::Equipped | Self::Cash)
    }

    /// True for the worn-gear inventory, the only one with negative positions.
    pub const fn is_equipped(self) -> bool {
        matches!(self, Self::Equipped)
    }
}

impl TryFrom<i8> for InventoryType {
    type Error = UnknownInventoryCode;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
