//! Network-wide feature switches ("sporks") read by consensus code.

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SporkId {
    SuperblocksEnabled,
}

impl SporkId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SuperblocksEnabled => "SPORK_9_SUPERBLOCKS_ENABLED",
        }
    }
}
