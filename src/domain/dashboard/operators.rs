use derive_more::Display;
use strum::{EnumCount, EnumIter};

/// The four cash registers tracked on the dashboard, whichever subset a feed reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum OperatorSlot {
    #[display(fmt = "PIPO")]
    Pipo,
    #[display(fmt = "RICHARD")]
    Richard,
    #[display(fmt = "BODEGA 55")]
    Bodega55,
    #[display(fmt = "DIEGO Y EMILIO")]
    DiegoYEmilio,
}

/// Source name → slot. Names are matched exactly as the ledger spells them.
const SOURCE_NAMES: [(&str, OperatorSlot); 4] = [
    ("PIPO", OperatorSlot::Pipo),
    ("RICHARD", OperatorSlot::Richard),
    ("BODEGA 55", OperatorSlot::Bodega55),
    ("DIEGO Y EMILIO", OperatorSlot::DiegoYEmilio),
];

impl OperatorSlot {
    /// `None` for names without a display slot; callers skip those silently.
    pub fn from_source_name(name: &str) -> Option<Self> {
        SOURCE_NAMES
            .iter()
            .find(|(source, _)| *source == name)
            .map(|(_, slot)| *slot)
    }

    /// Selector of the operator card.
    pub fn card_target(&self) -> &'static str {
        match self {
            OperatorSlot::Pipo => "#cash-pipo",
            OperatorSlot::Richard => "#cash-richard",
            OperatorSlot::Bodega55 => "#cash-bodega",
            OperatorSlot::DiegoYEmilio => "#cash-diego",
        }
    }

    /// Selector of the balance text inside the card.
    pub fn balance_target(&self) -> &'static str {
        match self {
            OperatorSlot::Pipo => "#cash-pipo .operator-balance",
            OperatorSlot::Richard => "#cash-richard .operator-balance",
            OperatorSlot::Bodega55 => "#cash-bodega .operator-balance",
            OperatorSlot::DiegoYEmilio => "#cash-diego .operator-balance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_slot_round_trips_through_its_source_name() {
        for slot in OperatorSlot::iter() {
            assert_eq!(OperatorSlot::from_source_name(&slot.to_string()), Some(slot));
        }
    }

    #[test]
    fn unknown_and_partial_names_have_no_slot() {
        assert_eq!(OperatorSlot::from_source_name("EMILIO"), None);
        assert_eq!(OperatorSlot::from_source_name("pipo"), None);
        assert_eq!(OperatorSlot::from_source_name(""), None);
    }
}
