// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control identifiers.
//!
//! There are three independent namespaces: digital keys, continuous
//! directions (analog sticks) and discrete directions (d-pads). The same
//! integer may be used in each of them without aliasing, so `KeyId(1)` and
//! `DiscreteDirectionId(1)` name different controls.

/// Identifier of a digital control, like a face button or a shoulder button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyId(pub i32);

/// Identifier of a continuous direction control, like an analog stick.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousDirectionId(pub i32);

/// Identifier of a discrete direction control, like a d-pad.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteDirectionId(pub i32);

/// Any control identifier.
///
/// Used where the kind of control is only known at runtime, for example when
/// listing the controls driven by a simulated state
/// (see [`merge_simulated`](crate::state::merge_simulated)).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Id {
    /// A digital key.
    Key(KeyId),
    /// A continuous direction.
    ContinuousDirection(ContinuousDirectionId),
    /// A discrete direction.
    DiscreteDirection(DiscreteDirectionId),
}

impl From<KeyId> for Id {
    fn from(id: KeyId) -> Self {
        Self::Key(id)
    }
}

impl From<ContinuousDirectionId> for Id {
    fn from(id: ContinuousDirectionId) -> Self {
        Self::ContinuousDirection(id)
    }
}

impl From<DiscreteDirectionId> for Id {
    fn from(id: DiscreteDirectionId) -> Self {
        Self::DiscreteDirection(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaces_do_not_alias() {
        let a = Id::from(KeyId(1));
        let b = Id::from(ContinuousDirectionId(1));
        let c = Id::from(DiscreteDirectionId(1));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(a, Id::Key(KeyId(1)));
    }
}
